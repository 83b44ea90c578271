use realm_coords::Coordinate;

use crate::bound::CartesianBound;
use crate::error::RegionError;

/// Named areas of the atlas, looked up by the tile a player stands on.
///
/// Regions are expected not to overlap; a lookup that hits more than one is an
/// error rather than a silent first-match.
#[derive(Debug, Clone)]
pub struct RegionMap<T> {
    regions: Vec<(CartesianBound, T)>,
}

impl<T> Default for RegionMap<T> {
    fn default() -> Self {
        Self { regions: Vec::new() }
    }
}

impl<T> RegionMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, bound: CartesianBound, value: T) {
        self.regions.push((bound, value));
    }

    pub fn with_region(mut self, bound: CartesianBound, value: T) -> Self {
        self.insert(bound, value);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CartesianBound, &T)> {
        self.regions.iter().map(|(bound, value)| (bound, value))
    }

    /// The region containing `tile`, if any.
    pub fn locate(&self, tile: Coordinate) -> Result<Option<&T>, RegionError> {
        let mut hits = self.regions.iter().filter(|(bound, _)| bound.contains(tile));

        let first = hits.next();
        let extra = hits.count();
        if extra > 0 {
            log::debug!("{} regions overlap at {tile}", extra + 1);
            return Err(RegionError::Ambiguous { tile, matches: extra + 1 });
        }

        Ok(first.map(|(_, value)| value))
    }
}

impl<T> FromIterator<(CartesianBound, T)> for RegionMap<T> {
    fn from_iter<I: IntoIterator<Item = (CartesianBound, T)>>(iter: I) -> Self {
        Self { regions: iter.into_iter().collect() }
    }
}
