use std::collections::HashSet;

use realm_coords::Coordinate;

use super::CartesianBound;

/// Cells exclusive to each side of a pair of bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundDifference {
    /// Cells in the first bound but not the second.
    pub a_minus_b: HashSet<Coordinate>,
    /// Cells in the second bound but not the first.
    pub b_minus_a: HashSet<Coordinate>,
}

impl BoundDifference {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a_minus_b.is_empty() && self.b_minus_a.is_empty()
    }
}

/// Cells inside either bound.
pub fn union(a: CartesianBound, b: CartesianBound) -> HashSet<Coordinate> {
    a.cells().chain(b.cells()).collect()
}

/// Cells inside both bounds.
pub fn intersection(a: CartesianBound, b: CartesianBound) -> HashSet<Coordinate> {
    a.cells().filter(|&cell| b.contains(cell)).collect()
}

pub fn difference(a: CartesianBound, b: CartesianBound) -> BoundDifference {
    BoundDifference {
        a_minus_b: a.cells().filter(|&cell| !b.contains(cell)).collect(),
        b_minus_a: b.cells().filter(|&cell| !a.contains(cell)).collect(),
    }
}
