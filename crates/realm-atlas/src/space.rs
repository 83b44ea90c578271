use realm_coords::{non_decimal, Coordinate, InvalidCoordinateError};

use crate::bound::{self, BoundDifference, CartesianBound};
use crate::config::AtlasConfig;
use crate::error::{BoundError, ConfigError};

/// Conversions between world space (pixels), tile space and chunk space.
///
/// Tile and chunk coordinates are always produced through
/// [`non_decimal::of`], so every result is grid aligned.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileSpace {
    tile_size: f64,
    chunk_width: f64,
    chunk_height: f64,
}

impl TileSpace {
    pub fn new(config: &AtlasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &AtlasConfig) -> Self {
        Self {
            tile_size: config.tile_size,
            chunk_width: f64::from(config.chunk_width),
            chunk_height: f64::from(config.chunk_height),
        }
    }

    #[inline]
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Tile containing a world position (rounded down).
    pub fn world_to_tile(&self, world: Coordinate) -> Result<Coordinate, InvalidCoordinateError> {
        non_decimal::of(
            (world.x() / self.tile_size).floor(),
            (world.y() / self.tile_size).floor(),
        )
    }

    /// Tile index for a precise position, rounded up.
    pub fn precise_to_tile(&self, world: Coordinate) -> Result<Coordinate, InvalidCoordinateError> {
        non_decimal::of(
            (world.x() / self.tile_size).ceil(),
            (world.y() / self.tile_size).ceil(),
        )
    }

    /// World position of a tile's origin.
    pub fn tile_to_world(&self, tile: Coordinate) -> Result<Coordinate, InvalidCoordinateError> {
        non_decimal::of(
            (tile.x() * self.tile_size).floor(),
            (tile.y() * self.tile_size).floor(),
        )
    }

    /// Chunk containing a tile.
    pub fn chunk_of(&self, tile: Coordinate) -> Result<Coordinate, InvalidCoordinateError> {
        non_decimal::of(
            (tile.x() / self.chunk_width).floor(),
            (tile.y() / self.chunk_height).floor(),
        )
    }

    /// Sparse table key for the chunk containing a tile.
    pub fn chunk_key(&self, tile: Coordinate) -> Option<u128> {
        self.chunk_of(tile).ok()?.cantor_pair_signed()
    }

    /// Whole tiles visible in a viewport of the given pixel size.
    pub fn viewport_tiles(&self, width_px: f64, height_px: f64) -> (u32, u32) {
        // Float-to-int casts saturate; negative or NaN sizes give zero tiles.
        (
            (width_px / self.tile_size).floor() as u32,
            (height_px / self.tile_size).floor() as u32,
        )
    }

    /// Bound of tiles around `center`, extending the given number of tiles each way.
    pub fn view_bound(
        &self,
        center: Coordinate,
        horizontal_radius: u32,
        vertical_radius: u32,
    ) -> Result<CartesianBound, BoundError> {
        CartesianBound::from_midpoint_with_radii(
            center,
            f64::from(horizontal_radius),
            f64::from(vertical_radius),
        )
    }

    /// Tiles leaving and entering view when it moves from `from` to `to`.
    ///
    /// `a_minus_b` holds the tiles to unload, `b_minus_a` the tiles to load.
    /// Both bounds are enumerated tile by tile, so cost is O(area); keep view
    /// radii to what is actually on screen.
    pub fn view_transition(&self, from: CartesianBound, to: CartesianBound) -> BoundDifference {
        let diff = bound::difference(from, to);
        log::debug!(
            "view moved {} -> {}: unload {} tiles, load {} tiles",
            from.midpoint(),
            to.midpoint(),
            diff.a_minus_b.len(),
            diff.b_minus_a.len()
        );
        diff
    }
}

impl Default for TileSpace {
    fn default() -> Self {
        Self::from_validated(&AtlasConfig::default())
    }
}
