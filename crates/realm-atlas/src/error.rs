//! Error types for the atlas layer.

use std::fmt;

use realm_coords::{Coordinate, InvalidCoordinateError};

/// One of the corner relations a [`CartesianBound`](crate::bound::CartesianBound) must satisfy.
///
/// Each rule is reported on its own so a failing construction points at the
/// exact corner pair involved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoundRule {
    /// `tr.x = br.x`
    RightEdgeVertical,
    /// `tr.y = tl.y`
    TopEdgeHorizontal,
    /// `bl.x = tl.x`
    LeftEdgeVertical,
    /// `bl.y = br.y`
    BottomEdgeHorizontal,
    /// `tr.x > tl.x`
    TopEdgeOrdered,
    /// `tr.y > br.y`
    RightEdgeOrdered,
    /// `br.x > bl.x`
    BottomEdgeOrdered,
    /// `tl.y > bl.y`
    LeftEdgeOrdered,
}

impl fmt::Display for BoundRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self {
            BoundRule::RightEdgeVertical => "tr.x = br.x",
            BoundRule::TopEdgeHorizontal => "tr.y = tl.y",
            BoundRule::LeftEdgeVertical => "bl.x = tl.x",
            BoundRule::BottomEdgeHorizontal => "bl.y = br.y",
            BoundRule::TopEdgeOrdered => "tr.x > tl.x",
            BoundRule::RightEdgeOrdered => "tr.y > br.y",
            BoundRule::BottomEdgeOrdered => "br.x > bl.x",
            BoundRule::LeftEdgeOrdered => "tl.y > bl.y",
        };
        f.write_str(rule)
    }
}

/// Errors raised while constructing bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoundError {
    /// A corner relation does not hold.
    Violated(BoundRule),
    /// A radius is zero, negative or not finite.
    InvalidRadius { name: &'static str, value: f64 },
    /// Width and height differ.
    NotSquare { width: f64, height: f64 },
    /// Side length of a square bound is not even.
    OddSide { side: f64 },
    /// A derived corner could not be represented.
    Coordinate(InvalidCoordinateError),
}

impl fmt::Display for BoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundError::Violated(rule) => write!(f, "bound constraint violated: {rule}"),
            BoundError::InvalidRadius { name, value } => {
                write!(f, "{name} must be greater than 0 (got {value})")
            }
            BoundError::NotSquare { width, height } => {
                write!(f, "bound is not a square {{width={width}, height={height}}}")
            }
            BoundError::OddSide { side } => write!(f, "square bound side is not even {{side={side}}}"),
            BoundError::Coordinate(e) => write!(f, "invalid bound corner: {e}"),
        }
    }
}

impl std::error::Error for BoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoundError::Coordinate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidCoordinateError> for BoundError {
    fn from(e: InvalidCoordinateError) -> Self {
        BoundError::Coordinate(e)
    }
}

/// Errors raised by [`RegionMap`](crate::region::RegionMap) lookups.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    /// More than one region contains the coordinate.
    Ambiguous { tile: Coordinate, matches: usize },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionError::Ambiguous { tile, matches } => {
                write!(f, "{matches} regions contain {tile}; regions must not overlap")
            }
        }
    }
}

impl std::error::Error for RegionError {}

/// Errors raised by [`TileSheet`](crate::sheet::TileSheet).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TileSheetError {
    /// Sheet dimensions are zero or too large to index.
    InvalidDimensions(&'static str),
    /// The cell has a fractional component.
    NotGridAligned(Coordinate),
    /// The cell lies outside the sheet.
    OutOfSheet { cell: Coordinate, columns: u32, rows: u32 },
    /// The tile index is past the end of the sheet.
    IndexOutOfRange { index: u32, len: u32 },
}

impl fmt::Display for TileSheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileSheetError::InvalidDimensions(msg) => write!(f, "invalid tile sheet dimensions: {msg}"),
            TileSheetError::NotGridAligned(cell) => write!(f, "tile cell {cell} is not grid aligned"),
            TileSheetError::OutOfSheet { cell, columns, rows } => {
                write!(f, "tile cell {cell} is outside a {columns}x{rows} sheet")
            }
            TileSheetError::IndexOutOfRange { index, len } => {
                write!(f, "tile index {index} out of range for sheet of {len} tiles")
            }
        }
    }
}

impl std::error::Error for TileSheetError {}

/// Errors raised when validating [`AtlasConfig`](crate::config::AtlasConfig).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    /// Tile size must be finite and positive.
    InvalidTileSize(f64),
    /// Chunk dimensions must be non-zero.
    InvalidChunkSize { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTileSize(size) => {
                write!(f, "tile size must be a finite value greater than 0 (got {size})")
            }
            ConfigError::InvalidChunkSize { width, height } => {
                write!(f, "chunk size must be non-zero (got {width}x{height})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
