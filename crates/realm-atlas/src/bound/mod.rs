//! Rectangular regions of the atlas plane.
//!
//! Bounds use y-up Cartesian space. Cell enumeration and set algebra operate on
//! the integral coordinates a bound covers, which is how tile ranges are
//! loaded and unloaded as the view moves.

mod cartesian;
mod set_ops;
mod square;

pub use cartesian::CartesianBound;
pub use set_ops::{difference, intersection, union, BoundDifference};
pub use square::{SquareBound, SquareEvenBound};
