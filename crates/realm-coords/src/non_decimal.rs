//! Validated construction of grid-aligned coordinates.
//!
//! A non-decimal coordinate is not a separate type. [`of`] checks that both
//! components are integral and then hands back an ordinary [`Coordinate`], so
//! tile indices, atlas cells and free-form world positions all share one
//! representation. The guarantee holds at construction only; arithmetic on the
//! result may produce non-integral values again.
//!
//! ```rust
//! use realm_coords::{non_decimal, Coordinate};
//!
//! let cell = non_decimal::of(4.0, 5.0).unwrap();
//! assert_eq!(cell, Coordinate::of(4.0, 5.0).unwrap());
//!
//! assert!(non_decimal::of(4.5, 5.0).is_err());
//! ```

use crate::coordinate::Coordinate;
use crate::error::{Axis, InvalidCoordinateError};

/// Constructs a coordinate whose components are both integral.
///
/// `x` is validated completely before `y` is looked at, so the error names the
/// first offending component. Negative values and zero are accepted.
pub fn of(x: f64, y: f64) -> Result<Coordinate, InvalidCoordinateError> {
    check(Axis::X, x, x, y)?;
    check(Axis::Y, y, x, y)?;
    Coordinate::of(x, y)
}

/// Grid-aligned coordinate from integer indices. Always integral.
///
/// Indices beyond 2^53 in magnitude round to the nearest representable integer.
pub fn from_grid(x: i64, y: i64) -> Coordinate {
    Coordinate::from_finite(x as f64, y as f64)
}

fn check(axis: Axis, value: f64, x: f64, y: f64) -> Result<(), InvalidCoordinateError> {
    if !value.is_finite() {
        return Err(InvalidCoordinateError::NonFinite { axis, x, y });
    }
    if value.fract() != 0.0 {
        return Err(InvalidCoordinateError::NonDecimal { axis, x, y });
    }
    Ok(())
}
