//! Coordinate value types for the realm atlas.
//!
//! One representation of "a 2D position" is shared by world space, tile space
//! and chunk space. Grid-aligned callers go through [`non_decimal::of`], which
//! validates integrality and returns the same [`Coordinate`] type as
//! [`Coordinate::of`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coordinate`] | `Coordinate`, arithmetic, rounding, parsing, pairing |
//! | [`non_decimal`] | integral-only construction path |
//! | [`error`] | `Axis`, `InvalidCoordinateError`, `ParseCoordinateError` |
//!
//! # Quick start
//!
//! ```rust
//! use realm_coords::{non_decimal, Axis, Coordinate};
//!
//! let world = Coordinate::of(100.5, -20.25).unwrap();
//! let tile = non_decimal::of(2.0, -1.0).unwrap();
//! assert!(tile.is_integral());
//! assert!(!world.is_integral());
//!
//! let err = non_decimal::of(2.0, 3.25).unwrap_err();
//! assert_eq!(err.axis(), Axis::Y);
//! ```

pub mod coordinate;
pub mod error;
pub mod non_decimal;

pub use coordinate::Coordinate;
pub use error::{Axis, InvalidCoordinateError, ParseCoordinateError};
