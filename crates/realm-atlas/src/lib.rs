//! Realm atlas crate.
//!
//! Addressing for the tile world: bounds on the Cartesian plane, conversion
//! between world pixels, tiles and chunks, tile sheet indexing, and region
//! lookup. Every position is a [`realm_coords::Coordinate`]; grid-aligned
//! results are built through [`realm_coords::non_decimal`].
//!
//! ```rust
//! use realm_atlas::{AtlasConfig, TileSpace};
//! use realm_coords::Coordinate;
//!
//! let space = TileSpace::new(&AtlasConfig::default()).unwrap();
//! let tile = space.world_to_tile(Coordinate::of(100.0, 50.0).unwrap()).unwrap();
//! assert_eq!(tile, Coordinate::from((2, 1)));
//! ```

pub mod bound;
pub mod config;
pub mod error;
pub mod logging;
pub mod region;
pub mod sheet;
pub mod space;

pub use bound::{BoundDifference, CartesianBound, SquareBound, SquareEvenBound};
pub use config::AtlasConfig;
pub use error::{BoundError, BoundRule, ConfigError, RegionError, TileSheetError};
pub use region::RegionMap;
pub use sheet::TileSheet;
pub use space::TileSpace;
