//! Encodes vector geometries into the draw-command byte stream of the Mapbox Vector Tile
//! geometry encoding.
//!
//! ```rust
//! use mvtgeom::{Geometry, TileConfig, encode_geometry};
//!
//! let line = Geometry::new_line_string(vec![[0, 0], [1, 1], [0, 3]]);
//! let blob = encode_geometry(&line, &TileConfig::default()).unwrap();
//! assert_eq!(blob.as_hex(), "09 00 00 12 02 02 01 04");
//! ```

mod error;
mod geo;
pub mod vector_tile;

pub use error::*;
pub use geo::*;
pub use mvtgeom_core::Blob;
pub use vector_tile::{TileConfig, encode_geometry};
