//! The input geometry model: coordinates, the simple and multi geometry types, and the
//! [`Geometry`] sum type the encoder walks over.

mod geometry;
mod types;

pub use geometry::*;
pub use types::*;
