//! Vector tile geometry encoding.
//!
//! The encoder works in two stages. [`draw_geometry`] walks a [`Geometry`] and collects
//! [`DrawCommand`]s with tile-space deltas into a [`DrawCommandBuffer`]. [`encode_commands`] then
//! groups the commands into runs, sizes the output exactly and writes the header and zigzag
//! varint parameters of every run into a single allocation.
//!
//! - [`buffer`]: the command list and the running tile position.
//! - [`command`]: command ids, headers and the draw commands themselves.
//! - [`config`]: the affine transform from input coordinates to tile units.
//! - [`decoder`]: reads a command stream back, mostly for verification.
//! - [`encoder`]: run grouping, sizing and byte serialization.
//! - [`geometry_type`]: the wire-level geometry type of a feature.
//! - [`walker`]: the geometry traversal.
//!
//! [`encode_geometry`] runs both stages in one call.

mod buffer;
mod command;
mod config;
mod decoder;
mod encoder;
mod geometry_type;
mod walker;

pub use buffer::DrawCommandBuffer;
pub use command::{CommandId, DrawCommand};
pub use config::TileConfig;
pub use decoder::{decode_commands, decode_paths};
pub use encoder::{CommandRuns, encode_commands, encode_into, encoded_size};
pub use geometry_type::GeomType;
pub use walker::draw_geometry;

use crate::{EncodeError, Geometry};
use log::debug;
use mvtgeom_core::Blob;

/// Encodes `geometry` into the vector tile draw-command byte stream.
///
/// Coordinates are mapped into tile units with `config`. A geometry without any vertices encodes
/// to an empty blob.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidConfig`] for a degenerate `config`,
/// [`EncodeError::UnsupportedGeometry`] if `geometry` contains a type without a vector tile
/// encoding, [`EncodeError::CoordinateOutOfRange`] if a vertex leaves the `i32` tile range,
/// [`EncodeError::RunTooLong`] if a run of commands does not fit in one header, and
/// [`EncodeError::AllocationFailure`] if the command list or the output cannot be allocated.
pub fn encode_geometry(geometry: &Geometry, config: &TileConfig) -> Result<Blob, EncodeError> {
	let mut buffer = DrawCommandBuffer::with_capacity(geometry.vertex_count())?;
	draw_geometry(geometry, config, &mut buffer)?;
	let blob = encode_commands(buffer.commands())?;

	debug!(
		"encoded {} into {} commands, {} bytes",
		geometry.type_name(),
		buffer.len(),
		blob.len()
	);
	Ok(blob)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, Coordinates, LineStringGeometry, PointGeometry};
	use pretty_assertions::assert_eq;

	fn encode_hex(geometry: &Geometry) -> String {
		encode_geometry(geometry, &TileConfig::default()).unwrap().as_hex()
	}

	#[test]
	fn encodes_points_and_lines() {
		assert_eq!(encode_hex(&Geometry::new_point([0, 0])), "09 00 00");
		assert_eq!(encode_hex(&Geometry::new_point([-1, -2])), "09 01 03");
		assert_eq!(
			encode_hex(&Geometry::new_line_string(vec![[0, 0], [1, 1], [0, 3]])),
			"09 00 00 12 02 02 01 04"
		);
	}

	#[test]
	fn ignores_z_and_m() {
		let point = Geometry::Point(PointGeometry(Coordinates::new_zm(1.0, 2.0, 3.0, 4.0)));
		assert_eq!(encode_hex(&point), "09 02 04");
	}

	#[test]
	fn empty_geometries_encode_to_nothing() {
		assert!(encode_geometry(&Geometry::new_collection(vec![]), &TileConfig::default()).unwrap().is_empty());
		assert!(
			encode_geometry(&Geometry::LineString(LineStringGeometry::new()), &TileConfig::default())
				.unwrap()
				.is_empty()
		);
	}

	#[test]
	fn applies_config() {
		let config = TileConfig::new(100.0, 200.0, 0.5, 0.5);
		assert_eq!(
			encode_geometry(&Geometry::new_point([102, 196]), &config).unwrap().as_hex(),
			"09 08 0f"
		);
	}

	#[test]
	fn propagates_errors() {
		let curve = Geometry::CircularString(LineStringGeometry::from(vec![[0, 0], [1, 1], [2, 0]]));
		assert_eq!(
			encode_geometry(&curve, &TileConfig::default()),
			Err(EncodeError::UnsupportedGeometry {
				type_name: "CircularString"
			})
		);
		assert!(matches!(
			encode_geometry(&Geometry::new_point([0, 0]), &TileConfig::new(0.0, 0.0, f64::NAN, 1.0)),
			Err(EncodeError::InvalidConfig { .. })
		));
	}

	#[test]
	fn invalid_config_fails_for_any_geometry() {
		let config = TileConfig::new(0.0, 0.0, 1.0, 0.0);
		let expected = Err(EncodeError::InvalidConfig {
			reason: "scale_y is zero".to_string(),
		});
		assert_eq!(encode_geometry(&Geometry::new_line_string(vec![[0, 0], [1, 1]]), &config), expected);
		// nothing to transform, the config is still checked
		assert_eq!(encode_geometry(&Geometry::new_collection(vec![]), &config), expected);
	}
}
