use super::{DrawCommandBuffer, TileConfig};
use crate::{CompositeGeometryTrait, Coordinates, EncodeError, Geometry, PolygonGeometry};
use log::{debug, trace};
use std::slice;

/// Appends the draw commands for `geometry` to `buffer`.
///
/// Components are visited depth first in their stored order. Deltas are taken against the
/// buffer's running position, which is never reset between rings, lines or collection members.
/// Every coordinate sequence starts with an unconditional `MoveTo`; later vertices produce a
/// `LineTo` only if they land on a different tile position than the previous drawn one.
/// Empty sequences, rings and collections contribute nothing.
///
/// # Errors
///
/// Fails on an invalid `config`, on geometry types without a vector tile encoding, and on
/// coordinates outside the `i32` tile range. The buffer content is unspecified after a failure.
pub fn draw_geometry(
	geometry: &Geometry,
	config: &TileConfig,
	buffer: &mut DrawCommandBuffer,
) -> Result<(), EncodeError> {
	config.validate()?;
	draw(geometry, config, buffer)
}

fn draw(geometry: &Geometry, config: &TileConfig, buffer: &mut DrawCommandBuffer) -> Result<(), EncodeError> {
	debug!("draw {}, position {:?}", geometry.type_name(), buffer.position());

	use Geometry::*;
	match geometry {
		Point(point) => draw_coordinates(slice::from_ref(point.as_coord()), config, buffer),
		LineString(line) => draw_coordinates(line.as_vec(), config, buffer),
		Polygon(polygon) => draw_polygon(polygon, config, buffer),
		MultiPoint(points) => {
			for point in points.iter() {
				draw_coordinates(slice::from_ref(point.as_coord()), config, buffer)?;
			}
			Ok(())
		}
		MultiLineString(lines) => {
			for line in lines.iter() {
				draw_coordinates(line.as_vec(), config, buffer)?;
			}
			Ok(())
		}
		MultiPolygon(polygons) => {
			for polygon in polygons.iter() {
				draw_polygon(polygon, config, buffer)?;
			}
			Ok(())
		}
		GeometryCollection(members) => {
			for member in members {
				draw(member, config, buffer)?;
			}
			Ok(())
		}
		CircularString(_) | Triangle(_) => Err(EncodeError::UnsupportedGeometry {
			type_name: geometry.type_name(),
		}),
	}
}

fn draw_polygon(polygon: &PolygonGeometry, config: &TileConfig, buffer: &mut DrawCommandBuffer) -> Result<(), EncodeError> {
	for ring in polygon.iter() {
		draw_coordinates(ring.as_vec(), config, buffer)?;
	}
	Ok(())
}

fn draw_coordinates(
	coordinates: &[Coordinates],
	config: &TileConfig,
	buffer: &mut DrawCommandBuffer,
) -> Result<(), EncodeError> {
	for (index, coord) in coordinates.iter().enumerate() {
		let (x, y) = config.transform(coord)?;
		let (x_last, y_last) = buffer.position();
		let out_of_range = || EncodeError::CoordinateOutOfRange {
			x: coord.x(),
			y: coord.y(),
		};
		let dx = x.checked_sub(x_last).ok_or_else(out_of_range)?;
		let dy = y.checked_sub(y_last).ok_or_else(out_of_range)?;

		if index == 0 {
			trace!("vertex {index}: ({x}, {y}) move to ({dx}, {dy})");
			buffer.push_move_to(dx, dy)?;
		} else if dx != 0 || dy != 0 {
			trace!("vertex {index}: ({x}, {y}) line to ({dx}, {dy})");
			buffer.push_line_to(dx, dy)?;
		} else {
			trace!("vertex {index}: ({x}, {y}) repeats the previous position, skipped");
		}
	}
	Ok(())
}
