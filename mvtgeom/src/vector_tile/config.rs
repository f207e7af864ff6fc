//! Mapping from world coordinates to tile-local integer coordinates.

use crate::{Coordinates, EncodeError};

/// The linear transform from world space to tile space used for one encode call.
///
/// A world coordinate `(x, y)` lands on the tile grid at
/// `(round((x - origin_x) / scale_x), round((y - origin_y) / scale_y))`.
/// The default is the identity transform: origin `(0, 0)`, scale `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileConfig {
	/// X ordinate of the tile origin in world units.
	pub origin_x: f64,
	/// Y ordinate of the tile origin in world units.
	pub origin_y: f64,
	/// World units per tile unit along X.
	pub scale_x: f64,
	/// World units per tile unit along Y. Negative when Y grows downward in the tile.
	pub scale_y: f64,
}

impl Default for TileConfig {
	fn default() -> Self {
		Self {
			origin_x: 0.0,
			origin_y: 0.0,
			scale_x: 1.0,
			scale_y: 1.0,
		}
	}
}

impl TileConfig {
	#[must_use]
	pub fn new(origin_x: f64, origin_y: f64, scale_x: f64, scale_y: f64) -> Self {
		Self {
			origin_x,
			origin_y,
			scale_x,
			scale_y,
		}
	}

	/// Maps the world-space box `[x_min, y_min, x_max, y_max]` onto a tile of `extent` units per side.
	///
	/// The tile origin is the top-left corner of the box and Y grows downward, so `scale_y` is
	/// negative. `(x_min, y_max)` ends up at `(0, 0)` and `(x_max, y_min)` at `(extent, extent)`.
	///
	/// ```rust
	/// use mvtgeom::TileConfig;
	///
	/// let config = TileConfig::from_bbox([0.0, 0.0, 4096.0, 4096.0], 4096).unwrap();
	/// assert_eq!(config, TileConfig::new(0.0, 4096.0, 1.0, -1.0));
	/// ```
	pub fn from_bbox(bbox: [f64; 4], extent: u32) -> Result<Self, EncodeError> {
		let [x_min, y_min, x_max, y_max] = bbox;
		if extent == 0 {
			return Err(EncodeError::InvalidConfig {
				reason: "extent must be greater than zero".to_string(),
			});
		}
		if !(x_max > x_min && y_max > y_min) {
			return Err(EncodeError::InvalidConfig {
				reason: format!("bounding box {bbox:?} is empty or inverted"),
			});
		}
		let extent = f64::from(extent);
		let config = Self::new(x_min, y_max, (x_max - x_min) / extent, -(y_max - y_min) / extent);
		config.validate()?;
		Ok(config)
	}

	/// Checks that the transform can produce finite coordinates.
	///
	/// # Errors
	///
	/// Returns [`EncodeError::InvalidConfig`] if a scale factor is zero or not finite, or if the
	/// origin is not finite.
	pub fn validate(&self) -> Result<(), EncodeError> {
		for (name, scale) in [("scale_x", self.scale_x), ("scale_y", self.scale_y)] {
			if scale == 0.0 {
				return Err(EncodeError::InvalidConfig {
					reason: format!("{name} is zero"),
				});
			}
			if !scale.is_finite() {
				return Err(EncodeError::InvalidConfig {
					reason: format!("{name} is not finite ({scale})"),
				});
			}
		}
		for (name, origin) in [("origin_x", self.origin_x), ("origin_y", self.origin_y)] {
			if !origin.is_finite() {
				return Err(EncodeError::InvalidConfig {
					reason: format!("{name} is not finite ({origin})"),
				});
			}
		}
		Ok(())
	}

	/// Transforms a world coordinate into tile space. Only X and Y are read.
	///
	/// Rounding is half-to-even (`0.5 → 0`, `1.5 → 2`, `-0.5 → 0`), the behaviour of C's `rint` in
	/// the default floating-point environment, and identical on every platform.
	///
	/// # Errors
	///
	/// Returns [`EncodeError::CoordinateOutOfRange`] if the result is NaN or does not fit in an `i32`.
	pub fn transform(&self, coord: &Coordinates) -> Result<(i32, i32), EncodeError> {
		let out_of_range = || EncodeError::CoordinateOutOfRange {
			x: coord.x(),
			y: coord.y(),
		};
		let tx = to_tile_ordinate(coord.x(), self.origin_x, self.scale_x).ok_or_else(out_of_range)?;
		let ty = to_tile_ordinate(coord.y(), self.origin_y, self.scale_y).ok_or_else(out_of_range)?;
		Ok((tx, ty))
	}
}

fn to_tile_ordinate(value: f64, origin: f64, scale: f64) -> Option<i32> {
	let rounded = ((value - origin) / scale).round_ties_even();
	(f64::from(i32::MIN)..=f64::from(i32::MAX))
		.contains(&rounded)
		.then_some(rounded as i32)
}
