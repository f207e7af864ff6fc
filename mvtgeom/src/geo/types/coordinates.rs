use std::fmt::Debug;

/// A position with mandatory X/Y ordinates and optional Z (elevation) and M (measure) ordinates.
///
/// The vector tile encoder only ever reads `x` and `y`; the higher ordinates are carried along
/// so that geometries coming from 3D/measured sources can be passed in unchanged.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
	m: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None, m: None }
	}

	#[must_use]
	pub fn new_z(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z: Some(z), m: None }
	}

	#[must_use]
	pub fn new_m(x: f64, y: f64, m: f64) -> Self {
		Self { x, y, z: None, m: Some(m) }
	}

	#[must_use]
	pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
		Self {
			x,
			y,
			z: Some(z),
			m: Some(m),
		}
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn m(&self) -> Option<f64> {
		self.m
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl<T> From<[T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		[value.x, value.y]
	}
}

impl Debug for Coordinates {
	/// Formats as `[x, y]`, followed by `z=` and `m=` entries when present.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut list = f.debug_list();
		list.entry(&self.x).entry(&self.y);
		if let Some(z) = &self.z {
			list.entry(&format_args!("z={z:?}"));
		}
		if let Some(m) = &self.m {
			list.entry(&format_args!("m={m:?}"));
		}
		list.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_accessors() {
		let c = Coordinates::new(13.404954, 52.520008);
		assert_eq!(c.x(), 13.404954);
		assert_eq!(c.y(), 52.520008);
		assert_eq!(c.z(), None);
		assert_eq!(c.m(), None);
	}

	#[test]
	fn higher_ordinates() {
		let c = Coordinates::new_zm(1.0, 2.0, 3.0, 4.0);
		assert_eq!((c.x(), c.y(), c.z(), c.m()), (1.0, 2.0, Some(3.0), Some(4.0)));

		let c = Coordinates::new_z(1.0, 2.0, 3.0);
		assert_eq!((c.z(), c.m()), (Some(3.0), None));

		let c = Coordinates::new_m(1.0, 2.0, 4.0);
		assert_eq!((c.z(), c.m()), (None, Some(4.0)));
	}

	#[test]
	fn debug_formats_like_array() {
		assert_eq!(format!("{:?}", Coordinates::new(1.0, 2.0)), "[1.0, 2.0]");
		assert_eq!(
			format!("{:?}", Coordinates::new_zm(1.0, 2.0, 3.0, 4.0)),
			"[1.0, 2.0, z=3.0, m=4.0]"
		);
	}

	#[test]
	fn from_arrays_and_tuples() {
		assert_eq!(Coordinates::from(&[7, 8]), Coordinates::new(7.0, 8.0));
		assert_eq!(Coordinates::from([7.5f32, -8.0]), Coordinates::new(7.5, -8.0));
		assert_eq!(Coordinates::from((3.0, 4.0)), Coordinates::new(3.0, 4.0));
	}

	#[test]
	fn into_array_drops_higher_ordinates() {
		let arr: [f64; 2] = Coordinates::new_z(10.25, -20.5, 99.0).into();
		assert_eq!(arr, [10.25, -20.5]);
	}
}
