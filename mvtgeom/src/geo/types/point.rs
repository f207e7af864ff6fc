use super::{Coordinates, GeometryTrait};
use std::fmt::Debug;

/// A single position. The simplest geometry and the building block of multi points.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn vertex_count(&self) -> usize {
		1
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
