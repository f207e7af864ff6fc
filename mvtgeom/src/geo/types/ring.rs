use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use std::fmt::Debug;

/// A closed sequence of coordinates, the building block of polygons.
///
/// Rings are stored as given: closure, winding and minimum length are not checked, and the
/// closing vertex (when present) is an ordinary member of the sequence.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl GeometryTrait for RingGeometry {
	fn vertex_count(&self) -> usize {
		self.0.len()
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
