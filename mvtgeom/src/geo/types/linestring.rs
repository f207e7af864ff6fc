use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use std::fmt::Debug;

/// An ordered sequence of connected coordinates forming a path.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn vertex_count(&self) -> usize {
		self.0.len()
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
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

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);
