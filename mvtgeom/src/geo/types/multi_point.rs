use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry};
use std::fmt::Debug;

/// A collection of independent points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn vertex_count(&self) -> usize {
		self.0.iter().map(PointGeometry::vertex_count).sum()
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);
