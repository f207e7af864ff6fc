use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry};
use std::fmt::Debug;

/// A collection of line strings, stored in drawing order.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn vertex_count(&self) -> usize {
		self.0.iter().map(LineStringGeometry::vertex_count).sum()
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
