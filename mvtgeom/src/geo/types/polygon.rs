use super::{CompositeGeometryTrait, GeometryTrait, RingGeometry};
use std::fmt::Debug;

/// A polygon: an exterior ring followed by any number of interior rings (holes).
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	fn vertex_count(&self) -> usize {
		self.0.iter().map(RingGeometry::vertex_count).sum()
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rings_keep_their_order() {
		let polygon = PolygonGeometry::from(vec![
			vec![[0, 0], [3, 0], [3, 3], [0, 3], [0, 0]],
			vec![[1, 1], [1, 2], [2, 2], [1, 1]],
		]);
		assert_eq!(polygon.len(), 2);
		assert_eq!(polygon.vertex_count(), 9);
		assert_eq!(polygon.first().map(RingGeometry::len), Some(5));
		assert_eq!(polygon.last().map(RingGeometry::len), Some(4));
	}

	#[test]
	fn empty_polygon_has_no_vertices() {
		assert_eq!(PolygonGeometry::new().vertex_count(), 0);
		assert_eq!(PolygonGeometry::from(vec![Vec::<[f64; 2]>::new()]).vertex_count(), 0);
	}
}
