use super::*;
use std::fmt::Debug;

/// Any geometry the encoder can be handed.
///
/// The set of variants is closed. `CircularString` and `Triangle` are part of the input model so
/// that sources carrying them can be represented, but they have no vector tile encoding and are
/// rejected by the encoder.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
	CircularString(LineStringGeometry),
	Triangle(RingGeometry),
}

impl Geometry {
	pub fn new_point<T: Copy + Into<f64>>(value: [T; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T: Copy + Into<f64>>(value: Vec<[T; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T: Copy + Into<f64>>(value: Vec<Vec<[T; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T: Copy + Into<f64>>(value: Vec<Vec<Vec<[T; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_collection(value: Vec<Geometry>) -> Self {
		Self::GeometryCollection(value)
	}

	/// Returns the name of the variant, as used in log and error messages.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
			Geometry::CircularString(_) => "CircularString",
			Geometry::Triangle(_) => "Triangle",
		}
	}

	/// Total number of coordinates in this geometry and all nested members.
	#[must_use]
	pub fn vertex_count(&self) -> usize {
		match self {
			Geometry::Point(g) => g.vertex_count(),
			Geometry::LineString(g) | Geometry::CircularString(g) => g.vertex_count(),
			Geometry::Polygon(g) => g.vertex_count(),
			Geometry::MultiPoint(g) => g.vertex_count(),
			Geometry::MultiLineString(g) => g.vertex_count(),
			Geometry::MultiPolygon(g) => g.vertex_count(),
			Geometry::GeometryCollection(members) => members.iter().map(Geometry::vertex_count).sum(),
			Geometry::Triangle(g) => g.vertex_count(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) | Geometry::CircularString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
			Geometry::Triangle(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
