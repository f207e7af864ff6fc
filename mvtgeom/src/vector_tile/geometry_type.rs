use crate::Geometry;

/// The wire-level geometry type a vector tile feature declares for its command stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GeomType {
	#[default]
	Unknown = 0,
	Point = 1,
	LineString = 2,
	Polygon = 3,
}

impl GeomType {
	#[must_use]
	pub fn as_u64(&self) -> u64 {
		*self as u64
	}
}

impl From<u64> for GeomType {
	fn from(value: u64) -> Self {
		match value {
			1 => GeomType::Point,
			2 => GeomType::LineString,
			3 => GeomType::Polygon,
			_ => GeomType::Unknown,
		}
	}
}

impl From<&Geometry> for GeomType {
	/// Single and multi variants share a type. A collection gets the type of its members if they
	/// all agree, otherwise `Unknown`; so do curves and triangles.
	fn from(geometry: &Geometry) -> Self {
		use Geometry::*;
		match geometry {
			Point(_) | MultiPoint(_) => GeomType::Point,
			LineString(_) | MultiLineString(_) => GeomType::LineString,
			Polygon(_) | MultiPolygon(_) => GeomType::Polygon,
			GeometryCollection(members) => {
				let mut types = members.iter().map(GeomType::from);
				match types.next() {
					Some(first) if types.all(|t| t == first) => first,
					_ => GeomType::Unknown,
				}
			}
			CircularString(_) | Triangle(_) => GeomType::Unknown,
		}
	}
}
