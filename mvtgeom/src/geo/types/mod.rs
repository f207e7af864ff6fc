// Geometry primitives read by the vector tile encoder. Every type is an ordered, owned
// sequence of its parts: a line string of coordinates, a polygon of rings, a multi polygon
// of polygons, and so on. Shared behaviour lives in `GeometryTrait` and `CompositeGeometryTrait`.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
