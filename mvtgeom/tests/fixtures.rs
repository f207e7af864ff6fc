//! Known byte streams for the public encoding API.
//!
//! Every case is checked against the exact output bytes, against the size the sizing pass
//! predicts, and against the paths the decoder reads back.

use mvtgeom::{
	Blob, Coordinates, EncodeError, Geometry, LineStringGeometry, PointGeometry, RingGeometry, TileConfig, encode_geometry,
	vector_tile::{DrawCommandBuffer, GeomType, decode_paths, draw_geometry, encoded_size},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn encode(geometry: &Geometry) -> Blob {
	encode_geometry(geometry, &TileConfig::default()).unwrap()
}

fn outer_with_hole() -> Geometry {
	Geometry::new_polygon(vec![
		vec![[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
		vec![[1, 1], [1, 2], [2, 2], [2, 1], [1, 1]],
	])
}

#[rstest]
#[case::origin_point(Geometry::new_point([0, 0]), "09 00 00")]
#[case::zm_point(Geometry::Point(PointGeometry(Coordinates::new_zm(1.0, 2.0, 3.0, 4.0))), "09 02 04")]
#[case::negative_point(Geometry::new_point([-1, -2]), "09 01 03")]
#[case::line_string(Geometry::new_line_string(vec![[0, 0], [1, 1], [0, 3]]), "09 00 00 12 02 02 01 04")]
#[case::empty_collection(Geometry::new_collection(vec![]), "")]
#[case::polygon_with_hole(outer_with_hole(), "09 00 00 22 08 00 00 08 07 00 00 07 09 02 02 22 00 02 02 00 00 01 01 00")]
#[case::collection(
	Geometry::new_collection(vec![Geometry::new_point([5, 5]), Geometry::new_line_string(vec![[5, 5], [6, 6]])]),
	"11 0a 0a 00 00 0a 02 02"
)]
#[case::multi_point(Geometry::new_multi_point(vec![[1, 1], [1, 1], [3, 2]]), "19 02 02 00 00 04 02")]
#[case::duplicate_vertices(Geometry::new_line_string(vec![[2, 2], [2, 2], [3, 3], [3, 3]]), "09 04 04 0a 02 02")]
fn encodes_fixture(#[case] geometry: Geometry, #[case] expected: &str) {
	let blob = encode(&geometry);
	assert_eq!(blob.as_hex(), expected);

	let mut buffer = DrawCommandBuffer::new();
	draw_geometry(&geometry, &TileConfig::default(), &mut buffer).unwrap();
	assert_eq!(encoded_size(buffer.commands()), Ok(blob.len()));
}

#[rstest]
#[case(17, vec![0x82, 0x01])]
#[case(33, vec![0x82, 0x02])]
fn long_line_keeps_a_single_run(#[case] vertex_count: i32, #[case] header: Vec<u8>) {
	let vertices: Vec<[i32; 2]> = (0..vertex_count).map(|y| [0, y]).collect();
	let bytes = encode(&Geometry::new_line_string(vertices)).into_vec();

	let mut expected = vec![0x09, 0x00, 0x00];
	expected.extend(header);
	for _ in 1..vertex_count {
		expected.extend([0x00, 0x02]);
	}
	assert_eq!(bytes, expected);
}

#[test]
fn polygon_rings_decode_to_absolute_positions() {
	let blob = encode(&outer_with_hole());
	assert_eq!(
		decode_paths(blob.as_slice()).unwrap(),
		vec![
			vec![[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
			vec![[1, 1], [1, 2], [2, 2], [2, 1], [1, 1]],
		]
	);
}

#[test]
fn bbox_config_flips_y() {
	let config = TileConfig::from_bbox([0.0, 0.0, 4096.0, 4096.0], 4096).unwrap();
	let blob = encode_geometry(&Geometry::new_point([10, 4086]), &config).unwrap();
	assert_eq!(blob.as_hex(), "09 14 14");
}

#[test]
fn geometry_type_follows_members() {
	assert_eq!(GeomType::from(&outer_with_hole()), GeomType::Polygon);
	assert_eq!(
		GeomType::from(&Geometry::new_multi_line_string(vec![vec![[0, 0], [1, 1]]])),
		GeomType::LineString
	);
}

#[test]
fn unsupported_types_are_rejected() {
	let curve = Geometry::CircularString(LineStringGeometry::from(vec![[0, 0], [1, 1], [2, 0]]));
	let triangle = Geometry::Triangle(RingGeometry::from(vec![[0, 0], [1, 0], [0, 1], [0, 0]]));

	for geometry in [curve.clone(), triangle, Geometry::new_collection(vec![curve])] {
		let error = encode_geometry(&geometry, &TileConfig::default()).unwrap_err();
		assert!(matches!(error, EncodeError::UnsupportedGeometry { .. }), "{error}");
	}
}

#[test]
fn invalid_config_is_rejected() {
	let error = encode_geometry(&Geometry::new_point([0, 0]), &TileConfig::new(0.0, 0.0, 1.0, 0.0)).unwrap_err();
	assert_eq!(
		error,
		EncodeError::InvalidConfig {
			reason: "scale_y is zero".to_string()
		}
	);
}
