use super::{CommandId, DrawCommand};
use anyhow::{Context, Result, bail};
use mvtgeom_core::io::{ValueReader, ValueReaderSlice};

/// Parses a geometry command stream back into its draw commands.
///
/// # Errors
///
/// Fails on unknown command ids, on streams that end inside a run, and on malformed varints.
pub fn decode_commands(data: &[u8]) -> Result<Vec<DrawCommand>> {
	// https://github.com/mapbox/vector-tile-spec/blob/master/2.1/README.md#43-geometry-encoding
	let mut reader = ValueReaderSlice::new(data);
	let mut commands = Vec::new();

	while reader.has_remaining() {
		let header = reader
			.read_varint()
			.context("Failed to read varint for geometry command")?;
		let (id, count) = CommandId::parse_header(header);
		let Some(id) = id else {
			bail!("Unknown command {}", header & 0x7)
		};

		for _ in 0..count {
			let command = match id {
				CommandId::ClosePath => DrawCommand::ClosePath,
				CommandId::MoveTo | CommandId::LineTo => {
					let dx = reader.read_svarint().context("Failed to read x coordinate")?;
					let dy = reader.read_svarint().context("Failed to read y coordinate")?;
					if id == CommandId::MoveTo {
						DrawCommand::MoveTo { dx, dy }
					} else {
						DrawCommand::LineTo { dx, dy }
					}
				}
			};
			commands.push(command);
		}
	}

	Ok(commands)
}

/// Parses a geometry command stream into paths of absolute tile coordinates.
///
/// Every `MoveTo` starts a new path; `ClosePath` repeats the first vertex of the current path.
///
/// # Errors
///
/// Fails if the stream is malformed, does not start with `MoveTo`, or closes an empty path.
pub fn decode_paths(data: &[u8]) -> Result<Vec<Vec<[i32; 2]>>> {
	let mut paths: Vec<Vec<[i32; 2]>> = Vec::new();
	let (mut x, mut y) = (0i32, 0i32);

	for command in decode_commands(data)? {
		match command {
			DrawCommand::MoveTo { dx, dy } => {
				x = x.wrapping_add(dx);
				y = y.wrapping_add(dy);
				paths.push(vec![[x, y]]);
			}
			DrawCommand::LineTo { dx, dy } => {
				x = x.wrapping_add(dx);
				y = y.wrapping_add(dy);
				let Some(path) = paths.last_mut() else {
					bail!("LineTo command found before any MoveTo")
				};
				path.push([x, y]);
			}
			DrawCommand::ClosePath => {
				let Some(path) = paths.last_mut() else {
					bail!("ClosePath command found on an empty path")
				};
				let first = path[0];
				path.push(first);
			}
		}
	}

	Ok(paths)
}
