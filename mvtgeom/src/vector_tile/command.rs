//! Draw commands of the vector tile geometry encoding.
//! <https://github.com/mapbox/vector-tile-spec/blob/master/2.1/README.md#43-geometry-encoding>

/// The 3-bit command id stored in the low bits of every command header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandId {
	MoveTo = 1,
	LineTo = 2,
	ClosePath = 7,
}

impl CommandId {
	/// Number of bits the run length is shifted by in a command header.
	pub const BITS: u32 = 3;

	#[must_use]
	pub fn as_u32(self) -> u32 {
		self as u32
	}

	/// Number of zigzag-encoded parameters that follow each command of this kind.
	#[must_use]
	pub fn parameter_count(self) -> usize {
		match self {
			CommandId::MoveTo | CommandId::LineTo => 2,
			CommandId::ClosePath => 0,
		}
	}

	/// Longest run a single 32-bit header can describe.
	pub const MAX_COUNT: u32 = u32::MAX >> Self::BITS;

	/// Builds the header for a run of `count` commands of this kind: `(count << 3) | id`.
	///
	/// Returns `None` if `count` exceeds [`CommandId::MAX_COUNT`].
	#[must_use]
	pub fn header(self, count: usize) -> Option<u32> {
		u32::try_from(count)
			.ok()
			.filter(|count| *count <= Self::MAX_COUNT)
			.map(|count| (count << Self::BITS) | self.as_u32())
	}

	/// Splits a header into its command id and run length.
	#[must_use]
	pub fn parse_header(header: u32) -> (Option<CommandId>, u32) {
		let id = match header & 0x7 {
			1 => Some(CommandId::MoveTo),
			2 => Some(CommandId::LineTo),
			7 => Some(CommandId::ClosePath),
			_ => None,
		};
		(id, header >> Self::BITS)
	}
}

/// A single draw command with its delta from the previously drawn position, in tile units.
///
/// `ClosePath` exists in the encoding but is never produced by the encoder; it only shows up in
/// streams read back with the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCommand {
	MoveTo { dx: i32, dy: i32 },
	LineTo { dx: i32, dy: i32 },
	ClosePath,
}

impl DrawCommand {
	#[must_use]
	pub fn id(&self) -> CommandId {
		match self {
			DrawCommand::MoveTo { .. } => CommandId::MoveTo,
			DrawCommand::LineTo { .. } => CommandId::LineTo,
			DrawCommand::ClosePath => CommandId::ClosePath,
		}
	}

	/// Returns the `(dx, dy)` parameters, or `None` for commands without parameters.
	#[must_use]
	pub fn delta(&self) -> Option<(i32, i32)> {
		match *self {
			DrawCommand::MoveTo { dx, dy } | DrawCommand::LineTo { dx, dy } => Some((dx, dy)),
			DrawCommand::ClosePath => None,
		}
	}
}
