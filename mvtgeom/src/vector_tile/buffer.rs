use super::DrawCommand;
use crate::EncodeError;

/// The ordered list of draw commands produced for one geometry, together with the absolute tile
/// position the last command moved to.
///
/// The buffer performs no validation: keeping the first command a `MoveTo` and skipping
/// zero-length segments is up to whoever fills it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawCommandBuffer {
	commands: Vec<DrawCommand>,
	x_last: i32,
	y_last: i32,
}

impl DrawCommandBuffer {
	/// Creates an empty buffer positioned at `(0, 0)`.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty buffer with room for at least `capacity` commands.
	pub fn with_capacity(capacity: usize) -> Result<Self, EncodeError> {
		let mut buffer = Self::new();
		buffer.reserve(capacity)?;
		Ok(buffer)
	}

	/// Makes room for `additional` more commands.
	pub fn reserve(&mut self, additional: usize) -> Result<(), EncodeError> {
		self
			.commands
			.try_reserve(additional)
			.map_err(|_| EncodeError::AllocationFailure {
				requested: additional,
				unit: "draw commands",
			})
	}

	/// Appends a `MoveTo` and advances the running position by `(dx, dy)`.
	pub fn push_move_to(&mut self, dx: i32, dy: i32) -> Result<(), EncodeError> {
		self.push(DrawCommand::MoveTo { dx, dy }, dx, dy)
	}

	/// Appends a `LineTo` and advances the running position by `(dx, dy)`.
	pub fn push_line_to(&mut self, dx: i32, dy: i32) -> Result<(), EncodeError> {
		self.push(DrawCommand::LineTo { dx, dy }, dx, dy)
	}

	fn push(&mut self, command: DrawCommand, dx: i32, dy: i32) -> Result<(), EncodeError> {
		self.reserve(1)?;
		self.commands.push(command);
		self.x_last = self.x_last.wrapping_add(dx);
		self.y_last = self.y_last.wrapping_add(dy);
		Ok(())
	}

	/// The absolute tile position reached by the last command, `(0, 0)` before the first one.
	#[must_use]
	pub fn position(&self) -> (i32, i32) {
		(self.x_last, self.y_last)
	}

	#[must_use]
	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}

	#[must_use]
	pub fn into_commands(self) -> Vec<DrawCommand> {
		self.commands
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.commands.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}
