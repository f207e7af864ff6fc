use super::{CommandId, DrawCommand};
use crate::EncodeError;
use mvtgeom_core::{
	Blob,
	varint::{self, zigzag},
};

/// Iterator over the maximal runs of consecutive commands of the same kind, in emission order.
///
/// Each run is written as one header `(run_length << 3) | command_id`, followed by the parameters of
/// every command in the run.
pub struct CommandRuns<'a> {
	rest: &'a [DrawCommand],
}

impl<'a> CommandRuns<'a> {
	#[must_use]
	pub fn new(commands: &'a [DrawCommand]) -> Self {
		Self { rest: commands }
	}
}

impl<'a> Iterator for CommandRuns<'a> {
	type Item = (CommandId, &'a [DrawCommand]);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.rest.first()?.id();
		let length = self.rest.iter().take_while(|command| command.id() == id).count();
		let (run, rest) = self.rest.split_at(length);
		self.rest = rest;
		Some((id, run))
	}
}

fn run_header(id: CommandId, length: usize) -> Result<u32, EncodeError> {
	id.header(length).ok_or(EncodeError::RunTooLong { length })
}

/// Computes the exact number of bytes [`encode_into`] will write for `commands`.
///
/// # Errors
///
/// Returns [`EncodeError::RunTooLong`] if a run exceeds [`CommandId::MAX_COUNT`] commands.
pub fn encoded_size(commands: &[DrawCommand]) -> Result<usize, EncodeError> {
	CommandRuns::new(commands)
		.map(|(id, run)| -> Result<usize, EncodeError> {
			let header = run_header(id, run.len())?;
			let parameters: usize = run
				.iter()
				.filter_map(DrawCommand::delta)
				.map(|(dx, dy)| varint::encoded_size(zigzag(dx)) + varint::encoded_size(zigzag(dy)))
				.sum();
			Ok(varint::encoded_size(header) + parameters)
		})
		.sum()
}

/// Serializes `commands` into the start of `out` and returns the number of bytes written.
///
/// # Errors
///
/// Returns [`EncodeError::RunTooLong`] if a run exceeds [`CommandId::MAX_COUNT`] commands.
///
/// # Panics
///
/// Panics if `out` is shorter than [`encoded_size`]`(commands)`.
pub fn encode_into(commands: &[DrawCommand], out: &mut [u8]) -> Result<usize, EncodeError> {
	let mut position = 0;
	for (id, run) in CommandRuns::new(commands) {
		position += varint::encode(run_header(id, run.len())?, &mut out[position..]);
		for (dx, dy) in run.iter().filter_map(DrawCommand::delta) {
			position += varint::encode(zigzag(dx), &mut out[position..]);
			position += varint::encode(zigzag(dy), &mut out[position..]);
		}
	}
	Ok(position)
}

/// Serializes `commands` into a [`Blob`] allocated once at its final size.
///
/// An empty command list gives an empty blob.
pub fn encode_commands(commands: &[DrawCommand]) -> Result<Blob, EncodeError> {
	let size = encoded_size(commands)?;
	let mut blob = Blob::try_new_sized(size).map_err(|_| EncodeError::AllocationFailure {
		requested: size,
		unit: "bytes",
	})?;
	let written = encode_into(commands, blob.as_mut_slice())?;
	debug_assert_eq!(written, size, "sizing and encoding passes disagree");
	Ok(blob)
}
