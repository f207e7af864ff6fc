use thiserror::Error;

/// Everything that can stop a geometry from being encoded.
///
/// None of these are recovered from internally. Encoding is deterministic, so a failure for a
/// given input will repeat on every retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
	#[error("'{type_name}' geometry type not supported")]
	UnsupportedGeometry { type_name: &'static str },

	#[error("could not allocate room for {requested} {unit}")]
	AllocationFailure { requested: usize, unit: &'static str },

	#[error("invalid tile config: {reason}")]
	InvalidConfig { reason: String },

	#[error("coordinate ({x}, {y}) is outside the tile coordinate range")]
	CoordinateOutOfRange { x: f64, y: f64 },

	#[error("run of {length} commands does not fit in a command header")]
	RunTooLong { length: usize },
}
