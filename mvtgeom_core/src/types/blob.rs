//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] that holds encoded bytes.
//!
//! # Overview
//!
//! A [`Blob`] is what the geometry encoder hands back to its caller: the finished draw-command
//! stream, allocated once at its final size. An empty [`Blob`] means "no drawable geometry".
//!
//! # Examples
//!
//! ```rust
//! use mvtgeom_core::Blob;
//!
//! let blob = Blob::from(&[0x09, 0x00, 0x00]);
//! assert_eq!(blob.len(), 3);
//! assert_eq!(blob.as_hex(), "09 00 00");
//! assert_eq!(blob.into_vec(), vec![9, 0, 0]);
//! ```

use std::collections::TryReserveError;
use std::fmt::Debug;
use std::ops::Range;

/// A simple wrapper around [`Vec<u8>`] that provides additional methods for working with byte data.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	///
	/// ```rust
	/// use mvtgeom_core::Blob;
	///
	/// let empty_blob = Blob::new_empty();
	/// assert_eq!(empty_blob.len(), 0);
	/// assert!(empty_blob.is_empty());
	/// ```
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Creates a zero-filled `Blob` of exactly `length` bytes.
	///
	/// The allocation is requested up front with [`Vec::try_reserve_exact`], so running out of
	/// memory is reported as an error instead of aborting the process.
	///
	/// ```rust
	/// use mvtgeom_core::Blob;
	///
	/// let blob = Blob::try_new_sized(5).unwrap();
	/// assert_eq!(blob.as_slice(), &[0, 0, 0, 0, 0]);
	/// ```
	pub fn try_new_sized(length: usize) -> Result<Blob, TryReserveError> {
		let mut bytes = Vec::new();
		bytes.try_reserve_exact(length)?;
		bytes.resize(length, 0);
		Ok(Blob(bytes))
	}

	/// Returns a byte slice from the specified `range`.
	///
	/// # Panics
	///
	/// Panics if the specified range is out of bounds.
	#[must_use]
	pub fn range(&self, range: Range<usize>) -> &[u8] {
		&self.0[range]
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_ref()
	}

	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		self.0.as_mut()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the bytes as lowercase hex pairs separated by single spaces, e.g. `"09 02 04"`.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&Vec<u8>> for Blob {
	fn from(item: &Vec<u8>) -> Self {
		Blob(item.clone())
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

/// Implements [`Debug`] by printing the byte length and hexadecimal representation of the bytes.
impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({}): {}", self.0.len(), self.as_hex())
	}
}

impl Default for Blob {
	fn default() -> Self {
		Self::new_empty()
	}
}
