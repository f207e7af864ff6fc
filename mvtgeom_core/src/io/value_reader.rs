// This module defines the `ValueReader` trait for reading varint-encoded values from a byte source.
//
// # Overview
//
// The trait is implemented by `ValueReaderSlice`, which reads from a borrowed byte slice. It keeps
// track of the read position, so callers can loop with `has_remaining()` until the input is used up.
// Varint decoding itself lives in `crate::varint`.
//
// # Examples
//
// ```rust
// use mvtgeom_core::io::{ValueReader, ValueReaderSlice};
//
// let mut reader = ValueReaderSlice::new(&[0x09, 0x01, 0x03]);
// assert_eq!(reader.read_varint()?, 9);
// assert_eq!(reader.read_svarint()?, -1);
// assert_eq!(reader.read_svarint()?, -2);
// assert!(!reader.has_remaining());
// ```

use crate::varint::{self, unzigzag};
use anyhow::Result;
use std::io::Read;

/// A trait for reading varint-encoded values from a positioned byte source.
pub trait ValueReader {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn Read;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&self) -> u64;

	/// Returns the number of bytes remaining to be read.
	fn remaining(&self) -> u64 {
		self.len() - self.position()
	}

	/// Checks if there are any bytes remaining to be read.
	fn has_remaining(&self) -> bool {
		self.remaining() > 0
	}

	/// Reads an unsigned base-128 varint that must fit into 32 bits.
	///
	/// # Errors
	/// Returns an error if the data ends inside the varint, or if the varint is longer than
	/// five bytes or carries bits above the 32nd.
	fn read_varint(&mut self) -> Result<u32> {
		varint::read(self.get_reader())
	}

	/// Reads a zigzag-encoded signed varint.
	///
	/// # Errors
	/// Returns an error if reading the underlying varint fails.
	fn read_svarint(&mut self) -> Result<i32> {
		Ok(unzigzag(self.read_varint()?))
	}
}
