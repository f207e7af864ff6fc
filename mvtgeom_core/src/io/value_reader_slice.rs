use super::ValueReader;
use std::io::{Cursor, Read};

/// A [`ValueReader`] over a borrowed byte slice.
pub struct ValueReaderSlice<'a> {
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a> ValueReaderSlice<'a> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		ValueReaderSlice {
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl ValueReader for ValueReaderSlice<'_> {
	fn get_reader(&mut self) -> &mut dyn Read {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&self) -> u64 {
		self.cursor.position()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	#[test]
	fn test_len() {
		let reader = ValueReaderSlice::new(&[0x80; 42]);
		assert_eq!(reader.len(), 42);
		assert_eq!(reader.remaining(), 42);
		assert!(!ValueReaderSlice::new(&[]).has_remaining());
	}

	#[test]
	fn test_read_varint() -> Result<()> {
		let blob = vec![0b10101100, 0b00000010];
		let mut reader = ValueReaderSlice::new(&blob);

		assert_eq!(reader.read_varint()?, 300);
		assert_eq!(reader.position(), 2);
		assert!(!reader.has_remaining());
		Ok(())
	}

	#[test]
	fn test_read_varint_max() -> Result<()> {
		let mut reader = ValueReaderSlice::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
		assert_eq!(reader.read_varint()?, u32::MAX);
		Ok(())
	}

	#[test]
	fn test_read_varint_too_long() {
		let mut reader = ValueReaderSlice::new(&[0x80; 10]);
		assert!(reader.read_varint().is_err());
	}

	#[test]
	fn test_read_varint_overflow() {
		let mut reader = ValueReaderSlice::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0x1F]);
		assert!(reader.read_varint().is_err());
	}

	#[test]
	fn test_read_varint_truncated() {
		let mut reader = ValueReaderSlice::new(&[0x82]);
		assert!(reader.read_varint().is_err());
	}

	#[test]
	fn test_read_svarint() -> Result<()> {
		let mut reader = ValueReaderSlice::new(&[149, 1, 0x01, 0x04]);
		assert_eq!(reader.read_svarint()?, -75);
		assert_eq!(reader.read_svarint()?, -1);
		assert_eq!(reader.read_svarint()?, 2);
		assert_eq!(reader.remaining(), 0);
		Ok(())
	}
}
