//! Base-128 varint and zigzag codec for 32-bit values.
//!
//! Vector tile geometry streams store command headers as plain unsigned varints and
//! coordinate deltas as zigzag-transformed varints, so that small negative deltas stay
//! as cheap as small positive ones.
//!
//! # Examples
//!
//! ```rust
//! use mvtgeom_core::varint::{decode, encode, encoded_size, unzigzag, zigzag};
//!
//! assert_eq!(zigzag(-1), 1);
//! assert_eq!(unzigzag(4), 2);
//!
//! let mut buf = [0u8; 5];
//! let written = encode(300, &mut buf);
//! assert_eq!(&buf[..written], &[0b1010_1100, 0b0000_0010]);
//! assert_eq!(encoded_size(300), written);
//! assert_eq!(decode(&buf[..written]).unwrap(), (300, 2));
//! ```

use anyhow::{Context, Result, bail, ensure};
use byteorder::ReadBytesExt;
use std::io::Read;

/// Maximum number of bytes a `u32` occupies as a varint.
pub const MAX_VARINT32_LEN: usize = 5;

/// Maps a signed value onto an unsigned one so that values of small magnitude stay small:
/// `0 → 0`, `-1 → 1`, `1 → 2`, `-2 → 3`, …
#[inline]
#[must_use]
pub fn zigzag(n: i32) -> u32 {
	((n << 1) ^ (n >> 31)) as u32
}

/// Inverse of [`zigzag`].
#[inline]
#[must_use]
pub fn unzigzag(u: u32) -> i32 {
	((u >> 1) as i32) ^ -((u & 1) as i32)
}

/// Number of bytes [`encode`] writes for `value`: one per started group of 7 bits, at least one.
#[inline]
#[must_use]
pub fn encoded_size(value: u32) -> usize {
	let bits = 32 - value.leading_zeros() as usize;
	bits.div_ceil(7).max(1)
}

/// Writes `value` as a varint into the start of `out`, low-order group first, and returns the
/// number of bytes written.
///
/// # Panics
///
/// Panics if `out` is shorter than [`encoded_size`]`(value)`.
#[inline]
pub fn encode(mut value: u32, out: &mut [u8]) -> usize {
	let mut index = 0;
	while value >= 0x80 {
		out[index] = ((value & 0x7F) as u8) | 0x80;
		value >>= 7;
		index += 1;
	}
	out[index] = value as u8;
	index + 1
}

/// Reads one varint from `reader`, consuming exactly the bytes that belong to it.
///
/// # Errors
///
/// Fails if the input ends in the middle of a varint, or if the varint does not fit into 32 bits.
pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<u32> {
	let mut value: u32 = 0;
	for index in 0..MAX_VARINT32_LEN {
		let byte = reader
			.read_u8()
			.context("Unexpected end of data while reading varint")?;
		let group = u32::from(byte & 0x7F);
		ensure!(
			index < MAX_VARINT32_LEN - 1 || group <= 0x0F,
			"Varint exceeds 32 bits"
		);
		value |= group << (7 * index);
		if byte & 0x80 == 0 {
			return Ok(value);
		}
	}
	bail!("Varint too long")
}

/// Reads one varint from the start of `bytes` and returns the value with the number of bytes consumed.
///
/// # Errors
///
/// Fails like [`read`].
pub fn decode(bytes: &[u8]) -> Result<(u32, usize)> {
	let mut rest = bytes;
	let value = read(&mut rest)?;
	Ok((value, bytes.len() - rest.len()))
}
