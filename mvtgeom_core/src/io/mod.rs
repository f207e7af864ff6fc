//! Cursor-based readers for varint-encoded data.
//!
//! # Overview
//!
//! [`ValueReader`] provides the read operations shared by every source: unsigned
//! varints and zigzag-encoded signed varints. [`ValueReaderSlice`] implements it on top of a
//! borrowed byte slice, which is all the geometry stream decoder needs.

mod value_reader;
mod value_reader_slice;

pub use value_reader::*;
pub use value_reader_slice::*;
