//! Byte-level building blocks for vector tile geometry: an owned byte buffer, the
//! base-128 varint and zigzag codec, and cursor-based readers.

pub mod io;

pub mod types;

pub mod varint;

pub use types::Blob;
