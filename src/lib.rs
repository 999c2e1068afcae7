//! A lossless file compressor built from two classical stages.
//!
//! Compression runs Lempel-Ziv-Welch dictionary substitution followed by a
//! static, frequency-table-driven Huffman coder. The LZW stage is optional:
//! the compressor trial-encodes the input and keeps the LZW artifact only
//! when it is strictly smaller than the original bytes. A one byte mode
//! flag at the front of the container records the decision so the
//! decompressor can invert the exact same pipeline.
//!
//! Basic usage to compress and restore a file:
//!
//! `$> lzwhuf compress test.txt test.lzh`
//!
//! `$> lzwhuf decompress test.lzh test.txt`
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod lzw;
pub mod tools;

pub use error::{Error, Result};
