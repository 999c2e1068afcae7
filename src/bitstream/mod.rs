//! The bitstream module forms the bit-level I/O subsystem for the compressor.
//!
//! Huffman codes are variable length bit sequences, so the final encoding
//! stage needs to pack individual bits into bytes and the decoder needs to
//! pull them back out one at a time, most significant bit first.
//!
//! This subsystem is designed to interface with the other modules within the
//! crate. It has not been generalized for wider use.
//!
pub mod bitreader;
pub mod bitwriter;
