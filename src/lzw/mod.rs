//! The lzw module implements the dictionary-substitution stage of the
//! pipeline.
//!
//! The encoder grows a table mapping (prefix code, next byte) pairs to new
//! codes; the decoder grows the inverse table. Codes 0-255 always stand for
//! literal byte values, new codes are assigned upward from 256, and the
//! table freezes at 4096 entries (a 12-bit code space). Both sides apply
//! the same growth rule, so the two tables stay in lock-step for identical
//! input without the table ever being transmitted.
//!
//! Codes leave this stage as fixed-width 16-bit little-endian values. That
//! deliberately wastes bits: the Huffman stage downstream is responsible
//! for the final entropy packing.
//!
pub mod decode;
pub mod encode;

/// Ceiling of the code space. Neither side registers entries past this.
pub const DICT_SIZE: u16 = 4096;

/// First code available for registered pairs; 0-255 are literals.
pub const FIRST_CODE: u16 = 256;
