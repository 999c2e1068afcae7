//! The compression module chains the two codec stages into the container
//! format.
//!
//! Compression happens in the following steps:
//! - LZW trial: encode the input into an in-memory artifact of 16-bit codes.
//! - Mode decision: keep the artifact only if it is strictly smaller than
//!   the input, and record the choice in a one byte flag.
//! - Huffman coding: entropy-pack whichever byte sequence won, behind a
//!   frequency-table header.
//!
//! Decompression follows the inverse: Huffman decode always runs first, and
//! the flag decides whether the result is fed through the LZW decoder or is
//! already the original data.
//!
//! Each call owns its dictionary and tree state outright; nothing is shared
//! between invocations and intermediates never touch the filesystem.
//!
pub mod compress;
pub mod decompress;
