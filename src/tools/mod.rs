//! The tools module provides helpers around the codec core.
//!
//! The tools are:
//! - cli: command line interface for the compressor.
//! - freq_count: byte frequency count feeding the Huffman stage.
//!
pub mod cli;
pub mod freq_count;
