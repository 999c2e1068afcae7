//! The huffman module implements the entropy-coding stage of the pipeline.
//!
//! A static prefix-code tree is built once per stream from a byte frequency
//! table, bottom-up through a minimum heap. The frequency table travels in a
//! small header at the front of the encoded section, so the decoder rebuilds
//! the identical tree by running the identical construction. Tree shape for
//! equal frequencies falls out of the heap's insertion and extraction
//! discipline, which is deterministic given the seed order; two runs over
//! the same input therefore produce byte-identical output.
//!
pub mod huffman;
pub mod min_heap;
