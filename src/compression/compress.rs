use std::fs;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::huffman_coding::huffman;
use crate::lzw;

/// Largest supported input in bytes. Wire frequencies are i32, so any
/// symbol count past this wraps negative in the header.
pub const MAX_INPUT_LEN: u64 = i32::MAX as u64;

fn ensure_supported_len(len: u64) -> Result<()> {
    if len > MAX_INPUT_LEN {
        return Err(Error::OversizedInput {
            len,
            max: MAX_INPUT_LEN,
        });
    }
    Ok(())
}

/// Compress a buffer into the container format: a one byte mode flag, then
/// the Huffman section of either the LZW artifact or the raw input.
///
/// The LZW stage is kept only when its artifact is strictly smaller than
/// the input. Fixed-width 16-bit codes double the size of data LZW cannot
/// group, so incompressible input routinely falls back to Huffman alone.
///
/// Callers are expected to stay within [`MAX_INPUT_LEN`] bytes;
/// [`compress_file`] enforces it.
pub fn compress(data: &[u8]) -> Vec<u8> {
    let lzw_artifact = lzw::encode::encode(data);
    let use_lzw = lzw_artifact.len() < data.len();
    info!(
        "Original size: {}, LZW size: {}. Decision: {}",
        data.len(),
        lzw_artifact.len(),
        if use_lzw { "LZW+Huffman" } else { "Huffman only" }
    );

    let mut out = Vec::with_capacity(data.len() / 2 + 16);
    out.push(use_lzw as u8);
    let huffman_source: &[u8] = if use_lzw { &lzw_artifact } else { data };
    huffman::encode_stream(huffman_source, &mut out);
    out
}

/// Compress the file at `input` and write the container to `output`.
pub fn compress_file(input: &Path, output: &Path) -> Result<()> {
    let data = fs::read(input)?;
    ensure_supported_len(data.len() as u64)?;
    let container = compress(&data);
    fs::write(output, &container)?;
    info!(
        "Wrote {} compressed bytes for {} input bytes.",
        container.len(),
        data.len()
    );
    Ok(())
}
