use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::huffman_coding::huffman;
use crate::lzw;

/// Decompress a container back into the original bytes.
///
/// The Huffman stage always decodes first; the leading mode flag decides
/// whether its output is the LZW artifact (which is then expanded) or the
/// original data itself. An entirely empty container decompresses to empty,
/// mirroring a compressed empty file.
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    let (flag, huffman_section) = match container.split_first() {
        Some(parts) => parts,
        None => return Ok(Vec::new()),
    };
    info!(
        "Mode detected: {}",
        if *flag == 1 { "LZW+Huffman" } else { "Huffman only" }
    );

    let decoded = huffman::decode_stream(huffman_section)?;
    if *flag == 1 {
        lzw::decode::decode(&decoded)
    } else {
        Ok(decoded)
    }
}

/// Decompress the container file at `input` and write the original bytes
/// to `output`.
pub fn decompress_file(input: &Path, output: &Path) -> Result<()> {
    let container = fs::read(input)?;
    let data = decompress(&container)?;
    fs::write(output, &data)?;
    info!(
        "Restored {} bytes from {} compressed bytes.",
        data.len(),
        container.len()
    );
    Ok(())
}
