//! BitReader: reads a packed bitstream one bit at a time.
//!
//! The Huffman decoder drives this bit-by-bit as it walks the code tree, so
//! unlike the writer there is no multi-bit convenience path.

/// Reads bits from a byte slice, most significant bit first.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return the next bit as Some(1) or Some(0), or None if there is no
    /// more data to read.
    pub fn bit(&mut self) -> Option<u8> {
        if self.cursor == self.data.len() {
            return None;
        }
        let bit = (self.data[self.cursor] >> (7 - self.bit_index)) & 1;
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit)
    }
}
