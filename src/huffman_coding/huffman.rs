use log::{debug, trace};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Error, Result};
use crate::huffman_coding::min_heap::MinHeap;
use crate::tools::freq_count::freqs;

/// Fixed portion of the stream header: u64 symbol count plus u8 unique count.
const HEADER_FIXED_LEN: usize = 9;
/// Each frequency table entry is a symbol byte plus an i32 count.
const HEADER_ENTRY_LEN: usize = 5;

/// One node of the prefix-code tree. The tree is rebuilt from the frequency
/// table on both the encode and decode side, so the two sides agree on every
/// code without the codes themselves ever being persisted. Node frequencies
/// are u64: a header can carry up to 256 entries of u32::MAX, and merged
/// subtree totals must not wrap.
#[derive(Debug)]
pub enum HuffNode {
    Leaf {
        symbol: u8,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn freq(&self) -> u64 {
        match self {
            HuffNode::Leaf { freq, .. } => *freq,
            HuffNode::Internal { freq, .. } => *freq,
        }
    }
}

impl PartialEq for HuffNode {
    fn eq(&self, other: &Self) -> bool {
        self.freq() == other.freq()
    }
}

impl PartialOrd for HuffNode {
    /// Order nodes by frequency alone. Ties are left to the heap's
    /// operation order, which is deterministic for a given seed sequence.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.freq().partial_cmp(&other.freq())
    }
}

/// The persisted frequency table: total count of symbols in the stream and
/// one (symbol, frequency) pair per distinct byte value, in ascending byte
/// order. Fully determines tree reconstruction for decoding.
#[derive(Debug, PartialEq)]
pub struct StreamHeader {
    pub total: u64,
    pub symbols: Vec<(u8, u32)>,
}

impl StreamHeader {
    /// Scan the input once and collect the nonzero frequencies.
    pub fn from_data(data: &[u8]) -> Self {
        let counts = freqs(data);
        let symbols = counts
            .iter()
            .enumerate()
            .filter(|(_, &f)| f > 0)
            .map(|(sym, &f)| (sym as u8, f))
            .collect();
        Self {
            total: data.len() as u64,
            symbols,
        }
    }

    /// Append the wire form of the header: u64 LE total, u8 unique count,
    /// then (u8 symbol, i32 LE frequency) pairs in seed order.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.total.to_le_bytes());
        // 256 distinct symbols wraps the u8 count to zero; the reader
        // disambiguates via total > 0.
        out.push(self.symbols.len() as u8);
        for &(symbol, freq) in &self.symbols {
            out.push(symbol);
            out.extend_from_slice(&(freq as i32).to_le_bytes());
        }
    }

    /// Parse a header from the front of `data`. Returns the header and the
    /// number of bytes it occupied.
    pub fn read(data: &[u8]) -> Result<(Self, usize)> {
        if data.len() < HEADER_FIXED_LEN {
            return Err(Error::IncompleteHeader {
                needed: HEADER_FIXED_LEN - data.len(),
            });
        }
        let total = u64::from_le_bytes(data[0..8].try_into().unwrap());
        let mut unique = data[8] as usize;
        if unique == 0 && total > 0 {
            unique = 256;
        }
        let header_len = HEADER_FIXED_LEN + unique * HEADER_ENTRY_LEN;
        if data.len() < header_len {
            return Err(Error::IncompleteHeader {
                needed: header_len - data.len(),
            });
        }
        let mut symbols = Vec::with_capacity(unique);
        for i in 0..unique {
            let at = HEADER_FIXED_LEN + i * HEADER_ENTRY_LEN;
            let symbol = data[at];
            let freq = i32::from_le_bytes(data[at + 1..at + 5].try_into().unwrap()) as u32;
            symbols.push((symbol, freq));
        }
        Ok((Self { total, symbols }, header_len))
    }

    /// Build the prefix-code tree: seed one leaf per distinct symbol into a
    /// min-heap, then repeatedly merge the two lowest-frequency nodes until
    /// a single root remains. Returns None for an empty symbol table.
    pub fn build_tree(&self) -> Option<HuffNode> {
        let mut heap = MinHeap::with_capacity(self.symbols.len());
        for &(symbol, freq) in &self.symbols {
            heap.insert(HuffNode::Leaf {
                symbol,
                freq: u64::from(freq),
            });
        }
        while heap.len() > 1 {
            let left = heap.extract_min()?;
            let right = heap.extract_min()?;
            heap.insert(HuffNode::Internal {
                freq: left.freq() + right.freq(),
                left: Box::new(left),
                right: Box::new(right),
            });
        }
        heap.extract_min()
    }
}

/// Derive the code table from one traversal of the tree: 0 on a left
/// descent, 1 on a right descent, the accumulated path at each leaf is that
/// symbol's code. A lone-leaf tree gets the one-bit code 0 rather than an
/// empty code, so single-symbol streams stay decodable.
fn derive_codes(root: &HuffNode) -> Vec<Vec<u8>> {
    let mut codes = vec![Vec::new(); 256];
    let mut stack = vec![(root, Vec::new())];
    while let Some((node, path)) = stack.pop() {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                codes[*symbol as usize] = if path.is_empty() { vec![0] } else { path };
            }
            HuffNode::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push(0);
                let mut right_path = path;
                right_path.push(1);
                stack.push((right.as_ref(), right_path));
                stack.push((left.as_ref(), left_path));
            }
        }
    }
    codes
}

/// Huffman-encode `data`, appending the stream header and the bit-packed
/// payload to `out`. An empty input produces a bare (0, 0) header.
pub fn encode_stream(data: &[u8], out: &mut Vec<u8>) {
    let header = StreamHeader::from_data(data);
    header.write(out);

    let root = match header.build_tree() {
        Some(root) => root,
        None => return,
    };
    let codes = derive_codes(&root);
    debug!(
        "Huffman: {} symbols, {} distinct",
        header.total,
        header.symbols.len()
    );

    let mut bw = BitWriter::new(data.len() / 2 + 1);
    for &byte in data {
        for &bit in &codes[byte as usize] {
            bw.push_bit(bit);
        }
    }
    bw.flush();
    out.extend_from_slice(&bw.output);
}

/// Decode one Huffman section. Reads the header, rebuilds the tree via the
/// same construction the encoder used, then walks the tree bit by bit,
/// emitting a symbol and resetting to the root at each leaf. Stops exactly
/// at the header-declared symbol count; trailing padding bits are ignored.
pub fn decode_stream(data: &[u8]) -> Result<Vec<u8>> {
    let (header, header_len) = StreamHeader::read(data)?;
    if header.total == 0 {
        return Ok(Vec::new());
    }
    trace!(
        "Huffman header: {} symbols, {} distinct, {} header bytes",
        header.total,
        header.symbols.len(),
        header_len
    );

    let root = match header.build_tree() {
        Some(root) => root,
        None => {
            // Nonzero total with an empty symbol table cannot decode.
            return Err(Error::TruncatedStream {
                decoded: 0,
                expected: header.total,
            });
        }
    };

    // The header's total is untrusted; each symbol costs at least one bit,
    // so the payload bounds how much can ever be allocated.
    let payload = &data[header_len..];
    let mut out = Vec::with_capacity(header.total.min(payload.len() as u64 * 8) as usize);
    let mut br = BitReader::new(payload);

    // Degenerate single-symbol tree: the encoder wrote one bit per symbol.
    if let HuffNode::Leaf { symbol, .. } = root {
        while (out.len() as u64) < header.total {
            br.bit().ok_or(Error::TruncatedStream {
                decoded: out.len() as u64,
                expected: header.total,
            })?;
            out.push(symbol);
        }
        return Ok(out);
    }

    let mut node = &root;
    while (out.len() as u64) < header.total {
        let bit = br.bit().ok_or(Error::TruncatedStream {
            decoded: out.len() as u64,
            expected: header.total,
        })?;
        node = match node {
            HuffNode::Internal { left, right, .. } => {
                if bit == 0 {
                    left.as_ref()
                } else {
                    right.as_ref()
                }
            }
            HuffNode::Leaf { .. } => unreachable!("walk always restarts from the root"),
        };
        if let HuffNode::Leaf { symbol, .. } = node {
            out.push(*symbol);
            node = &root;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    fn roundtrip(data: &[u8]) -> Vec<u8> {
        let mut encoded = Vec::new();
        encode_stream(data, &mut encoded);
        decode_stream(&encoded).unwrap()
    }

    #[test]
    fn empty_stream_is_a_bare_header() {
        let mut encoded = Vec::new();
        encode_stream(&[], &mut encoded);
        assert_eq!(encoded, vec![0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(decode_stream(&encoded).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn single_symbol_gets_a_nonempty_code() {
        let data = vec![0x41; 1000];
        let header = StreamHeader::from_data(&data);
        let root = header.build_tree().unwrap();
        let codes = derive_codes(&root);
        assert_eq!(codes[0x41], vec![0]);
        assert_eq!(roundtrip(&data), data);
    }

    #[test]
    fn text_roundtrip() {
        let data = b"Peter Piper picked a peck of pickled peppers".to_vec();
        assert_eq!(roundtrip(&data), data);
    }

    #[test]
    fn all_256_values_roundtrip() {
        // 256 distinct symbols wraps the unique count field to zero.
        let data: Vec<u8> = (0..=255).collect();
        let mut encoded = Vec::new();
        encode_stream(&data, &mut encoded);
        assert_eq!(encoded[8], 0);
        assert_eq!(decode_stream(&encoded).unwrap(), data);
    }

    #[test]
    fn encoding_is_deterministic() {
        let data = b"abracadabra abracadabra".to_vec();
        let mut first = Vec::new();
        encode_stream(&data, &mut first);
        let mut second = Vec::new();
        encode_stream(&data, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn codes_are_prefix_free() {
        let data = b"the quick brown fox jumps over the lazy dog".to_vec();
        let header = StreamHeader::from_data(&data);
        let codes = derive_codes(&header.build_tree().unwrap());
        let used: Vec<&Vec<u8>> = codes.iter().filter(|c| !c.is_empty()).collect();
        for (i, a) in used.iter().enumerate() {
            for (j, b) in used.iter().enumerate() {
                if i != j && b.len() >= a.len() {
                    assert_ne!(&b[..a.len()], &a[..], "code {:?} prefixes {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn truncated_header_is_reported() {
        let mut encoded = Vec::new();
        encode_stream(b"hello", &mut encoded);
        match decode_stream(&encoded[..4]) {
            Err(Error::IncompleteHeader { .. }) => {}
            other => panic!("expected IncompleteHeader, got {:?}", other),
        }
        // Cut inside the frequency table.
        match decode_stream(&encoded[..10]) {
            Err(Error::IncompleteHeader { .. }) => {}
            other => panic!("expected IncompleteHeader, got {:?}", other),
        }
    }

    #[test]
    fn truncated_payload_is_reported() {
        let mut encoded = Vec::new();
        encode_stream(b"mississippi river runs deep", &mut encoded);
        match decode_stream(&encoded[..encoded.len() - 2]) {
            Err(Error::TruncatedStream { expected: 27, .. }) => {}
            other => panic!("expected TruncatedStream, got {:?}", other),
        }
    }

    #[test]
    fn lying_total_does_not_overallocate() {
        // A header claiming u64::MAX symbols over a one-entry table with no
        // payload must fail cleanly, not reserve by the claimed count.
        let mut wire = vec![0xff; 8];
        wire.push(1);
        wire.push(b'a');
        wire.extend_from_slice(&1_i32.to_le_bytes());
        match decode_stream(&wire) {
            Err(Error::TruncatedStream { decoded: 0, .. }) => {}
            other => panic!("expected TruncatedStream, got {:?}", other),
        }
    }

    #[test]
    fn hostile_frequencies_do_not_overflow() {
        // Two entries carrying -1 on the wire read back as u32::MAX each;
        // merging them must not wrap the parent frequency.
        let mut wire = 2_u64.to_le_bytes().to_vec();
        wire.push(2);
        wire.push(b'a');
        wire.extend_from_slice(&(-1_i32).to_le_bytes());
        wire.push(b'b');
        wire.extend_from_slice(&(-1_i32).to_le_bytes());
        wire.push(0b0100_0000);
        assert_eq!(decode_stream(&wire).unwrap(), b"ab");
    }

    #[test]
    fn header_wire_format_roundtrip() {
        let header = StreamHeader {
            total: 7,
            symbols: vec![(b'a', 3), (b'b', 4)],
        };
        let mut wire = Vec::new();
        header.write(&mut wire);
        assert_eq!(wire.len(), 9 + 2 * 5);
        assert_eq!(wire[8], 2);
        let (parsed, used) = StreamHeader::read(&wire).unwrap();
        assert_eq!(used, wire.len());
        assert_eq!(parsed, header);
    }
}
