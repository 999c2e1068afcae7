/// Packs individual bits into bytes, most significant bit first, collecting
/// the packed bytes in an output buffer.
pub struct BitWriter {
    /// Output buffer holding the packed bytes.
    pub output: Vec<u8>,
    /// Private queue holding bits that have not yet filled a whole byte.
    queue: u8,
    /// Count of valid bits in the queue (0-7).
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter. The capacity hint sizes the output buffer.
    pub fn new(capacity: usize) -> Self {
        Self {
            output: Vec::with_capacity(capacity),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Push a single bit onto the stream. Any nonzero bit value is a 1.
    pub fn push_bit(&mut self, bit: u8) {
        self.queue <<= 1;
        if bit != 0 {
            self.queue |= 1;
        }
        self.q_bits += 1;
        if self.q_bits == 8 {
            self.output.push(self.queue);
            self.queue = 0;
            self.q_bits = 0;
        }
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in
    /// the least significant bits. Flush MUST be called before reading the
    /// output or bits may be left in the internal queue.
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.output.push(self.queue << (8 - self.q_bits));
            self.queue = 0;
            self.q_bits = 0;
        }
    }
}

#[cfg(test)]
mod test {
    use super::BitWriter;

    #[test]
    fn eight_bits_make_a_byte() {
        let mut bw = BitWriter::new(1);
        for bit in [0, 1, 1, 1, 1, 0, 0, 0] {
            bw.push_bit(bit);
        }
        assert_eq!(bw.output, "x".as_bytes());
    }

    #[test]
    fn partial_byte_pads_low_bits() {
        let mut bw = BitWriter::new(1);
        bw.push_bit(1);
        bw.push_bit(1);
        bw.push_bit(1);
        bw.flush();
        assert_eq!(bw.output, vec![0b1110_0000]);
    }

    #[test]
    fn flush_on_byte_boundary_adds_nothing() {
        let mut bw = BitWriter::new(1);
        for _ in 0..8 {
            bw.push_bit(1);
        }
        bw.flush();
        assert_eq!(bw.output, vec![255]);
    }

    #[test]
    fn bits_span_bytes() {
        let mut bw = BitWriter::new(2);
        for bit in [1, 0, 0, 0, 0, 0, 0, 1, 1, 1] {
            bw.push_bit(bit);
        }
        bw.flush();
        assert_eq!(bw.output, vec![0b1000_0001, 0b1100_0000]);
    }
}
