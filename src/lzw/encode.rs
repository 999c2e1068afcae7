use log::debug;
use rustc_hash::FxHashMap;

use super::{DICT_SIZE, FIRST_CODE};

/// LZW-encode `data` into a sequence of 16-bit little-endian codes.
///
/// The dictionary starts empty (literals 0-255 are implicit) and registers
/// each (prefix, byte) pair the first time it is seen, until the 4096-code
/// ceiling. Past the ceiling the table is frozen: the encoder keeps
/// grouping runs through lookups of already-known pairs but registers
/// nothing new. The table is rebuilt from scratch on every call.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut bytes = data.iter().copied();

    let mut prefix = match bytes.next() {
        Some(byte) => byte as u16,
        None => return out,
    };

    let mut dictionary: FxHashMap<(u16, u8), u16> = FxHashMap::default();
    let mut next_code = FIRST_CODE;

    for byte in bytes {
        match dictionary.get(&(prefix, byte)) {
            Some(&code) => prefix = code,
            None => {
                out.extend_from_slice(&prefix.to_le_bytes());
                if next_code < DICT_SIZE {
                    dictionary.insert((prefix, byte), next_code);
                    next_code += 1;
                }
                prefix = byte as u16;
            }
        }
    }
    // The pending prefix always holds at least one byte here.
    out.extend_from_slice(&prefix.to_le_bytes());

    debug!(
        "LZW: {} bytes in, {} codes out, {} entries registered",
        data.len(),
        out.len() / 2,
        next_code - FIRST_CODE
    );
    out
}
