use log::debug;

use super::{DICT_SIZE, FIRST_CODE};
use crate::error::{Error, Result};

/// One slot of the decoder table: the code it chains back to and the byte
/// it appends. Literal slots (codes 0-255) have no prefix.
#[derive(Debug, Clone, Copy)]
struct TableEntry {
    prefix: Option<u16>,
    symbol: u8,
}

/// Decode a sequence of 16-bit little-endian LZW codes back into bytes.
///
/// The inverse table is rebuilt slot by slot as codes arrive, mirroring the
/// encoder's growth rule so the two tables stay in lock-step. The classic
/// not-yet-registered case (a code equal to the next assignable slot, from
/// the encoder reusing a pair within the step that created it) is resolved
/// from the previous code. Any other unknown code is corruption.
pub fn decode(artifact: &[u8]) -> Result<Vec<u8>> {
    let chunks = artifact.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        // A well-formed artifact is a whole number of codes.
        let whole = (artifact.len() / 2) as u64;
        return Err(Error::TruncatedStream {
            decoded: whole,
            expected: whole + 1,
        });
    }
    let mut codes = chunks.map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

    let mut table: Vec<TableEntry> = (0..FIRST_CODE)
        .map(|literal| TableEntry {
            prefix: None,
            symbol: literal as u8,
        })
        .collect();

    let mut out = Vec::with_capacity(artifact.len());
    let mut prev = match codes.next() {
        Some(code) => code,
        None => return Ok(out),
    };
    // Nothing is registered yet, so the first code can only be a literal.
    if prev >= FIRST_CODE {
        return Err(Error::LzwCorruption {
            code: prev,
            next_code: FIRST_CODE,
        });
    }
    expand(&table, prev, &mut out)?;

    for code in codes {
        let next_code = table.len() as u16;
        let start = out.len();
        if code == next_code && next_code < DICT_SIZE {
            // KwKwK: the entry is the previous expansion plus its own
            // first symbol. Cannot occur once the table is frozen, since
            // the encoder stops registering too.
            expand(&table, prev, &mut out)?;
            let first = out[start];
            out.push(first);
        } else if code < next_code {
            expand(&table, code, &mut out)?;
        } else {
            return Err(Error::LzwCorruption { code, next_code });
        }

        if next_code < DICT_SIZE {
            table.push(TableEntry {
                prefix: Some(prev),
                symbol: out[start],
            });
        }
        prev = code;
    }

    debug!(
        "LZW: {} codes in, {} bytes out, {} entries registered",
        artifact.len() / 2,
        out.len(),
        table.len() - FIRST_CODE as usize
    );
    Ok(out)
}

/// Append the expansion of `code` to `out`: follow the prefix chain down to
/// its literal, collecting symbols, then reverse them into stream order so
/// the innermost prefix lands first. The chain length is bounded by the
/// table size; anything longer means the table is corrupt.
fn expand(table: &[TableEntry], code: u16, out: &mut Vec<u8>) -> Result<()> {
    let start = out.len();
    let mut at = code;
    for _ in 0..DICT_SIZE {
        let entry = table[at as usize];
        out.push(entry.symbol);
        match entry.prefix {
            Some(prefix) => at = prefix,
            None => {
                out[start..].reverse();
                return Ok(());
            }
        }
    }
    out.truncate(start);
    Err(Error::LzwCorruption {
        code,
        next_code: table.len() as u16,
    })
}
