use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Container errors
    #[error("Input of {len} bytes exceeds the supported maximum of {max}")]
    OversizedInput { len: u64, max: u64 },

    #[error("Stream ended inside the header: needed {needed} more byte(s)")]
    IncompleteHeader { needed: usize },

    #[error("Stream ended early: decoded {decoded} of {expected} symbols")]
    TruncatedStream { decoded: u64, expected: u64 },

    // LZW errors
    #[error("Corrupt LZW stream: code {code} with only {next_code} entries assigned")]
    LzwCorruption { code: u16, next_code: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
