//! Error kinds surfaced by the engine.
//!
//! Every fallible entry point in this crate returns `Result<_,Error>`.  There
//! are no retries and no partial results: a decode failure is reported as
//! soon as it is detected.

/// Engine errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Raised by the file-level `compress_file` wrapper when the input is empty.
    #[error("input is empty")]
    InputEmpty,
    /// Huffman header shorter than declared, or its frequency table was truncated.
    #[error("malformed huffman header")]
    MalformedHeader,
    /// LZW code out of range, or the self-reference case fired on an invalid code.
    #[error("malformed lzw stream")]
    MalformedLzw,
    /// Container flag byte was not one of 0x00, 0x01, 0x02.
    #[error("unknown container flag: {0:#04x}")]
    UnknownFlag(u8),
    /// Host I/O failure at a `compress_file`/`decompress_file` boundary.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
