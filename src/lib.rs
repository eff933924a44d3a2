//! # lzwhuff
//!
//! A hybrid LZW + Huffman lossless compressor, plus a `simulate` path that
//! reports per-strategy sizes and tree structure for pedagogical inspection.
//!
//! The container format picks among three representations (raw passthrough,
//! Huffman coding over the raw input, or Huffman coding over an LZW-encoded
//! intermediate) and prefixes the result with a single flag byte so
//! decompression never needs to guess which path was taken.
//!
//! ## Buffer example
//!
//! ```rust
//! use lzwhuff::container;
//! let compressed = container::compress(b"TOBEORNOTTOBEORTOBEORNOT");
//! let round_tripped = container::decompress(&compressed).expect("decode failed");
//! assert_eq!(round_tripped, b"TOBEORNOTTOBEORTOBEORNOT");
//! ```

pub mod bitio;
pub mod container;
pub mod error;
pub mod huffman;
pub mod lzw;
pub mod report;

pub use container::{compress, compress_file, decompress, decompress_file};
pub use error::{Error, Result};
pub use report::{simulate, Mode, Report, TreeNode};
