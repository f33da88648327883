//! Custom error types for the nek-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum NekError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The header declares a real-number width other than 4 or 8 bytes.
    #[error("Unsupported word size: {0}. Only 4-byte and 8-byte reals are supported.")]
    UnsupportedWordSize(usize),

    /// The endian sentinel matches neither byte-order interpretation.
    #[error("Could not determine byte order: sentinel bytes {0:02x?} match neither reading of 6.54321")]
    UnknownEndianness([u8; 4]),

    /// The file ended before a complete section or field block could be read.
    #[error("Truncated file while reading {context}: expected {expected} more bytes")]
    TruncatedFile {
        context: &'static str,
        expected: u64,
    },

    /// An element map entry points outside the simulation's element range.
    #[error("Corrupt element map: entry {value} outside 1..={nel}")]
    CorruptElementMap { value: i32, nel: usize },

    /// The ASCII header is missing tokens or contains unparseable values.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

/// A convenience `Result` type alias using the crate's `NekError` type.
pub type Result<T> = std::result::Result<T, NekError>;
