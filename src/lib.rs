//! # nek-reader
//!
//! A reader for nek5000 binary field files (`.f%05d`-style dumps).
//! Handles both byte orders and both real widths (f32 and f64), resolving
//! each automatically from the file itself.
//!
//! **Note:** The symmetric write path is planned but not yet implemented.
pub mod nek;

// Re-export the main types for convenience
pub use nek::{
    read, read_from,
    models::{Bounds, Elem, Endianness, FieldFile, Header, Limits},
    NekError, Result,
};
