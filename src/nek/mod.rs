//! Core nek5000 field-file reader module

pub mod error;
pub mod models;
mod elmap;
mod fields;
mod header;
mod utils;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

pub use error::{NekError, Result};
pub use models::{Bounds, Elem, Endianness, FieldFile, Header, Limits};

/// Read a nek5000 binary field file from the given path.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be opened
/// - The header declares an unsupported word size
/// - The endian sentinel matches neither byte order
/// - The element map references elements outside the simulation
/// - The file ends before every declared block is read
pub fn read(path: impl AsRef<Path>) -> Result<FieldFile> {
    let path = path.as_ref();
    info!("Opening nek5000 field file: {}", path.display());
    let mut file = File::open(path)?;
    read_from(&mut file)
}

/// Decode a field file from any byte source.
///
/// The format is a strict linear sequence with no index structure, so this
/// is a single pull over the reader: header, endian sentinel, element map,
/// then every field block in order. On any error the partially populated
/// structure is dropped, never returned.
pub fn read_from<R: Read>(reader: &mut R) -> Result<FieldFile> {
    let hdr = header::parse(reader)?;
    let endian = header::probe_endianness(reader)?;
    let elmap = elmap::parse(reader, &hdr, endian)?;

    let mut data = FieldFile::new(&hdr, endian);
    fields::decode(reader, &hdr, endian, &elmap, &mut data)?;

    info!(
        "Decoded {} of {} elements, {} fields, t = {}, step {}",
        hdr.nelf,
        hdr.nel,
        hdr.field_count(),
        hdr.time,
        hdr.istep
    );

    Ok(data)
}
