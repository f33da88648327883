//! Element map reading
//!
//! The element map is an ordered sequence of one-based element identifiers,
//! one per element stored in the file. It defines both the order in which
//! data blocks appear and the logical slot each block populates.

use std::io::Read;

use super::error::{NekError, Result};
use super::models::{Endianness, Header};
use super::utils;

/// Read the element map: `nelf` signed 32-bit integers in file byte order.
///
/// Every entry is validated against the simulation's element range up front,
/// so block decoding can index destination slots without further checks.
pub fn parse(reader: &mut impl Read, header: &Header, endian: Endianness) -> Result<Vec<i32>> {
    let raw = utils::read_exact_block(reader, 4 * header.nelf, "element map")?;
    let mut map = vec![0i32; header.nelf];
    endian.read_i32_into(&raw, &mut map);

    for &value in &map {
        if value < 1 || value as usize > header.nel {
            return Err(NekError::CorruptElementMap {
                value,
                nel: header.nel,
            });
        }
    }

    Ok(map)
}
