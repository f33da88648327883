//! Low-level byte reading utilities

use std::io::{self, Read};

use super::error::{NekError, Result};
use super::models::Endianness;

/// Read exactly `len` bytes, mapping a short read to `TruncatedFile`.
///
/// Every section of the format has a byte length known in advance, so a
/// short read always means the file ends mid-section.
pub fn read_exact_block(
    reader: &mut impl Read,
    len: usize,
    context: &'static str,
) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => NekError::TruncatedFile {
            context,
            expected: len as u64,
        },
        _ => NekError::Io(e),
    })?;
    Ok(buf)
}

/// Read `count` reals of width `wdsz` in the given byte order, widened to f64.
///
/// Width depends on the file (wdsz 4 reads f32, wdsz 8 reads f64).
pub fn read_real_vec(
    reader: &mut impl Read,
    count: usize,
    wdsz: usize,
    endian: Endianness,
    context: &'static str,
) -> Result<Vec<f64>> {
    let raw = read_exact_block(reader, count * wdsz, context)?;
    let mut out = vec![0f64; count];
    match wdsz {
        4 => {
            let mut single = vec![0f32; count];
            endian.read_f32_into(&raw, &mut single);
            for (dst, src) in out.iter_mut().zip(&single) {
                *dst = f64::from(*src);
            }
        }
        8 => endian.read_f64_into(&raw, &mut out),
        _ => return Err(NekError::UnsupportedWordSize(wdsz)),
    }
    Ok(out)
}
