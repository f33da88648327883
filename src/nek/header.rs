//! Field-file header parsing and endianness detection
//!
//! Header structure:
//! - 132 bytes: whitespace-separated ASCII tokens
//!   `[tag, wdsz, nx, ny, nz, nel, nelf, time, istep, fid, nf, ..., fields]`
//! - 4 bytes: endian sentinel (the f32 value 6.54321 in the file's byte order)

use std::io::Read;
use std::str::FromStr;

use super::error::{NekError, Result};
use super::models::{Endianness, Header, CATEGORY_COUNT};
use super::utils;

/// Fixed byte length of the ASCII header.
const HEADER_LEN: usize = 132;

/// Magic constant written after the header to reveal the byte order.
const ENDIAN_SENTINEL: f64 = 6.54321;

/// Parse the 132-byte ASCII header.
///
/// The word size is validated before anything else is interpreted, since it
/// determines the size of every later read.
pub fn parse(reader: &mut impl Read) -> Result<Header> {
    let raw = utils::read_exact_block(reader, HEADER_LEN, "header")?;
    let text = String::from_utf8_lossy(&raw);
    let tokens: Vec<&str> = text.split_whitespace().collect();

    // tag through nf, plus the trailing field-code string
    if tokens.len() < 12 {
        return Err(NekError::InvalidHeader(format!(
            "expected at least 12 tokens, found {}",
            tokens.len()
        )));
    }

    let wdsz: usize = token(&tokens, 1, "wdsz")?;
    if wdsz != 4 && wdsz != 8 {
        return Err(NekError::UnsupportedWordSize(wdsz));
    }

    let lr1 = [
        token(&tokens, 2, "nx")?,
        token(&tokens, 3, "ny")?,
        token(&tokens, 4, "nz")?,
    ];
    let ndim = if lr1[2] > 1 { 3 } else { 2 };

    let nel: usize = token(&tokens, 5, "nel")?;
    let nelf: usize = token(&tokens, 6, "nelf")?;
    let time: f64 = token(&tokens, 7, "time")?;
    let istep: i64 = token(&tokens, 8, "istep")?;
    let fid: usize = token(&tokens, 9, "fid")?;
    let nf: usize = token(&tokens, 10, "nf")?;

    // Field codes are always the last token; anything between nf and the
    // codes is not consumed by decoding.
    let fields = tokens[tokens.len() - 1];
    let mut var = [0usize; CATEGORY_COUNT];
    for code in fields.chars() {
        match code {
            'X' => var[0] = ndim,
            'U' => var[1] = ndim,
            'P' => var[2] = 1,
            'T' => var[3] = 1,
            // The scalar category's true component count is not documented;
            // a placeholder width of 1 matches the known producer.
            'S' => var[4] = 1,
            _ => {}
        }
    }

    Ok(Header {
        wdsz,
        lr1,
        ndim,
        nel,
        nelf,
        time,
        istep,
        fid,
        nf,
        var,
    })
}

/// Detect the file's byte order from the 4-byte sentinel after the header.
///
/// The format carries no explicit endianness field; both interpretations of
/// the sentinel are compared against 6.54321 after truncation to 5 decimal
/// digits. This two-sided probe is a format contract and must match files
/// already in the wild.
pub fn probe_endianness(reader: &mut impl Read) -> Result<Endianness> {
    let raw = utils::read_exact_block(reader, 4, "endian sentinel")?;
    let tag = [raw[0], raw[1], raw[2], raw[3]];

    if truncate5(Endianness::Little.read_f32(&tag)) == ENDIAN_SENTINEL {
        Ok(Endianness::Little)
    } else if truncate5(Endianness::Big.read_f32(&tag)) == ENDIAN_SENTINEL {
        Ok(Endianness::Big)
    } else {
        Err(NekError::UnknownEndianness(tag))
    }
}

fn truncate5(value: f32) -> f64 {
    (f64::from(value) * 1e5).trunc() / 1e5
}

fn token<T: FromStr>(tokens: &[&str], index: usize, name: &'static str) -> Result<T> {
    tokens
        .get(index)
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| NekError::InvalidHeader(format!("missing or invalid `{}` token", name)))
}
