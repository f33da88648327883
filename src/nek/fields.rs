//! Field block decoding
//!
//! Data blocks follow the element map, category-major in the fixed order
//! geometry, velocity, pressure, temperature, scalar. Within a category the
//! blocks run element-by-element in map order, then component-by-component.
//! The format has no index structure, so reads follow the file layout
//! exactly.

use std::io::Read;

use ndarray::Axis;

use super::error::Result;
use super::models::{Endianness, FieldFile, Header, CATEGORY_COUNT};
use super::utils;

const BLOCK_CONTEXT: [&str; CATEGORY_COUNT] = [
    "geometry block",
    "velocity block",
    "pressure block",
    "temperature block",
    "scalar block",
];

/// Decode every active field category into `data`, in format order.
pub fn decode(
    reader: &mut impl Read,
    header: &Header,
    endian: Endianness,
    elmap: &[i32],
    data: &mut FieldFile,
) -> Result<()> {
    for category in 0..CATEGORY_COUNT {
        decode_category(reader, header, endian, elmap, category, data)?;
    }
    Ok(())
}

/// Decode one category: per element in map order, per component, one block
/// of `nx*ny*nz` reals reshaped `(nz, ny, nx)`-major into the destination
/// slot, folding every value into the category bounds.
fn decode_category(
    reader: &mut impl Read,
    header: &Header,
    endian: Endianness,
    elmap: &[i32],
    category: usize,
    data: &mut FieldFile,
) -> Result<()> {
    let ncomp = header.var[category];
    if ncomp == 0 {
        return Ok(());
    }

    let npel = header.points_per_element();
    let context = BLOCK_CONTEXT[category];
    let FieldFile { elem, lims, .. } = data;
    let bounds = lims.category_mut(category);

    for &id in elmap {
        // One-based map entry, validated by elmap::parse.
        let slot = (id - 1) as usize;
        for comp in 0..ncomp {
            let values = utils::read_real_vec(reader, npel, header.wdsz, endian, context)?;
            bounds.fold(comp, &values);

            // The destination view is (nz, ny, nx) row-major, so iteration
            // order matches the block's x-fastest layout.
            let array = elem[slot].category_mut(category);
            let mut dst = array.index_axis_mut(Axis(0), comp);
            for (point, value) in dst.iter_mut().zip(&values) {
                *point = *value;
            }
        }
    }

    Ok(())
}
