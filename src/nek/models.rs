//! Data structures representing nek5000 field-file components

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use ndarray::Array4;

/// Number of field categories:
/// geometry, velocity, pressure, temperature, scalar.
pub const CATEGORY_COUNT: usize = 5;

/// Byte order of a field file, as detected by the endian probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    pub fn read_f32(self, src: &[u8]) -> f32 {
        match self {
            Endianness::Little => LittleEndian::read_f32(src),
            Endianness::Big => BigEndian::read_f32(src),
        }
    }

    pub fn read_i32_into(self, src: &[u8], dst: &mut [i32]) {
        match self {
            Endianness::Little => LittleEndian::read_i32_into(src, dst),
            Endianness::Big => BigEndian::read_i32_into(src, dst),
        }
    }

    pub fn read_f32_into(self, src: &[u8], dst: &mut [f32]) {
        match self {
            Endianness::Little => LittleEndian::read_f32_into(src, dst),
            Endianness::Big => BigEndian::read_f32_into(src, dst),
        }
    }

    pub fn read_f64_into(self, src: &[u8], dst: &mut [f64]) {
        match self {
            Endianness::Little => LittleEndian::read_f64_into(src, dst),
            Endianness::Big => BigEndian::read_f64_into(src, dst),
        }
    }
}

/// Parsed field-file header.
///
/// All counts and the grid resolution come from the fixed-position ASCII
/// tokens in the first 132 bytes of the file.
#[derive(Debug, Clone)]
pub struct Header {
    /// Width of one real value in bytes (4 or 8).
    pub wdsz: usize,
    /// Grid resolution per element, `[nx, ny, nz]`.
    pub lr1: [usize; 3],
    /// Spatial dimensionality: 2 unless `nz > 1`, then 3. Always derived.
    pub ndim: usize,
    /// Total number of elements in the simulation.
    pub nel: usize,
    /// Number of elements stored in this file.
    pub nelf: usize,
    /// Simulation time of this dump.
    pub time: f64,
    /// Timestep index of this dump.
    pub istep: i64,
    /// File id within a multi-file dump.
    pub fid: usize,
    /// Total number of files in the dump.
    pub nf: usize,
    /// Active-component count per category
    /// {geometry, velocity, pressure, temperature, scalar}.
    /// Geometry and velocity carry `ndim` components when active, the
    /// scalar-valued categories carry 1. Zero means the category is absent.
    pub var: [usize; CATEGORY_COUNT],
}

impl Header {
    /// Number of grid points per element, `nx * ny * nz`.
    pub fn points_per_element(&self) -> usize {
        self.lr1[0] * self.lr1[1] * self.lr1[2]
    }

    /// Total scalar-field count per element (sum of the active-field vector).
    pub fn field_count(&self) -> usize {
        self.var.iter().sum()
    }
}

/// Running per-component `(min, max)` bounds for one field category.
///
/// Initialized to `(+inf, -inf)`, so a category that never receives a block
/// keeps its vacuous bounds.
#[derive(Debug, Clone)]
pub struct Bounds {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl Bounds {
    fn new(ncomp: usize) -> Self {
        Self {
            min: vec![f64::INFINITY; ncomp],
            max: vec![f64::NEG_INFINITY; ncomp],
        }
    }

    /// Fold one block of values into the bounds for component `comp`.
    pub(crate) fn fold(&mut self, comp: usize, values: &[f64]) {
        for &v in values {
            self.min[comp] = self.min[comp].min(v);
            self.max[comp] = self.max[comp].max(v);
        }
    }
}

/// Bounds for every field category of a file.
#[derive(Debug, Clone)]
pub struct Limits {
    pub pos: Bounds,
    pub vel: Bounds,
    pub pres: Bounds,
    pub temp: Bounds,
    pub scal: Bounds,
}

impl Limits {
    /// Bounds of the category at the given active-field vector index.
    pub(crate) fn category_mut(&mut self, category: usize) -> &mut Bounds {
        match category {
            0 => &mut self.pos,
            1 => &mut self.vel,
            2 => &mut self.pres,
            3 => &mut self.temp,
            _ => &mut self.scal,
        }
    }
}

/// Field data for a single spectral element.
///
/// Each category holds an array shaped `(components, nz, ny, nx)`; an
/// inactive category has zero components and an empty array.
#[derive(Debug, Clone)]
pub struct Elem {
    pub pos: Array4<f64>,
    pub vel: Array4<f64>,
    pub pres: Array4<f64>,
    pub temp: Array4<f64>,
    pub scal: Array4<f64>,
}

impl Elem {
    fn new(var: &[usize; CATEGORY_COUNT], lr1: [usize; 3]) -> Self {
        let [nx, ny, nz] = lr1;
        let shape = |ncomp: usize| (ncomp, nz, ny, nx);
        Self {
            pos: Array4::zeros(shape(var[0])),
            vel: Array4::zeros(shape(var[1])),
            pres: Array4::zeros(shape(var[2])),
            temp: Array4::zeros(shape(var[3])),
            scal: Array4::zeros(shape(var[4])),
        }
    }

    /// Field array of the category at the given active-field vector index.
    pub(crate) fn category_mut(&mut self, category: usize) -> &mut Array4<f64> {
        match category {
            0 => &mut self.pos,
            1 => &mut self.vel,
            2 => &mut self.pres,
            3 => &mut self.temp,
            _ => &mut self.scal,
        }
    }
}

/// A fully decoded field file.
///
/// Holds one `Elem` slot per simulation element, indexed by zero-based
/// logical element number, plus per-category bounds and the dump metadata.
#[derive(Debug, Clone)]
pub struct FieldFile {
    pub ndim: usize,
    pub nel: usize,
    pub lr1: [usize; 3],
    pub var: [usize; CATEGORY_COUNT],
    pub time: f64,
    pub istep: i64,
    pub wdsz: usize,
    pub endian: Endianness,
    pub elem: Vec<Elem>,
    pub lims: Limits,
}

impl FieldFile {
    /// Allocate an empty structure sized for the file described by `header`.
    pub fn new(header: &Header, endian: Endianness) -> Self {
        let elem = (0..header.nel)
            .map(|_| Elem::new(&header.var, header.lr1))
            .collect();
        // Bounds are sized by each category's full component capacity so
        // that an inactive category still reports its vacuous state.
        let lims = Limits {
            pos: Bounds::new(header.ndim),
            vel: Bounds::new(header.ndim),
            pres: Bounds::new(1),
            temp: Bounds::new(1),
            scal: Bounds::new(1),
        };
        Self {
            ndim: header.ndim,
            nel: header.nel,
            lr1: header.lr1,
            var: header.var,
            time: header.time,
            istep: header.istep,
            wdsz: header.wdsz,
            endian,
            elem,
            lims,
        }
    }
}
