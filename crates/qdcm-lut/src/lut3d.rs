//! 3-dimensional lookup table.
//!
//! A 3D LUT maps RGB input to RGB output through a cube of color values.
//! Used here for display calibration cubes, which hardware consumes at a
//! fixed grid size after resampling.

use crate::{LutError, LutResult, Rgb};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A 3-dimensional lookup table.
///
/// Stores a `size`^3 grid of RGB values indexed by three integer
/// coordinates `(r, g, b)`, each in `[0, size)`.
///
/// # Structure
///
/// - Flat storage in blue-major order: offset `b * size^2 + g * size + r`
///   (red varies fastest). This matches the row order of CUBE files, so
///   the parser fills the grid without reordering.
/// - Trilinear interpolation for [`apply`](Lut3D::apply), tetrahedral for
///   [`resample`](Lut3D::resample).
///
/// Tables are immutable once built; resampling produces a new table.
///
/// # Example
///
/// ```rust
/// use qdcm_lut::{Lut3D, Rgb};
///
/// let lut = Lut3D::identity(17).unwrap();
/// let out = lut.apply(Rgb::new(0.5, 0.3, 0.2));
/// assert!((out.g - 0.3).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    data: Vec<Rgb>,
    size: usize,
}

impl Lut3D {
    /// Smallest supported edge size.
    pub const MIN_SIZE: usize = 2;
    /// Largest supported edge size.
    ///
    /// 257 covers resampled device grids; the CUBE file dialect itself
    /// stops at 256 (see [`cube`](crate::cube)).
    pub const MAX_SIZE: usize = 257;

    /// Creates a table from flat entries in blue-major order
    /// (`b * size^2 + g * size + r`, red fastest), exactly the row order
    /// of a CUBE file.
    pub fn from_entries(entries: Vec<Rgb>, size: usize) -> LutResult<Self> {
        if size < Self::MIN_SIZE || size > Self::MAX_SIZE {
            return Err(LutError::size_out_of_range(
                size,
                Self::MIN_SIZE,
                Self::MAX_SIZE,
            ));
        }
        let expected = size * size * size;
        if entries.len() != expected {
            return Err(LutError::EntryCountMismatch {
                expected,
                actual: entries.len(),
            });
        }
        Ok(Self {
            data: entries,
            size,
        })
    }

    /// Creates an identity (pass-through) cube: the entry at `(r, g, b)`
    /// is `(r, g, b) / (size - 1)`.
    pub fn identity(size: usize) -> LutResult<Self> {
        if size < Self::MIN_SIZE || size > Self::MAX_SIZE {
            return Err(LutError::size_out_of_range(
                size,
                Self::MIN_SIZE,
                Self::MAX_SIZE,
            ));
        }
        let scale = (size - 1) as f32;
        let mut data = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push(Rgb::new(
                        r as f32 / scale,
                        g as f32 / scale,
                        b as f32 / scale,
                    ));
                }
            }
        }
        Ok(Self { data, size })
    }

    /// Returns the edge size of the cube.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the raw entries in blue-major flat order (red fastest).
    #[inline]
    pub fn entries(&self) -> &[Rgb] {
        &self.data
    }

    /// Flat offset of grid position `(r, g, b)`.
    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        b * self.size * self.size + g * self.size + r
    }

    /// Exact grid lookup, no interpolation.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is `>= size`.
    #[inline]
    pub fn get_entry(&self, r: usize, g: usize, b: usize) -> Rgb {
        self.data[self.index(r, g, b)]
    }

    /// Bounding grid indices and fractional position for one axis.
    ///
    /// When `value` lands exactly on a grid point the unit interval
    /// degenerates; the interval is nudged downward at the top index and
    /// upward everywhere else so the division below never sees a zero
    /// denominator.
    fn bounds_and_delta(value: f32, steps: usize) -> (usize, usize, f32) {
        let scaled = value * (steps - 1) as f32;
        let mut lower = scaled.floor() as usize;
        let mut upper = scaled.ceil() as usize;
        if lower == upper {
            if upper == steps - 1 {
                lower = upper - 1;
            } else {
                upper = lower + 1;
            }
        }
        let delta = (scaled - lower as f32) / (upper - lower) as f32;
        debug_assert!(delta.is_finite(), "degenerate interpolation interval");
        (lower, upper, delta)
    }

    /// Applies the cube to a color using trilinear interpolation.
    ///
    /// Inputs are clamped to [0, 1]; the operation never fails. Exact at
    /// the domain extremes: `apply(0,0,0)` returns the first grid entry
    /// and `apply(1,1,1)` the last.
    pub fn apply(&self, rgb: Rgb) -> Rgb {
        let (r0, r1, dr) = Self::bounds_and_delta(rgb.r.clamp(0.0, 1.0), self.size);
        let (g0, g1, dg) = Self::bounds_and_delta(rgb.g.clamp(0.0, 1.0), self.size);
        let (b0, b1, db) = Self::bounds_and_delta(rgb.b.clamp(0.0, 1.0), self.size);

        let v000 = self.get_entry(r0, g0, b0);
        let v001 = self.get_entry(r0, g0, b1);
        let v010 = self.get_entry(r0, g1, b0);
        let v011 = self.get_entry(r0, g1, b1);
        let v100 = self.get_entry(r1, g0, b0);
        let v101 = self.get_entry(r1, g0, b1);
        let v110 = self.get_entry(r1, g1, b0);
        let v111 = self.get_entry(r1, g1, b1);

        // Trilinear in finite-difference form: one fetch per corner, the
        // eight blend terms shared across channels.
        let c0 = v000;
        let c1 = v001 - v000;
        let c2 = v100 - v000;
        let c3 = v010 - v000;
        let c4 = v101 - v100 - v001 + v000;
        let c5 = v110 - v010 - v100 + v000;
        let c6 = v011 - v010 - v001 + v000;
        let c7 = v111 - v110 - v011 - v101 + v001 + v010 + v100 - v000;

        c0 + c1 * db
            + c2 * dr
            + c3 * dg
            + c4 * (db * dr)
            + c5 * (dr * dg)
            + c6 * (dg * db)
            + c7 * (dr * dg * db)
    }

    /// Applies the cube using tetrahedral interpolation.
    ///
    /// The enclosing cell is split into six tetrahedra selected by the
    /// ordering of the fractional coordinates; only four of the eight
    /// corners contribute, weighted by sorted differences. More accurate
    /// than trilinear on smooth transforms; used by
    /// [`resample`](Lut3D::resample).
    pub fn apply_tetrahedral(&self, rgb: Rgb) -> Rgb {
        let (r0, r1, x) = Self::bounds_and_delta(rgb.r.clamp(0.0, 1.0), self.size);
        let (g0, g1, y) = Self::bounds_and_delta(rgb.g.clamp(0.0, 1.0), self.size);
        let (b0, b1, z) = Self::bounds_and_delta(rgb.b.clamp(0.0, 1.0), self.size);

        let v000 = self.get_entry(r0, g0, b0);
        let v001 = self.get_entry(r0, g0, b1);
        let v010 = self.get_entry(r0, g1, b0);
        let v011 = self.get_entry(r0, g1, b1);
        let v100 = self.get_entry(r1, g0, b0);
        let v101 = self.get_entry(r1, g0, b1);
        let v110 = self.get_entry(r1, g1, b0);
        let v111 = self.get_entry(r1, g1, b1);

        if x > y {
            if y > z {
                // x > y > z
                v000 * (1.0 - x) + v100 * (x - y) + v110 * (y - z) + v111 * z
            } else if x > z {
                // x > z >= y
                v000 * (1.0 - x) + v100 * (x - z) + v101 * (z - y) + v111 * y
            } else {
                // z >= x > y
                v000 * (1.0 - z) + v001 * (z - x) + v101 * (x - y) + v111 * y
            }
        } else if z > y {
            // z > y >= x
            v000 * (1.0 - z) + v001 * (z - y) + v011 * (y - x) + v111 * x
        } else if z > x {
            // y >= z > x
            v000 * (1.0 - y) + v010 * (y - z) + v011 * (z - x) + v111 * x
        } else {
            // y >= x >= z
            v000 * (1.0 - y) + v010 * (y - x) + v110 * (x - z) + v111 * z
        }
    }

    /// Resamples the cube to a new edge size by evaluating tetrahedral
    /// interpolation at every target grid position.
    ///
    /// A target equal to the current size returns a deep copy. Output
    /// cells are evaluated in parallel.
    #[cfg(feature = "parallel")]
    pub fn resample(&self, new_size: usize) -> LutResult<Self> {
        if new_size < Self::MIN_SIZE || new_size > Self::MAX_SIZE {
            return Err(LutError::size_out_of_range(
                new_size,
                Self::MIN_SIZE,
                Self::MAX_SIZE,
            ));
        }
        if new_size == self.size {
            return Ok(self.clone());
        }
        let scale = (new_size - 1) as f32;
        let mut data = vec![Rgb::default(); new_size * new_size * new_size];
        data.par_chunks_mut(new_size)
            .enumerate()
            .for_each(|(chunk, row)| {
                let b = chunk / new_size;
                let g = chunk % new_size;
                for (r, entry) in row.iter_mut().enumerate() {
                    *entry = self.apply_tetrahedral(Rgb::new(
                        r as f32 / scale,
                        g as f32 / scale,
                        b as f32 / scale,
                    ));
                }
            });
        Self::from_entries(data, new_size)
    }

    /// Resamples the cube to a new edge size by evaluating tetrahedral
    /// interpolation at every target grid position.
    ///
    /// A target equal to the current size returns a deep copy.
    #[cfg(not(feature = "parallel"))]
    pub fn resample(&self, new_size: usize) -> LutResult<Self> {
        if new_size < Self::MIN_SIZE || new_size > Self::MAX_SIZE {
            return Err(LutError::size_out_of_range(
                new_size,
                Self::MIN_SIZE,
                Self::MAX_SIZE,
            ));
        }
        if new_size == self.size {
            return Ok(self.clone());
        }
        let scale = (new_size - 1) as f32;
        let mut data = vec![Rgb::default(); new_size * new_size * new_size];
        data.chunks_mut(new_size)
            .enumerate()
            .for_each(|(chunk, row)| {
                let b = chunk / new_size;
                let g = chunk % new_size;
                for (r, entry) in row.iter_mut().enumerate() {
                    *entry = self.apply_tetrahedral(Rgb::new(
                        r as f32 / scale,
                        g as f32 / scale,
                        b as f32 / scale,
                    ));
                }
            });
        Self::from_entries(data, new_size)
    }
}
