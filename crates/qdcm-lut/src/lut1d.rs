//! 1-dimensional lookup table.
//!
//! A 1D LUT applies an independent transfer curve to each color channel.
//! Typical uses in display calibration:
//! - Degamma / shaper curves ahead of a 3D cube
//! - Per-channel white point trims

use crate::{LutError, LutResult, Rgb};

/// A 1-dimensional lookup table with one curve per channel.
///
/// Stores `size` RGB entries. Each channel is addressed by its own integer
/// index: entry `i`'s red value is consulted only for red queries at `i`,
/// never jointly with green or blue (a diagonal transform, not a 3D
/// lookup with a degenerate axis).
///
/// Tables are immutable once built; [`resize`](Lut1D::resize) produces a
/// new table.
///
/// # Example
///
/// ```rust
/// use qdcm_lut::{Lut1D, Rgb};
///
/// let lut = Lut1D::identity(256).unwrap();
/// let out = lut.apply(Rgb::splat(0.5));
/// assert!((out.r - 0.5).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1D {
    entries: Vec<Rgb>,
}

impl Lut1D {
    /// Smallest supported entry count.
    pub const MIN_SIZE: usize = 2;
    /// Largest supported entry count.
    pub const MAX_SIZE: usize = 65536;

    /// Creates a table from pre-built entries.
    ///
    /// The entry count must be within [`MIN_SIZE`](Self::MIN_SIZE) ..=
    /// [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn from_entries(entries: Vec<Rgb>) -> LutResult<Self> {
        let size = entries.len();
        if size < Self::MIN_SIZE || size > Self::MAX_SIZE {
            return Err(LutError::size_out_of_range(
                size,
                Self::MIN_SIZE,
                Self::MAX_SIZE,
            ));
        }
        Ok(Self { entries })
    }

    /// Creates an identity (pass-through) table: entry `i` is
    /// `i / (size - 1)` on all channels.
    pub fn identity(size: usize) -> LutResult<Self> {
        if size < Self::MIN_SIZE || size > Self::MAX_SIZE {
            return Err(LutError::size_out_of_range(
                size,
                Self::MIN_SIZE,
                Self::MAX_SIZE,
            ));
        }
        let scale = (size - 1) as f32;
        let entries = (0..size).map(|i| Rgb::splat(i as f32 / scale)).collect();
        Ok(Self { entries })
    }

    /// Returns the number of entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns the raw entries in index order.
    #[inline]
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }

    /// Exact lookup with an independent index per channel: returns
    /// `(entry[r].r, entry[g].g, entry[b].b)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= size`.
    #[inline]
    pub fn get_entry(&self, r: usize, g: usize, b: usize) -> Rgb {
        Rgb::new(self.entries[r].r, self.entries[g].g, self.entries[b].b)
    }

    /// Applies the table to a color, interpolating each channel along its
    /// own curve.
    ///
    /// Inputs are clamped to [0, 1]; the operation never fails.
    pub fn apply(&self, rgb: Rgb) -> Rgb {
        Rgb::new(
            self.blend_channel(rgb.r, |e| e.r),
            self.blend_channel(rgb.g, |e| e.g),
            self.blend_channel(rgb.b, |e| e.b),
        )
    }

    /// Linear blend between the two entries enclosing `value` on one
    /// channel's curve.
    fn blend_channel(&self, value: f32, channel: fn(Rgb) -> f32) -> f32 {
        let pos = value.clamp(0.0, 1.0) * (self.entries.len() - 1) as f32;
        let lower = pos.floor() as usize;
        let upper = pos.ceil() as usize;
        let frac = pos - lower as f32;
        channel(self.entries[lower]) * (1.0 - frac) + channel(self.entries[upper]) * frac
    }

    /// Resamples the table to `new_size` entries by evaluating
    /// [`apply`](Self::apply) along the diagonal at `i / (new_size - 1)`.
    ///
    /// A target equal to the current size returns a deep copy.
    pub fn resize(&self, new_size: usize) -> LutResult<Self> {
        if new_size < Self::MIN_SIZE || new_size > Self::MAX_SIZE {
            return Err(LutError::size_out_of_range(
                new_size,
                Self::MIN_SIZE,
                Self::MAX_SIZE,
            ));
        }
        if new_size == self.entries.len() {
            return Ok(self.clone());
        }
        let scale = (new_size - 1) as f32;
        let entries = (0..new_size)
            .map(|i| self.apply(Rgb::splat(i as f32 / scale)))
            .collect();
        Self::from_entries(entries)
    }
}
