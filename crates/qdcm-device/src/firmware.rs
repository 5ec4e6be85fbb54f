//! Calibration cube extraction from firmware images.
//!
//! Panel firmware updates carry the factory calibration as two
//! consecutive DLUT preset blocks, Display P3 first and sRGB second.
//! Each block packs a 17^3 cube in 12-bit codes:
//!
//! ```text
//! offset in block    content
//! 0x80               4913 big-endian words: blue in bits 0..12,
//!                    green in bits 12..24, red low byte in bits 24..32
//! 0x4d44             4913 bytes: red high bits
//! ```
//!
//! Entries are ordered red-major (blue varies fastest), the transpose of
//! the .cube row order, so decoding reorders them into [`Lut3D`] layout.

use crate::payload::{CUBE_SIZE, MAX_CODE};
use crate::{DeviceError, DeviceResult};
use qdcm_lut::{Lut3D, Rgb};

/// Byte size of one preset's DLUT block.
pub const PRESET_BLOCK_SIZE: usize = 0x6400;

const ENTRY_COUNT: usize = CUBE_SIZE * CUBE_SIZE * CUBE_SIZE;
const LOW_WORDS: usize = 0x80;
const HIGH_BYTES: usize = LOW_WORDS + ENTRY_COUNT * 4;

/// Factory calibration presets stored in a firmware image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Panel calibration against sRGB.
    Srgb,
    /// Wide-gamut Display P3 calibration.
    DisplayP3,
}

impl Preset {
    /// Human-readable preset name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Srgb => "sRGB",
            Preset::DisplayP3 => "Display P3",
        }
    }

    /// Byte offset of this preset's DLUT block in the firmware image.
    fn block_offset(self) -> usize {
        match self {
            Preset::DisplayP3 => 0x44,
            Preset::Srgb => 0x6444,
        }
    }
}

/// Decodes one preset's calibration cube out of a firmware blob.
///
/// Codes are scaled by [`MAX_CODE`] without masking the red channel, so
/// a red high byte above 15 produces entries past 1.0 rather than
/// wrapping.
pub fn preset_lut(blob: &[u8], preset: Preset) -> DeviceResult<Lut3D> {
    let base = preset.block_offset();
    let needed = base + PRESET_BLOCK_SIZE;
    if blob.len() < needed {
        return Err(DeviceError::FirmwareTruncated {
            needed,
            len: blob.len(),
        });
    }
    let block = &blob[base..needed];

    let mut entries = vec![Rgb::default(); ENTRY_COUNT];
    let mut index = 0;
    for r in 0..CUBE_SIZE {
        for g in 0..CUBE_SIZE {
            for b in 0..CUBE_SIZE {
                let at = LOW_WORDS + index * 4;
                let word = u32::from_be_bytes([
                    block[at],
                    block[at + 1],
                    block[at + 2],
                    block[at + 3],
                ]);
                let high = block[HIGH_BYTES + index] as u32;
                let blue = (word & 0xFFF) as f32 / MAX_CODE as f32;
                let green = ((word >> 12) & 0xFFF) as f32 / MAX_CODE as f32;
                let red = ((word >> 24) | (high << 8)) as f32 / MAX_CODE as f32;
                entries[b * CUBE_SIZE * CUBE_SIZE + g * CUBE_SIZE + r] =
                    Rgb::new(red, green, blue);
                index += 1;
            }
        }
    }
    Ok(Lut3D::from_entries(entries, CUBE_SIZE)?)
}
