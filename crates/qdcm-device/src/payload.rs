//! 12-bit hardware payloads for the panel's shaper and cube stages.
//!
//! The display pipeline runs a 1D shaper over a fixed 257-point grid
//! followed by a 17^3 cube, both with 12-bit integer entries. Payload
//! construction resamples the source LUT onto the hardware grid and
//! quantizes every entry, so any valid LUT can be loaded regardless of
//! its file size.

use crate::DeviceResult;
use qdcm_lut::{Lut1D, Lut3D};

/// Entry count of the hardware shaper stage.
pub const SHAPER_SIZE: usize = 257;

/// Edge size of the hardware cube stage.
pub const CUBE_SIZE: usize = 17;

/// Largest hardware code: entries are 12-bit.
pub const MAX_CODE: u32 = 4095;

/// Quantizes a unit-range value to a hardware code, clamping anything
/// outside the code range.
#[inline]
fn quantize(value: f32) -> u32 {
    (value * MAX_CODE as f32).round().clamp(0.0, MAX_CODE as f32) as u32
}

/// Quantized entries for the shaper stage, one code per channel per grid
/// point, [`SHAPER_SIZE`] entries each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaperPayload {
    /// Red channel codes
    pub red: Vec<u32>,
    /// Green channel codes
    pub green: Vec<u32>,
    /// Blue channel codes
    pub blue: Vec<u32>,
}

/// Quantized entries for the cube stage in blue-major flat order (red
/// varies fastest), [`CUBE_SIZE`]^3 entries per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubePayload {
    /// Red channel codes
    pub red: Vec<u32>,
    /// Green channel codes
    pub green: Vec<u32>,
    /// Blue channel codes
    pub blue: Vec<u32>,
}

/// Builds the shaper stage payload from a 1D LUT.
///
/// LUTs whose size differs from [`SHAPER_SIZE`] are resampled first.
pub fn shaper_payload(lut: &Lut1D) -> DeviceResult<ShaperPayload> {
    let resized;
    let lut = if lut.size() == SHAPER_SIZE {
        lut
    } else {
        resized = lut.resize(SHAPER_SIZE)?;
        &resized
    };
    let mut payload = ShaperPayload {
        red: Vec::with_capacity(SHAPER_SIZE),
        green: Vec::with_capacity(SHAPER_SIZE),
        blue: Vec::with_capacity(SHAPER_SIZE),
    };
    for entry in lut.entries() {
        payload.red.push(quantize(entry.r));
        payload.green.push(quantize(entry.g));
        payload.blue.push(quantize(entry.b));
    }
    Ok(payload)
}

/// Builds the cube stage payload from a 3D LUT.
///
/// LUTs whose edge size differs from [`CUBE_SIZE`] are resampled first.
pub fn cube_payload(lut: &Lut3D) -> DeviceResult<CubePayload> {
    let resampled;
    let lut = if lut.size() == CUBE_SIZE {
        lut
    } else {
        resampled = lut.resample(CUBE_SIZE)?;
        &resampled
    };
    let count = CUBE_SIZE * CUBE_SIZE * CUBE_SIZE;
    let mut payload = CubePayload {
        red: Vec::with_capacity(count),
        green: Vec::with_capacity(count),
        blue: Vec::with_capacity(count),
    };
    for entry in lut.entries() {
        payload.red.push(quantize(entry.r));
        payload.green.push(quantize(entry.g));
        payload.blue.push(quantize(entry.b));
    }
    Ok(payload)
}
