//! Display hardware color pipeline pieces.
//!
//! Builds on [`qdcm_lut`] to produce what the display stack actually
//! consumes: fixed-size 12-bit payloads for the panel's shaper and cube
//! stages, and 17-point calibration cubes recovered from firmware update
//! images.
//!
//! # Pipeline
//!
//! The panel applies a 257-entry 1D shaper followed by a 17^3 3D cube,
//! both with 12-bit integer entries. [`shaper_payload`] and
//! [`cube_payload`] resample arbitrary LUTs to those grids and quantize
//! them. [`preset_lut`] goes the other way, decoding a factory
//! calibration cube out of a firmware blob so it can be inspected or
//! written back out as a .cube file.
//!
//! # Example
//!
//! ```rust
//! use qdcm_device::{cube_payload, MAX_CODE};
//! use qdcm_lut::Lut3D;
//!
//! let lut = Lut3D::identity(33).unwrap();
//! let payload = cube_payload(&lut).unwrap();
//! assert_eq!(payload.red[0], 0);
//! assert_eq!(*payload.red.last().unwrap(), MAX_CODE);
//! ```

#![warn(missing_docs)]

mod error;
mod firmware;
mod payload;

pub use error::{DeviceError, DeviceResult};
pub use firmware::{preset_lut, Preset, PRESET_BLOCK_SIZE};
pub use payload::{
    cube_payload, shaper_payload, CubePayload, ShaperPayload, CUBE_SIZE, MAX_CODE, SHAPER_SIZE,
};
