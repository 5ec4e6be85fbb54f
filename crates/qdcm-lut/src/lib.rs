//! # qdcm-lut
//!
//! Look-Up Table (LUT) parsing and interpolation for display calibration.
//!
//! This crate reads the text-based `.cube` LUT format (IRIDAS/Resolve
//! dialect) and builds immutable in-memory tables supporting exact lookup,
//! continuous interpolation, and resolution resampling. It is the core of
//! the qdcm display color management tools.
//!
//! # LUT Types
//!
//! - [`Lut1D`] - 1-dimensional lookup table (independent per-channel curves)
//! - [`Lut3D`] - 3-dimensional lookup table (full RGB cube)
//! - [`Lut`] - either of the two, as produced by the parser
//!
//! # Usage
//!
//! ```rust
//! use qdcm_lut::{cube, Rgb};
//!
//! let text = "\
//! LUT_3D_SIZE 2
//! 0 0 0
//! 1 0 0
//! 0 1 0
//! 1 1 0
//! 0 0 1
//! 1 0 1
//! 0 1 1
//! 1 1 1
//! ";
//! let lut = cube::parse(text.as_bytes()).unwrap();
//! assert_eq!(lut.dimension(), 3);
//! let mid = lut.apply(Rgb::splat(0.5));
//! assert!((mid.r - 0.5).abs() < 1e-6);
//! ```
//!
//! # Interpolation
//!
//! - 1D LUTs: per-channel linear interpolation (channels never interact)
//! - 3D LUTs: trilinear for [`Lut3D::apply`], tetrahedral for resampling
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - `rayon` - Parallel resampling (behind the `parallel` feature)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod lut;
mod lut1d;
mod lut3d;
mod rgb;
pub mod cube;

pub use error::{LutError, LutResult};
pub use lut::Lut;
pub use lut1d::Lut1D;
pub use lut3d::Lut3D;
pub use rgb::Rgb;
