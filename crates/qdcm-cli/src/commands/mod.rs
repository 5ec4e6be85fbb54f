//! CLI command implementations

pub mod extract;
pub mod info;
pub mod payload;
pub mod resample;

use anyhow::{Context, Result};
use qdcm_lut::{cube, Lut};
use std::path::Path;

/// Load a LUT of either dimension from a .cube file
pub fn load_lut(path: &Path) -> Result<Lut> {
    cube::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Write a LUT to a .cube file
pub fn save_lut(path: &Path, lut: &Lut) -> Result<()> {
    cube::write(path, lut).with_context(|| format!("Failed to save: {}", path.display()))
}
