//! Firmware calibration extraction command.
//!
//! Decodes a factory preset cube out of a firmware image and saves it
//! as a .cube file.

use crate::{ExtractArgs, PresetArg};
use anyhow::{Context, Result};
use qdcm_device::{preset_lut, Preset};
use qdcm_lut::cube;
use std::fs;

#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Runs the extract command.
pub fn run(args: ExtractArgs, verbose: bool) -> Result<()> {
    let blob = fs::read(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;
    debug!("firmware image: {} bytes", blob.len());

    let preset = match args.preset {
        PresetArg::Srgb => Preset::Srgb,
        PresetArg::DisplayP3 => Preset::DisplayP3,
    };
    let lut = preset_lut(&blob, preset)
        .with_context(|| format!("No {} table in {}", preset.name(), args.input.display()))?;

    cube::write_3d(&args.output, &lut)
        .with_context(|| format!("Failed to save: {}", args.output.display()))?;

    if verbose {
        println!(
            "Extracted {} calibration ({}^3) to {}",
            preset.name(),
            lut.size(),
            args.output.display()
        );
    } else {
        println!(
            "Extracted {} calibration to {}",
            preset.name(),
            args.output.display()
        );
    }

    Ok(())
}
