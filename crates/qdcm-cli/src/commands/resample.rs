//! LUT resample command.
//!
//! 1D LUTs resize with linear interpolation, 3D LUTs with tetrahedral.

use crate::ResampleArgs;
use anyhow::{Context, Result};
use qdcm_lut::Lut;

#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Runs the resample command.
pub fn run(args: ResampleArgs, verbose: bool) -> Result<()> {
    let lut = super::load_lut(&args.input)?;
    let from = lut.size();
    debug!("resampling {}D LUT {} -> {}", lut.dimension(), from, args.size);

    let resampled: Lut = match lut {
        Lut::OneD(lut) => lut
            .resize(args.size)
            .with_context(|| format!("Cannot resize to {} entries", args.size))?
            .into(),
        Lut::ThreeD(lut) => lut
            .resample(args.size)
            .with_context(|| format!("Cannot resample to {0}x{0}x{0}", args.size))?
            .into(),
    };

    super::save_lut(&args.output, &resampled)?;

    if verbose {
        println!(
            "{}: {}D, {} -> {} ({} entries)",
            args.output.display(),
            resampled.dimension(),
            from,
            args.size,
            resampled.entry_count()
        );
    }

    Ok(())
}
