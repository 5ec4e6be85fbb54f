//! LUT info command.
//!
//! Displays dimensionality, grid size, and the response at the domain
//! extremes.

use crate::InfoArgs;
use anyhow::Result;
use qdcm_lut::{Lut, Rgb};

#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Runs the info command, printing a summary per input file.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let lut = super::load_lut(path)?;
        debug!("loaded {}", path.display());

        println!("{}", path.display());
        println!("  Dimension: {}D", lut.dimension());
        match &lut {
            Lut::OneD(lut) => println!("  Size:      {} entries", lut.size()),
            Lut::ThreeD(lut) => println!("  Size:      {0}x{0}x{0}", lut.size()),
        }
        println!("  Entries:   {}", lut.entry_count());

        let black = lut.apply(Rgb::splat(0.0));
        let white = lut.apply(Rgb::splat(1.0));
        println!("  Black:     {:.6} {:.6} {:.6}", black.r, black.g, black.b);
        println!("  White:     {:.6} {:.6} {:.6}", white.r, white.g, white.b);

        if verbose {
            let mid = lut.apply(Rgb::splat(0.5));
            println!("  Mid gray:  {:.6} {:.6} {:.6}", mid.r, mid.g, mid.b);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}
