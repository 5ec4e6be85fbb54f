//! Hardware payload command.
//!
//! Quantizes a LUT onto the panel's shaper or cube grid and prints a
//! summary, optionally dumping the raw codes to a file.

use crate::{PayloadArgs, PayloadKind};
use anyhow::{Context, Result};
use qdcm_device::{cube_payload, shaper_payload, CUBE_SIZE, SHAPER_SIZE};
use std::fs::File;
use std::io::{BufWriter, Write};

#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Runs the payload command.
pub fn run(args: PayloadArgs, verbose: bool) -> Result<()> {
    let lut = super::load_lut(&args.input)?;

    let kind = args.kind.unwrap_or(match lut.dimension() {
        1 => PayloadKind::Shaper,
        _ => PayloadKind::Cube,
    });

    let (red, green, blue) = match kind {
        PayloadKind::Shaper => {
            let lut = lut.into_1d().context("Shaper payloads need a 1D LUT")?;
            let payload = shaper_payload(&lut)?;
            println!("Shaper payload: {} codes per channel", SHAPER_SIZE);
            (payload.red, payload.green, payload.blue)
        }
        PayloadKind::Cube => {
            let lut = lut.into_3d().context("Cube payloads need a 3D LUT")?;
            let payload = cube_payload(&lut)?;
            println!("Cube payload: {0}x{0}x{0} codes per channel", CUBE_SIZE);
            (payload.red, payload.green, payload.blue)
        }
    };

    let last = red.len() - 1;
    println!("  First: {} {} {}", red[0], green[0], blue[0]);
    println!("  Last:  {} {} {}", red[last], green[last], blue[last]);

    if let Some(path) = &args.output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for i in 0..red.len() {
            writeln!(writer, "{} {} {}", red[i], green[i], blue[i])?;
        }
        if verbose {
            println!("  Wrote {} triples to {}", red.len(), path.display());
        }
    }

    Ok(())
}
