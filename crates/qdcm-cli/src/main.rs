//! qdcm - Display calibration LUT toolkit
//!
//! Inspects, resamples, and converts .cube LUTs for the display pipeline

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "qdcm")]
#[command(author, version, about = "Display calibration LUT toolkit")]
#[command(long_about = "
Display calibration LUT toolkit.

Reads and writes IRIDAS/Resolve .cube files, resamples LUTs onto the
display pipeline's hardware grids, quantizes them into 12-bit register
payloads, and recovers factory calibration cubes from firmware images.

Examples:
  qdcm info grade.cube                  # Show LUT info
  qdcm info *.cube -v                   # Include mid-gray response
  qdcm resample big.cube -o small.cube -s 17
  qdcm payload panel.cube               # Payload summary on stdout
  qdcm payload curve.cube -k shaper -o codes.txt
  qdcm extract firmware.bin -p display-p3 -o factory.cube
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Display LUT information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Resample a LUT to a new grid size
    #[command(visible_alias = "r")]
    Resample(ResampleArgs),

    /// Build the 12-bit hardware payload for a LUT
    #[command(visible_alias = "p")]
    Payload(PayloadArgs),

    /// Extract a factory calibration cube from a firmware image
    #[command(visible_alias = "x")]
    Extract(ExtractArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input LUT file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct ResampleArgs {
    /// Input LUT file
    input: PathBuf,

    /// Output LUT file
    #[arg(short, long)]
    output: PathBuf,

    /// Target size (entry count for 1D, edge size for 3D)
    #[arg(short, long)]
    size: usize,
}

#[derive(Args)]
struct PayloadArgs {
    /// Input LUT file
    input: PathBuf,

    /// Payload kind (defaults to the LUT's dimension)
    #[arg(short, long)]
    kind: Option<PayloadKind>,

    /// Write codes to a file, one "R G B" triple per line
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ExtractArgs {
    /// Firmware image
    input: PathBuf,

    /// Calibration preset to extract
    #[arg(short, long)]
    preset: PresetArg,

    /// Output .cube file
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum PayloadKind {
    /// 257-point 1D shaper stage
    Shaper,
    /// 17x17x17 cube stage
    Cube,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    /// Factory sRGB calibration
    Srgb,
    /// Factory Display P3 calibration
    DisplayP3,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Resample(args) => commands::resample::run(args, cli.verbose),
        Commands::Payload(args) => commands::payload::run(args, cli.verbose),
        Commands::Extract(args) => commands::extract::run(args, cli.verbose),
    }
}

/// Sends log output to stderr so command output stays clean on stdout.
/// `RUST_LOG` overrides the verbosity flag when set.
fn init_logging(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
