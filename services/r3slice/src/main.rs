//! Volume slicing command-line tool.
//!
//! Reads a 3D-ASCII raster file, slices it into one 2D layer per
//! vertical level, and writes each layer as a 2D-ASCII file named
//! `<basename>_<index>.asc` with a 1-based, zero-padded index.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ascii_raster::{parse_grid3, write_grid2};
use raster_grid::LevelSlicer;

#[derive(Parser, Debug)]
#[command(name = "r3slice")]
#[command(about = "Convert a 3D-ASCII raster into per-level 2D-ASCII rasters")]
struct Args {
    /// Input 3D-ASCII raster file
    input: PathBuf,

    /// Basename for the output layer files
    #[arg(short, long)]
    output: String,

    /// Directory the output files are written to
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Decimal places for cell values (default: shortest exact form)
    #[arg(short, long)]
    precision: Option<usize>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading input file {}", args.input.display()))?;
    let volume = parse_grid3(&text)
        .with_context(|| format!("parsing 3D-ASCII raster {}", args.input.display()))?;

    let (rows, cols, levels) = volume.shape();
    info!(rows, cols, levels, nulls = volume.null_count(), "parsed input volume");

    let layers = LevelSlicer::slice(&volume).context("slicing volume into layers")?;

    fs::create_dir_all(&args.dir)
        .with_context(|| format!("creating output directory {}", args.dir.display()))?;

    for (k, layer) in layers.iter().enumerate() {
        let path = output_path(&args.dir, &args.output, k);
        fs::write(&path, write_grid2(layer, args.precision))
            .with_context(|| format!("writing layer file {}", path.display()))?;
        info!(level = k, path = %path.display(), nulls = layer.null_count(), "wrote layer");
    }

    info!(levels, "conversion completed");
    Ok(())
}

/// Output file path for layer `level`: `<dir>/<base>_<level+1 as %05d>.asc`.
fn output_path(dir: &Path, base: &str, level: usize) -> PathBuf {
    dir.join(format!("{}_{:05}.asc", base, level + 1))
}
