//! Cuts a time slice out of an AEDAT 2.0 recording.

use aedat_core::{output, SliceConfig, TimeWindow};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Stores all events of an AER-DAT 2.0 file with timestamps in [START, STOP]
/// into a new AER-DAT 2.0 file.
#[derive(Parser, Debug)]
#[command(name = "aedatslice")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file to read data from
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Timestamp when to start cutting (inclusive)
    #[arg(value_name = "START")]
    start: u32,

    /// Timestamp when to stop cutting (inclusive)
    #[arg(value_name = "STOP")]
    stop: u32,

    /// File into which the slice is stored
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SliceConfig::new(
        &args.input,
        &args.output,
        TimeWindow::new(args.start, args.stop),
    )?;

    let progress = aedat_cli::spinner(
        args.quiet,
        format!(
            "Slicing {:?} into {:?}...",
            args.input.file_name().unwrap_or_default(),
            args.output.file_name().unwrap_or_default()
        ),
    );
    let start_time = Instant::now();

    let stats = aedat_cli::finish(&progress, output::slice_file(&config)).with_context(|| {
        format!(
            "Failed to slice {} into {}",
            config.input().display(),
            config.output().display()
        )
    })?;

    info!(
        "sliced [{}, {}] in {:.3}s",
        args.start,
        args.stop,
        start_time.elapsed().as_secs_f64()
    );
    println!("{}", stats);

    Ok(())
}
