//! Prints summary statistics of an AEDAT 2.0 recording.

use aedat_core::info;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Reports the event count and first/last timestamp of an AER-DAT 2.0 file.
#[derive(Parser, Debug)]
#[command(name = "aedatinfo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file to read data from
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let progress = aedat_cli::spinner(
        args.quiet,
        format!("Scanning {:?}...", args.input.file_name().unwrap_or_default()),
    );

    let report = aedat_cli::finish(&progress, info::file_info(&args.input))
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    println!("{}", report);

    Ok(())
}
