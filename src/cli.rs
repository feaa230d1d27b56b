//
// cli.rs
// dicom-scrub
//
// Defines the CLI surface with Clap, checks directory preconditions, and dispatches to the pipeline.
//

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use crate::convert;

/// Command-line interface glue code: two positional directories, no flags.
#[derive(Parser)]
#[command(name = "dicom-scrub")]
#[command(about = "Anonymize & reduce a tree of DICOM study data", long_about = None)]
pub struct Cli {
    /// Input directory
    pub input: PathBuf,
    /// Output directory (must not exist yet)
    pub output: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with(&cli)
}

/// Precondition checks and dispatch, separated from argument parsing so tests can drive it directly.
pub fn run_with(cli: &Cli) -> anyhow::Result<()> {
    // Both checks happen before any file is touched.
    if !cli.input.is_dir() {
        bail!("Input directory does not exist");
    }
    if cli.output.exists() {
        bail!("Output directory already exists");
    }

    convert::convert_tree(&cli.input, &cli.output)?;
    Ok(())
}
