//
// main.rs
// dicom-scrub
//
// Process entry point: installs the tracing subscriber and hands execution to the CLI layer.
//

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Progress and diagnostics go to stderr; RUST_LOG tunes verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    dicom_scrub::cli::run()
}
