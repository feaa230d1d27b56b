//
// lib.rs
// dicom-scrub
//
// Exposes the crate's modules and re-exports the CLI entry point for both binary and library consumers.
//

// Public surface of the library: each module mirrors one stage of the pipeline.
pub mod cli;
pub mod convert;
pub mod dicom_access;
pub mod remap;
pub mod scrub;
pub mod tables;
pub mod walker;
pub mod writer;

pub use cli::{run as run_cli, Cli};
