//
// lib.rs
// Dicom2Nifti-rs
//
// Exposes the crate's modules and re-exports the CLI entry point for both binary and library consumers.
//
// Thales Matheus Mendonça Santos - March 2026

// Public surface of the library: one module per stage of the pipeline.
pub mod cli;
pub mod convert;
pub mod decode;
pub mod scan;
pub mod volume;
pub mod writer;

pub use cli::{run as run_cli, Cli};
pub use convert::{convert, convert_with};
