//
// main.rs
// Dicom2Nifti-rs
//
// Entry point that hands off execution to the CLI layer.
//
// Thales Matheus Mendonça Santos - March 2026

use dicom2nifti::cli;

fn main() -> anyhow::Result<()> {
    // Delegate all argument parsing and dispatching to the CLI module.
    cli::run()
}
