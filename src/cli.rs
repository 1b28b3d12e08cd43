//
// cli.rs
// Dicom2Nifti-rs
//
// Defines the two-argument CLI surface with Clap and hands the paths to the converter.
//
// Thales Matheus Mendonça Santos - March 2026

use std::path::PathBuf;

use clap::Parser;

use crate::convert;

/// Command-line surface: two positional paths, no flags.
#[derive(Parser)]
#[command(name = "dicom2nifti")]
#[command(about = "Conversão de DICOM para NIfTI em Rust", long_about = None)]
pub struct Cli {
    /// Directory containing one subdirectory of .dcm slices per patient
    pub dicom_dir: PathBuf,

    /// Directory where the .nii.gz volumes are written (created if missing)
    pub output_dir: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    convert::convert(&cli.dicom_dir, &cli.output_dir)
}
