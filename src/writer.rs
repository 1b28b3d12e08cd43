//
// writer.rs
// Dicom2Nifti-rs
//
// Persists a stacked patient volume as a gzip-compressed NIfTI-1 file with an identity affine.
//
// Thales Matheus Mendonça Santos - March 2026

use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Matrix4;
use nifti::writer::WriterOptions;
use nifti::NiftiHeader;

use crate::volume::VolumeData;

/// Persistence of an assembled volume. Injectable for the same reason as
/// `SliceDecoder`: the conversion pipeline is testable without touching the
/// NIfTI codec.
pub trait VolumeWriter {
    fn write_volume(&self, path: &Path, volume: &VolumeData) -> Result<()>;
}

/// Production writer backed by the nifti crate. The `.gz` suffix of the
/// output path selects gzip compression.
pub struct NiftiVolumeWriter;

impl VolumeWriter for NiftiVolumeWriter {
    fn write_volume(&self, path: &Path, volume: &VolumeData) -> Result<()> {
        // No spatial calibration is carried over from the slice headers;
        // every output volume gets the 4x4 identity transform.
        let mut header = NiftiHeader::default();
        header.set_affine(&Matrix4::<f64>::identity());

        let options = WriterOptions::new(path).reference_header(&header);
        let written = match volume {
            VolumeData::U8(data) => options.write_nifti(data),
            VolumeData::I8(data) => options.write_nifti(data),
            VolumeData::U16(data) => options.write_nifti(data),
            VolumeData::I16(data) => options.write_nifti(data),
            VolumeData::U32(data) => options.write_nifti(data),
            VolumeData::I32(data) => options.write_nifti(data),
        };

        written.with_context(|| format!("Failed to write volume to {:?}", path))
    }
}
