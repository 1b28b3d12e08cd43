//
// convert.rs
// Dicom2Nifti-rs
//
// Orchestrates the batch conversion: scans patient directories, decodes their slices, stacks them, and writes one NIfTI volume per patient.
//
// Thales Matheus Mendonça Santos - March 2026

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::decode::{DicomSliceDecoder, SliceDecoder};
use crate::scan;
use crate::volume;
use crate::writer::{NiftiVolumeWriter, VolumeWriter};

/// Converts every patient subdirectory of `dicom_dir` into one compressed
/// NIfTI volume in `output_dir`, using the production DICOM decoder and
/// NIfTI writer.
pub fn convert(dicom_dir: &Path, output_dir: &Path) -> Result<()> {
    convert_with(dicom_dir, output_dir, &DicomSliceDecoder, &NiftiVolumeWriter)
}

/// Same pipeline with the decode and write collaborators injected.
///
/// Patients are processed one at a time, in directory-listing order; the
/// first failure of any kind aborts the whole run. Volumes already written
/// for earlier patients stay on disk.
pub fn convert_with(
    dicom_dir: &Path,
    output_dir: &Path,
    decoder: &dyn SliceDecoder,
    writer: &dyn VolumeWriter,
) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Falha ao criar diretório de saída {:?}", output_dir))?;

    let patients = scan::scan_directory(dicom_dir)?;
    println!(
        "Processando diretório: {:?} | {} paciente(s)",
        dicom_dir,
        patients.len()
    );

    for patient in patients {
        let slices = patient
            .slice_paths
            .iter()
            .map(|path| decoder.decode_slice(path))
            .collect::<Result<Vec<_>>>()?;

        let volume = volume::stack_slices(slices)
            .with_context(|| format!("Falha ao montar volume do paciente {}", patient.patient_id))?;

        let output_path = output_dir.join(format!("{}.nii.gz", patient.patient_id));
        writer.write_volume(&output_path, &volume)?;

        let (rows, cols, num_slices) = volume.shape();
        println!(
            "Sucesso: {}.nii.gz ({}x{}x{})",
            patient.patient_id, rows, cols, num_slices
        );
    }

    Ok(())
}
