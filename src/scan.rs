use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// One patient subdirectory and its slice files in stacking order.
#[derive(Debug, Clone)]
pub struct PatientSeries {
    pub patient_id: String,
    pub slice_paths: Vec<PathBuf>,
}

/// Slice files are selected purely by the `.dcm` filename suffix; every
/// other entry in a patient directory is skipped without comment.
pub fn is_slice_file(path: &Path) -> bool {
    path.is_file() && path.extension().map_or(false, |ext| ext == "dcm")
}

/// Builds the patient -> ordered slice paths mapping in a single pass over
/// the immediate children of `dicom_dir`. Top-level entries that are not
/// directories are not patient units and are skipped silently. Patients are
/// yielded in directory-listing order.
pub fn scan_directory(dicom_dir: &Path) -> Result<Vec<PatientSeries>> {
    let mut patients = Vec::new();

    for entry in WalkDir::new(dicom_dir).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Falha ao listar diretório {:?}", dicom_dir))?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let patient_id = entry.file_name().to_string_lossy().into_owned();
        let slice_paths = slice_paths_in(entry.path())?;
        patients.push(PatientSeries {
            patient_id,
            slice_paths,
        });
    }

    Ok(patients)
}

fn slice_paths_in(patient_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = WalkDir::new(patient_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| is_slice_file(p))
        .collect();

    // The filename sort is the sole determinant of stacking order; per-slice
    // instance or position metadata is never consulted.
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}
