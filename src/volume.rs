//
// volume.rs
// Dicom2Nifti-rs
//
// Stacks decoded 2-D slice planes into a 3-D patient volume along a new trailing axis.
//
// Thales Matheus Mendonça Santos - March 2026

use ndarray::{s, Array2, Array3};
use thiserror::Error;

/// Storage type of a decoded pixel plane, following Bits Allocated and
/// Pixel Representation of the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
}

/// One decoded slice: a single 2-D pixel plane, tagged by storage type.
#[derive(Debug, Clone)]
pub enum SlicePixels {
    U8(Array2<u8>),
    I8(Array2<i8>),
    U16(Array2<u16>),
    I16(Array2<i16>),
    U32(Array2<u32>),
    I32(Array2<i32>),
}

/// A stacked patient volume of shape (rows, cols, num_slices), same storage
/// type as the slices it was built from.
#[derive(Debug, Clone)]
pub enum VolumeData {
    U8(Array3<u8>),
    I8(Array3<i8>),
    U16(Array3<u16>),
    I16(Array3<i16>),
    U32(Array3<u32>),
    I32(Array3<i32>),
}

#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("no slice files to stack")]
    NoSlices,

    #[error("inconsistent slice dimensions: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("inconsistent pixel types: expected {expected:?}, found {found:?}")]
    MixedPixelTypes { expected: PixelKind, found: PixelKind },
}

impl SlicePixels {
    pub fn kind(&self) -> PixelKind {
        match self {
            SlicePixels::U8(_) => PixelKind::U8,
            SlicePixels::I8(_) => PixelKind::I8,
            SlicePixels::U16(_) => PixelKind::U16,
            SlicePixels::I16(_) => PixelKind::I16,
            SlicePixels::U32(_) => PixelKind::U32,
            SlicePixels::I32(_) => PixelKind::I32,
        }
    }

    /// (rows, cols) of the plane.
    pub fn dim(&self) -> (usize, usize) {
        match self {
            SlicePixels::U8(a) => a.dim(),
            SlicePixels::I8(a) => a.dim(),
            SlicePixels::U16(a) => a.dim(),
            SlicePixels::I16(a) => a.dim(),
            SlicePixels::U32(a) => a.dim(),
            SlicePixels::I32(a) => a.dim(),
        }
    }
}

impl VolumeData {
    /// (rows, cols, num_slices) of the volume.
    pub fn shape(&self) -> (usize, usize, usize) {
        match self {
            VolumeData::U8(a) => a.dim(),
            VolumeData::I8(a) => a.dim(),
            VolumeData::U16(a) => a.dim(),
            VolumeData::I16(a) => a.dim(),
            VolumeData::U32(a) => a.dim(),
            VolumeData::I32(a) => a.dim(),
        }
    }
}

/// Stacks the slices of one patient along a new trailing axis, in the order
/// given. All slices must agree in shape and storage type; the k-th input
/// plane becomes `volume[.., .., k]`.
pub fn stack_slices(slices: Vec<SlicePixels>) -> Result<VolumeData, VolumeError> {
    let kind = slices.first().map(SlicePixels::kind).ok_or(VolumeError::NoSlices)?;

    let volume = match kind {
        PixelKind::U8 => VolumeData::U8(stack_planes(planes_of(slices, kind, |s| match s {
            SlicePixels::U8(a) => Some(a),
            _ => None,
        })?)?),
        PixelKind::I8 => VolumeData::I8(stack_planes(planes_of(slices, kind, |s| match s {
            SlicePixels::I8(a) => Some(a),
            _ => None,
        })?)?),
        PixelKind::U16 => VolumeData::U16(stack_planes(planes_of(slices, kind, |s| match s {
            SlicePixels::U16(a) => Some(a),
            _ => None,
        })?)?),
        PixelKind::I16 => VolumeData::I16(stack_planes(planes_of(slices, kind, |s| match s {
            SlicePixels::I16(a) => Some(a),
            _ => None,
        })?)?),
        PixelKind::U32 => VolumeData::U32(stack_planes(planes_of(slices, kind, |s| match s {
            SlicePixels::U32(a) => Some(a),
            _ => None,
        })?)?),
        PixelKind::I32 => VolumeData::I32(stack_planes(planes_of(slices, kind, |s| match s {
            SlicePixels::I32(a) => Some(a),
            _ => None,
        })?)?),
    };

    Ok(volume)
}

fn planes_of<T>(
    slices: Vec<SlicePixels>,
    expected: PixelKind,
    extract: fn(SlicePixels) -> Option<Array2<T>>,
) -> Result<Vec<Array2<T>>, VolumeError> {
    slices
        .into_iter()
        .map(|slice| {
            let found = slice.kind();
            extract(slice).ok_or(VolumeError::MixedPixelTypes { expected, found })
        })
        .collect()
}

fn stack_planes<T: Copy + Default>(planes: Vec<Array2<T>>) -> Result<Array3<T>, VolumeError> {
    let (rows, cols) = planes[0].dim();
    for plane in &planes {
        if plane.dim() != (rows, cols) {
            return Err(VolumeError::ShapeMismatch {
                expected: (rows, cols),
                found: plane.dim(),
            });
        }
    }

    let mut volume = Array3::from_elem((rows, cols, planes.len()), T::default());
    for (k, plane) in planes.iter().enumerate() {
        volume.slice_mut(s![.., .., k]).assign(plane);
    }
    Ok(volume)
}
