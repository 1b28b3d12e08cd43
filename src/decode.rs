use anyhow::{bail, Context, Result};
use dicom::object::open_file;
use dicom::pixeldata::PixelDecoder;
use dicom_pixeldata::PixelRepresentation;
use ndarray::{s, Array, Array2, Ix4};
use std::path::Path;

use crate::volume::SlicePixels;

/// Decoding of one slice file into a raw 2-D pixel plane. The converter only
/// depends on this trait so the pipeline can be exercised without real DICOM
/// files.
pub trait SliceDecoder {
    fn decode_slice(&self, path: &Path) -> Result<SlicePixels>;
}

/// Production decoder backed by dicom-pixeldata. Everything in the header
/// besides the pixel description is ignored.
pub struct DicomSliceDecoder;

impl SliceDecoder for DicomSliceDecoder {
    fn decode_slice(&self, path: &Path) -> Result<SlicePixels> {
        let obj = open_file(path).context("Falha ao abrir arquivo DICOM")?;
        let decoded = obj
            .decode_pixel_data()
            .with_context(|| format!("Failed to decode pixel data of {:?}", path))?;

        let bits_allocated = decoded.bits_allocated();
        let pixel_representation = decoded.pixel_representation();

        // Bits Allocated picks the storage width, Pixel Representation the
        // signedness; the plane keeps the file's native type.
        let pixels = if pixel_representation == PixelRepresentation::Unsigned {
            if bits_allocated <= 8 {
                SlicePixels::U8(first_plane(
                    decoded.to_ndarray::<u8>().context("Failed to convert to u8 ndarray")?,
                )?)
            } else if bits_allocated <= 16 {
                SlicePixels::U16(first_plane(
                    decoded.to_ndarray::<u16>().context("Failed to convert to u16 ndarray")?,
                )?)
            } else {
                SlicePixels::U32(first_plane(
                    decoded.to_ndarray::<u32>().context("Failed to convert to u32 ndarray")?,
                )?)
            }
        } else {
            if bits_allocated <= 8 {
                SlicePixels::I8(first_plane(
                    decoded.to_ndarray::<i8>().context("Failed to convert to i8 ndarray")?,
                )?)
            } else if bits_allocated <= 16 {
                SlicePixels::I16(first_plane(
                    decoded.to_ndarray::<i16>().context("Failed to convert to i16 ndarray")?,
                )?)
            } else {
                SlicePixels::I32(first_plane(
                    decoded.to_ndarray::<i32>().context("Failed to convert to i32 ndarray")?,
                )?)
            }
        };

        Ok(pixels)
    }
}

fn first_plane<T>(frames: Array<T, Ix4>) -> Result<Array2<T>> {
    // Decoded pixel data is laid out as [frames, rows, cols, samples]; the
    // slice plane is frame 0 of the first sample.
    if frames.ndim() != 4 {
        bail!("unexpected pixel array layout: {:?}", frames.shape());
    }
    Ok(frames.slice_move(s![0, .., .., 0]))
}
