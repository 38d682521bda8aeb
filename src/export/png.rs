//! PNG export functionality for cube map faces.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use thiserror::Error;

use crate::cubemap::{Cubemap, FaceImage};

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports a single cube map face as an 8-bit RGB PNG.
///
/// # Arguments
/// * `face` - The rendered face to export
/// * `path` - Output file path
/// * `options` - PNG compression settings
pub fn export_face_png(
    face: &FaceImage,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    encoder.write_image(
        face.image.as_raw(),
        face.edge(),
        face.edge(),
        image::ExtendedColorType::Rgb8,
    )?;

    Ok(())
}

/// Exports all six faces of a cube map as individual PNG files.
///
/// Files are named using the pattern: `{base_name}_{face_name}.png`
/// For example: `pano_back.png`, `pano_top.png`, etc.
///
/// # Arguments
/// * `cubemap` - The rendered cube map
/// * `output_dir` - Directory to save files to (created if missing)
/// * `base_name` - Base name for output files
/// * `options` - PNG compression settings
///
/// # Returns
/// `Ok(())` on success, or the first error encountered
pub fn export_cubemap_png(
    cubemap: &Cubemap,
    output_dir: &Path,
    base_name: &str,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    std::fs::create_dir_all(output_dir)?;

    for face in &cubemap.faces {
        let filename = format!("{}_{}.png", base_name, face.id.short_name());
        let path = output_dir.join(filename);
        export_face_png(face, &path, options)?;
    }

    Ok(())
}
