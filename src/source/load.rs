//! Loading and canonical resizing of source panoramas.

use std::path::Path;

use image::imageops::{self, FilterType};
use thiserror::Error;

use super::SourceImage;

/// Errors that can occur while loading a source panorama.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid source width: {0} (must be a positive multiple of 4)")]
    InvalidWidth(u32),
}

/// Loads an equirectangular panorama and resizes it to `target_width x
/// target_width/2`.
///
/// The fixed 2:1 resize pins down the aspect-ratio assumption the sampler's
/// vertical mapping depends on. `target_width` must be a positive multiple
/// of 4 so the face edge (`width / 4`) divides evenly.
pub fn load_equirect(path: &Path, target_width: u32) -> Result<SourceImage, SourceError> {
    if target_width < 4 || target_width % 4 != 0 {
        return Err(SourceError::InvalidWidth(target_width));
    }
    let target_height = target_width / 2;

    let decoded = image::open(path)?.to_rgb8();
    let resized = if decoded.dimensions() == (target_width, target_height) {
        decoded
    } else {
        imageops::resize(&decoded, target_width, target_height, FilterType::Triangle)
    };

    Ok(SourceImage::new(resized))
}
