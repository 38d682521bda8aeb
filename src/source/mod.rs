//! Source panorama image access and loading.
//!
//! Wraps the decoded equirectangular image behind a texel accessor that is
//! cyclic in longitude (columns wrap) and bounded in latitude (rows clamp).

mod load;

use image::{Rgb, RgbImage};

pub use load::{SourceError, load_equirect};

/// An immutable, decoded equirectangular source image.
///
/// The converter assumes a 2:1 aspect ratio (`height == width / 2`); the
/// loader enforces it by resizing. Construction from an arbitrary buffer does
/// not validate the ratio.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: RgbImage,
}

impl SourceImage {
    /// Wraps a decoded RGB buffer.
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// Source width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Source height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Fetches a texel with longitude wraparound and latitude clamping.
    ///
    /// Columns are reduced modulo the width (the panorama is cyclic at the
    /// ±180° seam); rows are clamped to `[0, height - 1]` (the poles do not
    /// wrap to the opposite hemisphere).
    pub fn texel(&self, col: i64, row: i64) -> Rgb<u8> {
        let col = col.rem_euclid(self.image.width() as i64);
        let row = row.clamp(0, self.image.height() as i64 - 1);
        *self.image.get_pixel(col as u32, row as u32)
    }
}
