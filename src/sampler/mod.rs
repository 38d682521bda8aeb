//! Resampling of the source panorama along view directions.
//!
//! A direction is converted to spherical angles, the angles to fractional
//! source pixel coordinates, and the source is read there with bilinear
//! interpolation.

mod bilinear;
mod spherical;

use glam::Vec3;
use image::Rgb;

use crate::source::SourceImage;

pub use bilinear::sample_bilinear;
pub use spherical::{SphericalCoord, direction_to_spherical, spherical_to_source};

/// Samples the source panorama in the given view direction.
pub fn sample(source: &SourceImage, direction: Vec3) -> Rgb<u8> {
    let coord = direction_to_spherical(direction);
    let (u, v) = spherical_to_source(coord, source.width());
    sample_bilinear(source, u, v)
}
