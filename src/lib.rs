//! Equirectangular panorama to cubemap converter.
//!
//! Converts a 2:1 equirectangular (spherical panorama) image into the six
//! square faces of a cube map using inverse texture mapping: every
//! destination pixel is projected back onto the sphere and resampled from
//! the source with bilinear interpolation.

pub mod cubemap;
pub mod export;
pub mod geometry;
pub mod sampler;
pub mod source;

pub use cubemap::{Cubemap, FaceImage, render_cubemap, render_cubemap_with_progress, render_face};
pub use export::{PngExportOptions, export_cubemap_png, export_face_png};
pub use geometry::{Face, face_pixel_to_direction};
pub use sampler::{SphericalCoord, sample};
pub use source::{SourceImage, load_equirect};
