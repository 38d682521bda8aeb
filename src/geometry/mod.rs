//! Cube-face geometry module.
//!
//! Provides the face identifiers and the per-face mapping from destination
//! pixel coordinates to 3D view directions.

mod direction;
mod face;

pub use direction::face_pixel_to_direction;
pub use face::Face;
