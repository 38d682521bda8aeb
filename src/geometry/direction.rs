//! Mapping from face pixel coordinates to 3D view directions.

use glam::Vec3;

use super::face::Face;

/// Converts a destination pixel on a cube face to its 3D view direction.
///
/// The pixel position is normalized to `a = 2*col/edge`, `b = 2*row/edge`
/// (both in `[0, 2)`) and pushed through the face's affine formula. The
/// returned vector is not unit length; downstream angle extraction only
/// depends on component ratios.
///
/// # Arguments
/// * `col` - Destination column in `[0, edge)`
/// * `row` - Destination row in `[0, edge)`
/// * `face` - The cube face being rendered
/// * `edge` - Face edge length in pixels (must be positive)
///
/// # Example
/// ```
/// use glam::Vec3;
/// use cubegen::geometry::{Face, face_pixel_to_direction};
///
/// let dir = face_pixel_to_direction(256, 256, Face::Front, 512);
/// assert_eq!(dir, Vec3::new(1.0, 0.0, 0.0));
/// ```
pub fn face_pixel_to_direction(col: u32, row: u32, face: Face, edge: u32) -> Vec3 {
    let a = 2.0 * col as f32 / edge as f32;
    let b = 2.0 * row as f32 / edge as f32;

    match face {
        Face::Back => Vec3::new(-1.0, 1.0 - a, 1.0 - b),
        Face::Left => Vec3::new(a - 1.0, -1.0, 1.0 - b),
        Face::Front => Vec3::new(1.0, a - 1.0, 1.0 - b),
        Face::Right => Vec3::new(1.0 - a, 1.0, 1.0 - b),
        Face::Top => Vec3::new(b - 1.0, a - 1.0, 1.0),
        Face::Bottom => Vec3::new(1.0 - b, a - 1.0, -1.0),
    }
}
