//! Conversion from view directions to spherical angles and source coordinates.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// Spherical angle pair derived from a view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoord {
    /// Azimuth in `[-pi, pi]`.
    pub theta: f32,
    /// Elevation in `[-pi/2, pi/2]`.
    pub phi: f32,
}

/// Extracts azimuth and elevation from a view direction.
///
/// The direction need not be normalized; `atan2` against `hypot(x, y)` only
/// consumes component ratios.
pub fn direction_to_spherical(dir: Vec3) -> SphericalCoord {
    let theta = dir.y.atan2(dir.x);
    let r = dir.x.hypot(dir.y);
    let phi = dir.z.atan2(r);
    SphericalCoord { theta, phi }
}

/// Maps spherical angles to fractional source pixel coordinates.
///
/// Both axes scale by the source WIDTH. The loader enforces the 2:1 aspect
/// ratio, so `width / 2` equals the height and the vertical mapping spans
/// exactly `[0, height]`; if that invariant were relaxed the vertical
/// mapping would silently distort.
///
/// `u` covers `[0, width]` (wrapped modulo the width at sample time) and `v`
/// covers `[0, width/2]` (clamped to the last row at sample time).
pub fn spherical_to_source(coord: SphericalCoord, width: u32) -> (f32, f32) {
    let w = width as f32;
    let u = 0.5 * w * (coord.theta + PI) / PI;
    let v = 0.5 * w * (FRAC_PI_2 - coord.phi) / PI;
    (u, v)
}
