//! Cube face identification and enumeration.

use serde::{Deserialize, Serialize};

/// Identifies one of the six cube map faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    /// -X face (azimuth ±180°)
    Back = 0,
    /// -Y face (azimuth -90°)
    Left = 1,
    /// +X face (azimuth 0°)
    Front = 2,
    /// +Y face (azimuth +90°)
    Right = 3,
    /// +Z face (north polar cap)
    Top = 4,
    /// -Z face (south polar cap)
    Bottom = 5,
}

impl Face {
    /// Returns all six cube faces in index order.
    pub const fn all() -> [Face; 6] {
        [
            Face::Back,
            Face::Left,
            Face::Front,
            Face::Right,
            Face::Top,
            Face::Bottom,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from an index (0-5).
    pub const fn from_index(index: usize) -> Option<Face> {
        match index {
            0 => Some(Face::Back),
            1 => Some(Face::Left),
            2 => Some(Face::Front),
            3 => Some(Face::Right),
            4 => Some(Face::Top),
            5 => Some(Face::Bottom),
            _ => None,
        }
    }

    /// Returns a short name for the face (e.g., "back", "top").
    ///
    /// Used as the filename suffix for exported face images.
    pub const fn short_name(self) -> &'static str {
        match self {
            Face::Back => "back",
            Face::Left => "left",
            Face::Front => "front",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }
}
