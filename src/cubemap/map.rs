//! Cubemap and FaceImage data structures.

use image::RgbImage;

use crate::geometry::Face;

/// A fully rendered cube map: six square faces sharing one edge length.
#[derive(Debug, Clone)]
pub struct Cubemap {
    /// Edge length of every face in pixels.
    pub edge: u32,
    /// The six faces in face-index order.
    pub faces: [FaceImage; 6],
}

impl Cubemap {
    /// Returns a reference to a specific face.
    pub fn face(&self, id: Face) -> &FaceImage {
        &self.faces[id.index()]
    }
}

/// A single rendered cube map face.
#[derive(Debug, Clone)]
pub struct FaceImage {
    /// Which face of the cube this represents.
    pub id: Face,
    /// The rendered square RGB pixel buffer.
    pub image: RgbImage,
}

impl FaceImage {
    /// Face edge length in pixels.
    pub fn edge(&self) -> u32 {
        self.image.width()
    }
}
