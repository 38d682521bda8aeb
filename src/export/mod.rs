//! Export module for persisting rendered cube map faces.
//!
//! Faces are written as 8-bit RGB PNG files, one file per face, named with
//! the face's short name.

mod png;

pub use png::{PngExportError, PngExportOptions, export_cubemap_png, export_face_png};
