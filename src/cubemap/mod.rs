//! Cubemap data structures and face rendering.
//!
//! Rendering maps every destination pixel through the direction mapper and
//! the sampler; pixels are independent, so the per-face loop runs as a
//! parallel map.

mod map;
mod render;

pub use map::{Cubemap, FaceImage};
pub use render::{render_cubemap, render_cubemap_with_progress, render_face};
