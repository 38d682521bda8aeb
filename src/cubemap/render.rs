//! Face rendering by inverse texture mapping.

use image::{Rgb, RgbImage};
use rayon::prelude::*;

use super::{Cubemap, FaceImage};
use crate::geometry::{Face, face_pixel_to_direction};
use crate::sampler::sample;
use crate::source::SourceImage;

/// Renders a single cube map face from the source panorama.
///
/// Every destination pixel is mapped to its view direction and resampled
/// from the source. Pixels are processed in parallel; the source is shared
/// read-only across workers.
///
/// # Arguments
/// * `source` - The equirectangular source image
/// * `face` - The cube face to render
/// * `edge` - Face edge length in pixels (must be positive)
pub fn render_face(source: &SourceImage, face: Face, edge: u32) -> FaceImage {
    let mut data = vec![0u8; edge as usize * edge as usize * 3];

    data.par_chunks_exact_mut(3).enumerate().for_each(|(i, texel)| {
        let col = (i as u32) % edge;
        let row = (i as u32) / edge;

        let dir = face_pixel_to_direction(col, row, face, edge);
        let Rgb(rgb) = sample(source, dir);
        texel.copy_from_slice(&rgb);
    });

    let image =
        RgbImage::from_raw(edge, edge, data).expect("face buffer length matches edge * edge * 3");
    FaceImage { id: face, image }
}

/// Renders all six cube map faces in face-index order.
pub fn render_cubemap(source: &SourceImage, edge: u32) -> Cubemap {
    render_cubemap_with_progress(source, edge, |_, _, _| {})
}

/// Renders all six faces, invoking `on_face` after each completes.
///
/// The callback receives the finished face, its index, and the total face
/// count, letting a driver report per-face progress.
pub fn render_cubemap_with_progress<F>(source: &SourceImage, edge: u32, mut on_face: F) -> Cubemap
where
    F: FnMut(Face, usize, usize),
{
    let faces = Face::all().map(|face| {
        let rendered = render_face(source, face, edge);
        on_face(face, face.index(), 6);
        rendered
    });

    Cubemap { edge, faces }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_source(width: u32, color: Rgb<u8>) -> SourceImage {
        SourceImage::new(RgbImage::from_pixel(width, width / 2, color))
    }

    #[test]
    fn test_solid_source_renders_solid_faces() {
        // A constant field admits no interpolation artifacts: every face
        // pixel must come out exactly the source color.
        let src = solid_source(2048, Rgb([255, 0, 0]));
        let map = render_cubemap(&src, 512);

        assert_eq!(map.edge, 512);
        for face in &map.faces {
            assert_eq!(face.edge(), 512);
            assert!(
                face.image.pixels().all(|&p| p == Rgb([255, 0, 0])),
                "face {:?} not solid red",
                face.id
            );
        }
    }

    #[test]
    fn test_single_white_pixel_lands_on_back_face_center() {
        // A white pixel at source (0, 512) sits at azimuth ±180 degrees,
        // elevation 0: the central column of the back face. The wrapped
        // azimuth seam must reproduce it exactly, and no other face samples
        // anywhere near source column 0 at mid-latitude.
        let mut img = RgbImage::from_pixel(2048, 1024, Rgb([0, 0, 0]));
        img.put_pixel(0, 512, Rgb([255, 255, 255]));
        let src = SourceImage::new(img);

        let map = render_cubemap(&src, 512);

        let back = &map.face(Face::Back).image;
        assert_eq!(back.get_pixel(256, 256), &Rgb([255, 255, 255]));
        // Corners of the back face look away from the seam pixel.
        assert_eq!(back.get_pixel(0, 0), &Rgb([0, 0, 0]));

        for face in [Face::Left, Face::Front, Face::Right, Face::Top, Face::Bottom] {
            let image = &map.face(face).image;
            assert!(
                image.pixels().all(|&p| p == Rgb([0, 0, 0])),
                "face {:?} unexpectedly sampled the seam pixel",
                face
            );
        }
    }

    #[test]
    fn test_adjacent_side_faces_agree_along_shared_edges() {
        // With a smooth source that varies only by latitude, the last column
        // of each side face and the first column of the next must sample
        // near-identical colors.
        let width = 1024u32;
        let img = RgbImage::from_fn(width, width / 2, |_, y| {
            let v = (y * 255 / (width / 2 - 1)) as u8;
            Rgb([v, v, v])
        });
        let src = SourceImage::new(img);

        let edge = width / 4;
        let seams = [
            (Face::Front, Face::Right),
            (Face::Right, Face::Back),
            (Face::Back, Face::Left),
            (Face::Left, Face::Front),
        ];

        for (a, b) in seams {
            let first = render_face(&src, a, edge);
            let second = render_face(&src, b, edge);
            for row in 0..edge {
                let pa = first.image.get_pixel(edge - 1, row);
                let pb = second.image.get_pixel(0, row);
                for ch in 0..3 {
                    let diff = (pa.0[ch] as i16 - pb.0[ch] as i16).abs();
                    assert!(
                        diff <= 4,
                        "seam {:?}/{:?} row {}: {:?} vs {:?}",
                        a,
                        b,
                        row,
                        pa,
                        pb
                    );
                }
            }
        }
    }

    #[test]
    fn test_render_cubemap_face_order_and_progress() {
        let src = solid_source(64, Rgb([10, 20, 30]));

        let mut seen = Vec::new();
        let map = render_cubemap_with_progress(&src, 16, |face, i, total| {
            seen.push((face, i, total));
        });

        assert_eq!(seen.len(), 6);
        for (i, (face, index, total)) in seen.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(*total, 6);
            assert_eq!(face.index(), i);
        }
        for (i, face) in map.faces.iter().enumerate() {
            assert_eq!(face.id.index(), i);
            assert_eq!(face.edge(), 16);
        }
    }
}
