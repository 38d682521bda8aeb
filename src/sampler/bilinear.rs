//! Bilinear interpolation over the source texel grid.

use image::Rgb;

use crate::source::SourceImage;

/// Samples the source at a fractional coordinate by blending the four
/// surrounding texels.
///
/// Corner fetches go through [`SourceImage::texel`], so columns wrap around
/// the azimuth seam and rows clamp at the poles. Weights sum to one; the
/// final clamp only guards against floating-point overshoot at channel
/// boundary values.
pub fn sample_bilinear(source: &SourceImage, u: f32, v: f32) -> Rgb<u8> {
    let u0 = u.floor();
    let v0 = v.floor();
    let mu = u - u0;
    let nu = v - v0;

    let (u0, v0) = (u0 as i64, v0 as i64);
    let (u1, v1) = (u0 + 1, v0 + 1);

    let a = source.texel(u0, v0).0;
    let b = source.texel(u1, v0).0;
    let c = source.texel(u0, v1).0;
    let d = source.texel(u1, v1).0;

    let mut out = [0u8; 3];
    for ch in 0..3 {
        let blended = a[ch] as f32 * (1.0 - mu) * (1.0 - nu)
            + b[ch] as f32 * mu * (1.0 - nu)
            + c[ch] as f32 * (1.0 - mu) * nu
            + d[ch] as f32 * mu * nu;
        out[ch] = blended.round().clamp(0.0, 255.0) as u8;
    }
    Rgb(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn gradient_source(width: u32, height: u32) -> SourceImage {
        SourceImage::new(RgbImage::from_fn(width, height, |x, y| {
            Rgb([x as u8, y as u8, 0])
        }))
    }

    #[test]
    fn test_integer_coordinates_return_exact_pixel() {
        let src = gradient_source(8, 4);
        for (u, v) in [(0.0, 0.0), (3.0, 2.0), (7.0, 3.0)] {
            assert_eq!(
                sample_bilinear(&src, u, v),
                Rgb([u as u8, v as u8, 0]),
                "exact fetch at ({}, {})",
                u,
                v
            );
        }
    }

    #[test]
    fn test_horizontal_midpoint_blend() {
        let mut img = RgbImage::from_pixel(4, 2, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([100, 0, 0]));
        let src = SourceImage::new(img);

        // Halfway between (0,0)=0 and (1,0)=100.
        assert_eq!(sample_bilinear(&src, 0.5, 0.0), Rgb([50, 0, 0]));
    }

    #[test]
    fn test_four_corner_blend() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        img.put_pixel(1, 1, Rgb([80, 0, 0]));
        img.put_pixel(2, 1, Rgb([80, 0, 0]));
        img.put_pixel(1, 2, Rgb([80, 0, 0]));
        img.put_pixel(2, 2, Rgb([80, 0, 0]));
        let src = SourceImage::new(img);

        // All four corners equal, so every interior fraction returns them.
        assert_eq!(sample_bilinear(&src, 1.25, 1.75), Rgb([80, 0, 0]));
    }

    #[test]
    fn test_wraps_across_column_seam() {
        let src = gradient_source(8, 4);

        // Just left of column 0 and just left of column 8 blend the same
        // pair (7, 0) with the same weights.
        assert_eq!(sample_bilinear(&src, -0.5, 1.0), sample_bilinear(&src, 7.5, 1.0));
    }

    #[test]
    fn test_clamps_rows_beyond_poles() {
        let src = gradient_source(8, 4);

        // Above the top row both corner rows clamp to row 0.
        assert_eq!(sample_bilinear(&src, 2.0, -0.5), sample_bilinear(&src, 2.0, 0.0));
        // Below the bottom row both corner rows clamp to row 3.
        assert_eq!(sample_bilinear(&src, 2.0, 3.5), sample_bilinear(&src, 2.0, 3.0));
    }

    #[test]
    fn test_rounds_to_nearest() {
        let mut img = RgbImage::from_pixel(4, 2, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([10, 0, 0]));
        let src = SourceImage::new(img);

        // 0.25 of the way from 0 to 10 is 2.5, which rounds up.
        assert_eq!(sample_bilinear(&src, 0.25, 0.0), Rgb([3, 0, 0]));
    }
}
