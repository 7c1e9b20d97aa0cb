//! Flattening of transparency onto the background colour.

use image::{DynamicImage, Rgba, RgbaImage, imageops};

/// Produces the RGBA buffer that block reduction reads.
///
/// With a fully opaque `background`, the image is alpha-composited over a
/// buffer filled with it, so the result is opaque everywhere. Otherwise the
/// image is only converted to RGBA (no copy if it already is) without
/// blending.
pub fn flatten(image: DynamicImage, background: Rgba<u8>) -> RgbaImage {
    if background[3] == u8::MAX {
        let mut flat = RgbaImage::from_pixel(image.width(), image.height(), background);
        imageops::overlay(&mut flat, &image, 0, 0);
        return flat;
    }
    match image {
        DynamicImage::ImageRgba8(buffer) => buffer,
        other => other.into_rgba8(),
    }
}
