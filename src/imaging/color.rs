//! Per-pixel colour sampling.
//!
//! Channels are normalized to `0.0..=1.0` in gamma-encoded sRGB, which is
//! perceptually spaced (unlike linear light), and the HSV value is the
//! largest of the three channels.

use image::Rgba;

/// The normalized colour components of a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ColorSample {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// HSV value (brightness).
    pub value: f64,
}

impl ColorSample {
    /// Samples a pixel. Fully transparent pixels sample as black.
    pub fn from_pixel(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            return Self::default();
        }
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;
        Self {
            r,
            g,
            b,
            value: r.max(g).max(b),
        }
    }
}
