//! Block averaging of pixels into character cells.
//!
//! Every cell covers a [`BLOCK_COLS`] x [`BLOCK_ROWS`] block of pixels. The
//! image is expected to have dimensions that are exact multiples of the block
//! size; [`scale_to_grid`](crate::imaging::scale::scale_to_grid) guarantees
//! this. Trailing pixels of an image that violates it are never read.

use crate::imaging::color::ColorSample;
use crate::rendering::canvas::Canvas;
use crate::rendering::sample::Sample;
use crate::{BLOCK_COLS, BLOCK_ROWS};
use image::RgbaImage;

/// Number of pixels averaged into one cell.
pub const BLOCK_PIXELS: usize = BLOCK_COLS * BLOCK_ROWS;

/// Running sums of the colour components of one block.
#[derive(Clone, Copy, Debug, Default)]
struct BlockSum {
    r: f64,
    g: f64,
    b: f64,
    value: f64,
    count: usize,
}

impl BlockSum {
    fn add(&mut self, sample: ColorSample) {
        self.r += sample.r;
        self.g += sample.g;
        self.b += sample.b;
        self.value += sample.value;
        self.count += 1;
    }

    fn to_sample(self) -> Sample {
        let n = self.count.max(1) as f64;
        Sample::new(
            quantize(self.value / n),
            [quantize(self.r / n), quantize(self.g / n), quantize(self.b / n)],
        )
    }
}

/// Scales a `0.0..=1.0` component to `0..=255`, rounding to nearest.
fn quantize(component: f64) -> u8 {
    (component * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

/// Averages the block for cell `(x, y)` into a [`Sample`].
///
/// The block must lie entirely inside the image.
pub fn reduce_block(image: &RgbaImage, x: usize, y: usize) -> Sample {
    let (left, top) = ((x * BLOCK_COLS) as u32, (y * BLOCK_ROWS) as u32);
    let mut sum = BlockSum::default();
    for py in top..top + BLOCK_ROWS as u32 {
        for px in left..left + BLOCK_COLS as u32 {
            sum.add(ColorSample::from_pixel(*image.get_pixel(px, py)));
        }
    }
    debug_assert_eq!(sum.count, BLOCK_PIXELS);
    sum.to_sample()
}

/// Reduces a whole image to a canvas of `width / BLOCK_COLS` by
/// `height / BLOCK_ROWS` cells.
pub fn reduce(image: &RgbaImage, background: [u8; 3]) -> Canvas {
    let cols = image.width() as usize / BLOCK_COLS;
    let rows = image.height() as usize / BLOCK_ROWS;
    Canvas::from_fn(cols, rows, background, |x, y| reduce_block(image, x, y))
}
