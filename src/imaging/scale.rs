//! Resizing of source images to the character grid.

use crate::GridSize;
use crate::error::{Error, Result};
use image::DynamicImage;
use image::imageops::FilterType;
use log::debug;

/// Resizes `image` to exactly `grid.pixel_dimensions()` with a Lanczos filter,
/// ignoring the source aspect ratio.
///
/// The result always divides evenly into blocks. Fails with
/// [`Error::GridTooLarge`] if those dimensions do not fit in `u32`.
pub fn scale_to_grid(image: &DynamicImage, grid: GridSize) -> Result<DynamicImage> {
    let (width, height) = grid.pixel_dimensions().ok_or(Error::GridTooLarge(grid))?;
    debug!(
        "scaling {}x{} image to {width}x{height} for a {}x{} grid",
        image.width(),
        image.height(),
        grid.cols,
        grid.rows
    );
    Ok(image.resize_exact(width, height, FilterType::Lanczos3))
}
