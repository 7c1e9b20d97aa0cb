//! Render raster images as truecolor block-character art in the terminal.
//!
//! The pipeline is single-shot:
//!
//! 1.  [`load_image`] decodes the file, detecting the format from its content.
//! 2.  [`imaging::scale`] resizes it to the terminal's character grid, at
//!     [`BLOCK_COLS`] x [`BLOCK_ROWS`] pixels per cell.
//! 3.  [`imaging::composite`] flattens transparency onto the background.
//! 4.  [`imaging::reduce`] averages every block into a [`Sample`](rendering::sample::Sample),
//!     filling a [`Canvas`].
//! 5.  [`Renderer`] renders rows in parallel batches and prints the frame.
//!
//! # Example
//!
//! ```rust ,no_run
//! use blockart::{run, RenderOptions};
//!
//! run("picture.png", &RenderOptions::default()).unwrap();
//! ```

use image::{DynamicImage, ImageReader, Rgba};
use log::debug;
use std::path::Path;

pub mod error;
pub mod imaging;
pub mod rendering;
pub mod terminal;

pub use crate::error::{Error, Result};
use crate::imaging::composite::flatten;
use crate::imaging::reduce::reduce;
use crate::imaging::scale::scale_to_grid;
pub use crate::rendering::canvas::Canvas;
pub use crate::rendering::renderer::Renderer;

/// Pixel columns per character cell.
pub const BLOCK_COLS: usize = 4;
/// Pixel rows per character cell. Cells are roughly twice as tall as wide.
pub const BLOCK_ROWS: usize = 8;

/// Size of the character grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Pixel dimensions an image must have to fill this grid exactly, or
    /// `None` if they do not fit in `u32`.
    ///
    /// ```rust
    /// use blockart::GridSize;
    ///
    /// assert_eq!(GridSize::new(8, 8).pixel_dimensions(), Some((32, 64)));
    /// assert_eq!(GridSize::new(usize::MAX, 1).pixel_dimensions(), None);
    /// ```
    pub fn pixel_dimensions(&self) -> Option<(u32, u32)> {
        let width = self.cols.checked_mul(BLOCK_COLS)?;
        let height = self.rows.checked_mul(BLOCK_ROWS)?;
        Some((u32::try_from(width).ok()?, u32::try_from(height).ok()?))
    }

    fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }
}

/// Runtime settings for a render.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Colour under transparent pixels and behind every glyph.
    pub background: Rgba<u8>,
    /// Maximum number of rows rendered concurrently.
    pub workers: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Rgba([0, 0, 0, 255]),
            workers: std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl RenderOptions {
    pub fn with_background(self, background: Rgba<u8>) -> Self {
        Self { background, ..self }
    }

    pub fn with_workers(self, workers: usize) -> Self {
        Self { workers, ..self }
    }
}

/// Opens and decodes an image, detecting the format from the file content.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let open_error = |source| Error::Open {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(open_error)?
        .with_guessed_format()
        .map_err(open_error)?;
    let image = reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Scales, flattens and reduces `image` into a canvas of exactly `grid` cells.
///
/// Fails if the grid's pixel dimensions do not fit in `u32`.
pub fn build_canvas(image: &DynamicImage, grid: GridSize, background: Rgba<u8>) -> Result<Canvas> {
    let [r, g, b, _] = background.0;
    if grid.is_empty() {
        return Ok(Canvas::from_fn(grid.cols, grid.rows, [r, g, b], |_, _| {
            Default::default()
        }));
    }
    let scaled = scale_to_grid(image, grid)?;
    let flat = flatten(scaled, background);
    Ok(reduce(&flat, [r, g, b]))
}

/// Renders the image at `path` to standard output, sized to the terminal.
pub fn run(path: impl AsRef<Path>, options: &RenderOptions) -> Result<()> {
    let image = load_image(path)?;
    let grid = terminal::query_grid_size()?;
    let canvas = build_canvas(&image, grid, options.background)?;
    let mut renderer = Renderer::new_with_stdout(options.workers)?;
    renderer.print_frame(&canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::renderer::CLEAR_SCREEN;
    use image::RgbaImage;
    use std::io::Write;

    fn solid_red_png() -> tempfile::NamedTempFile {
        let image = RgbaImage::from_pixel(32, 64, Rgba([255, 0, 0, 255]));
        // no extension, so the format has to come from the content
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut bytes = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_solid_red_end_to_end() {
        let file = solid_red_png();
        let image = load_image(file.path()).unwrap();
        let options = RenderOptions::default().with_workers(3);

        let canvas = build_canvas(&image, GridSize::new(8, 8), options.background).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (8, 8));
        for row in canvas.rows() {
            for sample in row {
                assert_eq!(sample.rgb(), [255, 0, 0]);
                assert_eq!(sample.brightness(), 255);
            }
        }

        let mut renderer = Renderer::new_with_sink(options.workers, Vec::new()).unwrap();
        renderer.print_frame(&canvas).unwrap();
        let output = String::from_utf8(renderer.into_sink()).unwrap();
        let frame = output.strip_prefix(CLEAR_SCREEN).unwrap();

        let cell = "\x1b[48;2;0;0;0m\x1b[38;2;255;0;0m#";
        let line = format!("{}\x1b[0m", cell.repeat(8));
        let lines: Vec<&str> = frame.split_terminator('\n').collect();
        assert_eq!(lines, vec![line.as_str(); 8]);
    }

    #[test]
    fn test_canvas_matches_grid() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 30, Rgba([9, 9, 9, 255])));
        let canvas = build_canvas(&image, GridSize::new(7, 3), Rgba([0, 0, 0, 255])).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (7, 3));
    }

    #[test]
    fn test_transparent_image_takes_background() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));
        let canvas = build_canvas(&image, GridSize::new(2, 1), Rgba([0, 0, 255, 255])).unwrap();
        assert_eq!(canvas.background(), [0, 0, 255]);
        for row in canvas.rows() {
            for sample in row {
                assert_eq!(sample.rgb(), [0, 0, 255]);
                assert_eq!(sample.brightness(), 255);
            }
        }
    }

    #[test]
    fn test_empty_grid() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));
        let canvas = build_canvas(&image, GridSize::new(0, 100), Rgba([0, 0, 0, 255])).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (0, 100));
    }

    #[test]
    fn test_oversized_grid_is_error() {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));
        let grid = GridSize::new(usize::MAX / 2, 1);
        let err = build_canvas(&image, grid, Rgba([0, 0, 0, 255])).unwrap_err();
        assert!(matches!(err, Error::GridTooLarge(g) if g == grid), "{err}");

        let grid = GridSize::new(u32::MAX as usize / BLOCK_COLS + 1, 1);
        assert_eq!(grid.pixel_dimensions(), None);
        let grid = GridSize::new(u32::MAX as usize / BLOCK_COLS, 1);
        assert!(grid.pixel_dimensions().is_some());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png");
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, Error::Open { .. }), "{err}");
        // the message names the file and carries the io error unchanged
        let io = std::fs::File::open(&path).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("cannot open {}: {io}", path.display())
        );
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an image").unwrap();
        let err = load_image(file.path()).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "{err}");
    }
}
