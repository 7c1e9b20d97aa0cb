//! The character-grid model of an image.

use crate::rendering::display::Display;
use crate::rendering::sample::Sample;

/// A grid of [`Sample`]s plus the background colour shared by every cell.
///
/// The canvas owns its samples and its background. It is built once with its
/// final dimensions, every cell filled at construction, and is read-only from
/// then on.
///
/// # Example
///
/// ```rust
/// use blockart::rendering::canvas::Canvas;
/// use blockart::rendering::sample::Sample;
///
/// let canvas = Canvas::from_fn(3, 2, [0, 0, 0], |x, _| Sample::new(x as u8, [0, 0, 0]));
/// assert_eq!((canvas.width(), canvas.height()), (3, 2));
/// assert_eq!(canvas.row(1)[2].brightness(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    grid: Display<Sample>,
    background: [u8; 3],
}

impl Canvas {
    /// Creates a canvas of `width` columns and `height` rows, computing each
    /// cell from its `(x, y)` position.
    pub fn from_fn(
        width: usize,
        height: usize,
        background: [u8; 3],
        f: impl FnMut(usize, usize) -> Sample,
    ) -> Self {
        Self {
            grid: Display::from_fn(width, height, f),
            background,
        }
    }

    /// Number of character columns.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of character rows.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The background colour emitted behind every glyph.
    pub fn background(&self) -> [u8; 3] {
        self.background
    }

    /// The sample at column `x`, row `y`, if in bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Sample> {
        self.grid.get(x, y).copied()
    }

    /// The samples of row `y`, left to right.
    pub fn row(&self, y: usize) -> &[Sample] {
        self.grid.row(y)
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Sample]> {
        self.grid.rows()
    }
}
