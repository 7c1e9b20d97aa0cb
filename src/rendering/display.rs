//! Row-major 2D buffer backing the character grid.
//!
//! A [`Display`] has a fixed `width` and `height` chosen at construction and
//! every cell is produced up front, so a display can never be observed in a
//! partially built state. Coordinates are `(x, y)` with `y = 0` the top row.

/// A fixed-size grid of cells stored row by row.
///
/// # Example
///
/// ```rust
/// use blockart::rendering::display::Display;
///
/// let display = Display::from_fn(3, 2, |x, y| x + 10 * y);
/// assert_eq!(display.width(), 3);
/// assert_eq!(display.height(), 2);
/// assert_eq!(display.get(2, 1), Some(&12));
/// assert_eq!(display.row(1), &[10, 11, 12]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Display<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Display<T> {
    /// Creates a display by computing every cell from its `(x, y)` coordinate.
    ///
    /// Cells are produced in row order, left to right.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Gets the height of the display (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the width of the display (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets a reference to the cell at the given (x, y) coordinates.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(self.get_index(x, y))
    }

    /// Returns the cells of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width]
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |y| self.row(y))
    }
}
