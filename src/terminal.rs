//! Terminal size detection and the grid size policy.
//!
//! The reported terminal size is not used as-is: the width is capped at
//! [`MAX_WIDTH`] and any height outside [`HEIGHT_RANGE`] is replaced by
//! [`FALLBACK_HEIGHT`]. This bounds how much output a single frame produces on
//! very large or very small terminals.

use crate::GridSize;
use crate::error::{Error, Result};
use crossterm::tty::IsTty;
use log::debug;
use std::ops::RangeInclusive;

/// Size assumed when standard output is not a terminal.
pub const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Widest grid ever rendered.
pub const MAX_WIDTH: usize = 120;

/// Heights kept as reported.
pub const HEIGHT_RANGE: RangeInclusive<usize> = 70..=120;

/// Height used when the reported height is outside [`HEIGHT_RANGE`].
pub const FALLBACK_HEIGHT: usize = 100;

/// Applies the size policy to a reported terminal size.
///
/// ```rust
/// use blockart::GridSize;
/// use blockart::terminal::clamp;
///
/// assert_eq!(clamp(250, 90), GridSize::new(120, 90));
/// assert_eq!(clamp(80, 24), GridSize::new(80, 100));
/// ```
pub fn clamp(width: usize, height: usize) -> GridSize {
    let cols = if width > MAX_WIDTH {
        debug!("terminal width {width} exceeds {MAX_WIDTH}, using {MAX_WIDTH}");
        MAX_WIDTH
    } else {
        width
    };
    let rows = if HEIGHT_RANGE.contains(&height) {
        height
    } else {
        debug!(
            "terminal height {height} outside {}..={}, using {FALLBACK_HEIGHT}",
            HEIGHT_RANGE.start(),
            HEIGHT_RANGE.end()
        );
        FALLBACK_HEIGHT
    };
    GridSize::new(cols, rows)
}

/// Queries the size of the terminal attached to standard output.
///
/// When standard output is not a terminal (e.g. redirected to a file),
/// [`DEFAULT_TERMINAL_SIZE`] is used. Any other query failure is an error.
pub fn query_size() -> Result<(u16, u16)> {
    if !std::io::stdout().is_tty() {
        debug!("stdout is not a terminal, assuming {DEFAULT_TERMINAL_SIZE:?}");
        return Ok(DEFAULT_TERMINAL_SIZE);
    }
    crossterm::terminal::size().map_err(Error::TerminalSize)
}

/// Queries the terminal and applies [`clamp`] to the result.
pub fn query_grid_size() -> Result<GridSize> {
    let (width, height) = query_size()?;
    debug!("terminal reports {width}x{height}");
    Ok(clamp(width as usize, height as usize))
}
