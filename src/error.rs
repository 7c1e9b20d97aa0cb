//! Error type shared by the whole pipeline.

use std::io;
use std::path::PathBuf;

/// Everything that can abort a render. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The image file could not be opened or read.
    #[error("cannot open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// The image file was read but could not be decoded.
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The grid is too large to be expressed in image pixels.
    #[error("grid of {}x{} cells is too large to scale to", .0.cols, .0.rows)]
    GridTooLarge(crate::GridSize),

    /// Querying the terminal size failed while attached to a terminal.
    #[error("cannot query terminal size: {0}")]
    TerminalSize(#[source] io::Error),

    /// The row worker pool could not be started.
    #[error(transparent)]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// Writing the frame failed.
    #[error(transparent)]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
