//! Frame rendering and output.
//!
//! [`Renderer`] turns a [`Canvas`] into one block of text, one line per row,
//! and writes it to its sink. Rows are rendered in batches of at most
//! `workers` rows on a dedicated `rayon` pool: every row of a batch is
//! rendered concurrently, the batch is joined, and only then is the next
//! batch dispatched. Each finished row is placed into a buffer indexed by row
//! number, so the output is top-to-bottom whatever order the rows finish in.

use crate::error::Result;
use crate::rendering::canvas::Canvas;
use crate::rendering::glyph::render_cell;
use crossterm::style::ResetColor;
use log::{debug, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::io::{self, Stdout, Write};

/// Moves the cursor home and clears the screen.
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Upper bound on escape-coded bytes per cell, used to presize row strings.
const CELL_CAPACITY: usize = 40;

/// Renders one row: every cell left to right, then a style reset and a newline.
pub fn render_row(canvas: &Canvas, y: usize) -> String {
    let background = canvas.background();
    let row = canvas.row(y);
    let mut line = String::with_capacity(row.len() * CELL_CAPACITY + 8);
    for sample in row {
        line.push_str(&render_cell(*sample, background));
    }
    line.push_str(&ResetColor.to_string());
    line.push('\n');
    line
}

/// Renders canvases with bounded row parallelism and writes them to a sink.
pub struct Renderer<W: Write> {
    workers: usize,
    pool: ThreadPool,
    sink: W,
}

impl Renderer<Stdout> {
    /// Creates a renderer writing to standard output.
    pub fn new_with_stdout(workers: usize) -> Result<Self> {
        Self::new_with_sink(workers, io::stdout())
    }
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer with a custom output sink.
    ///
    /// At most `workers` rows are rendered at once; `0` is treated as `1`.
    pub fn new_with_sink(workers: usize, sink: W) -> Result<Self> {
        let workers = workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("blockart-row-{idx}"))
            .build()?;
        debug!("row renderer using {workers} workers");
        Ok(Self {
            workers,
            pool,
            sink,
        })
    }

    /// Maximum number of rows rendered concurrently.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Renders the whole canvas into one ordered block of text.
    pub fn render_frame(&self, canvas: &Canvas) -> String {
        let height = canvas.height();
        let mut lines = vec![String::new(); height];

        let mut next_row = 0;
        while next_row < height {
            let batch = next_row..(next_row + self.workers).min(height);
            trace!("dispatching rows {batch:?}");
            let rendered: Vec<(usize, String)> = self.pool.install(|| {
                batch
                    .clone()
                    .into_par_iter()
                    .map(|y| (y, render_row(canvas, y)))
                    .collect()
            });
            debug_assert_eq!(rendered.len(), batch.len());
            for (y, line) in rendered {
                lines[y] = line;
            }
            next_row = batch.end;
        }

        lines.concat()
    }

    /// Clears the screen and prints the fully rendered frame in a single write.
    ///
    /// The frame is rendered before anything is written, so the sink never
    /// sees a partial frame.
    pub fn print_frame(&mut self, canvas: &Canvas) -> Result<()> {
        let frame = self.render_frame(canvas);
        self.sink.write_all(CLEAR_SCREEN.as_bytes())?;
        self.sink.write_all(frame.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Consumes the renderer, returning its sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}
