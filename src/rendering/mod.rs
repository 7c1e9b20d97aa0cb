//! Character-grid side of the pipeline.
//!
//! **Sub-modules:**
//!
//! *   [`display`](crate::rendering::display): Defines [`Display`](display::Display), a generic 2D buffer.
//! *   [`sample`](crate::rendering::sample): Defines [`Sample`](sample::Sample), the reduced colour of one cell.
//! *   [`canvas`](crate::rendering::canvas): Defines [`Canvas`](canvas::Canvas), the grid of samples plus its background.
//! *   [`glyph`](crate::rendering::glyph): Maps a sample to an escape-coded glyph.
//! *   [`renderer`](crate::rendering::renderer): Defines [`Renderer`](renderer::Renderer), which renders rows in parallel batches and prints the frame.
//!
//! **Rendering Process:**
//!
//! 1.  Build a `Canvas` (see [`build_canvas`](crate::build_canvas)).
//! 2.  Create a `Renderer` with the desired number of workers and a sink.
//! 3.  Call `Renderer::print_frame()` to clear the screen and write the frame.

pub mod canvas;
pub mod display;
pub mod glyph;
pub mod renderer;
pub mod sample;
