//! Pixel-side stages of the pipeline.
//!
//! *   [`scale`](crate::imaging::scale): resizes the source to the grid's pixel size.
//! *   [`composite`](crate::imaging::composite): flattens transparency onto the background.
//! *   [`reduce`](crate::imaging::reduce): averages pixel blocks into [`Sample`](crate::rendering::sample::Sample)s.
//! *   [`color`](crate::imaging::color): per-pixel colour and brightness sampling.

pub mod color;
pub mod composite;
pub mod reduce;
pub mod scale;
