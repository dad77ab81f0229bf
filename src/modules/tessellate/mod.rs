//! Tessellation: sampling parametric curves into point sequences
//!
//! Every function here materializes its output eagerly into a `Vec<Point>`
//! so the consumer (a rasterizer) has random access and a known length for
//! vertex submission. Output sequences always start and end exactly on the
//! curve's defined endpoints; intermediate points come from direct
//! evaluation of the closed-form curve formula, never from incremental
//! stepping that would accumulate error.

pub mod bezier;
pub mod circle;
pub mod spline;
