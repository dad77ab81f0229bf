//! Core data structures: points, point buffers and curve descriptions.

pub mod curve;
pub mod macros;
pub mod point;
pub mod point_buffer;

pub use curve::Curve;
pub use point::Point;
pub use point_buffer::PointBuffer;
