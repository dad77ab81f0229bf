// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::curve::Curve;
pub use data::point::Point;
pub use data::point_buffer::PointBuffer;
pub use error::{TessError, TessResult};
