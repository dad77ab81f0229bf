//! Algorithm modules operating on the core data structures.

pub mod export;
pub mod parse;
pub mod tessellate;
