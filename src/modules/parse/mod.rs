//! Parsing module for control-point data
//!
//! Now supported format:
//! - JSON:
//!     in the form of `[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}, {"x": 2.0, "y": 0.0}]`.
//!     See the `json` module for more detailed information on the JSON format.

pub mod json;
