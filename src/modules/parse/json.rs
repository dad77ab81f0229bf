//! JSON (de)serialization of control-point buffers
//!
//! The JSON form of a [`PointBuffer`] is a flat array of objects with `x`
//! and `y` fields, e.g. `[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 2.0}]`.
//! Malformed input surfaces as [`TessError::ParseError`].
//!
//! # Example
//!
//! ```rust
//! use tessella_rs::modules::parse::json;
//! use tessella_rs::points;
//!
//! let buffer = json::point_buffer_from_json(r#"[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 2.0}]"#).unwrap();
//! assert_eq!(buffer, points![(0, 0), (1, 2)]);
//! ```

use crate::data::point_buffer::PointBuffer;
use crate::error::{TessError, TessResult};

/// Parse a point buffer from a JSON array of `{x, y}` objects
pub fn point_buffer_from_json(data: &str) -> TessResult<PointBuffer> {
    serde_json::from_str(data).map_err(|e| TessError::ParseError(e.to_string()))
}

/// Serialize a point buffer to a JSON array of `{x, y}` objects
pub fn point_buffer_to_json(buffer: &PointBuffer) -> TessResult<String> {
    serde_json::to_string(buffer).map_err(|e| TessError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points;

    #[test]
    fn test_json_round_trip() {
        let buffer = points![(0, 0), (1.5, -2.25), (3, 4)];
        let json = point_buffer_to_json(&buffer).unwrap();
        let parsed = point_buffer_from_json(&json).unwrap();
        assert_eq!(parsed, buffer);
    }

    #[test]
    fn test_malformed_input_reports_parse_error() {
        assert!(matches!(
            point_buffer_from_json("[{\"x\": 1.0}]"),
            Err(TessError::ParseError(_))
        ));
        assert!(matches!(
            point_buffer_from_json("not json"),
            Err(TessError::ParseError(_))
        ));
    }
}
