//! Error types for the tessellation library.

use std::error::Error;
use std::fmt;

/// Errors produced by tessellation and point-buffer operations.
///
/// Every error here is a deterministic function of invalid input and is
/// reported synchronously to the caller; nothing is retried or swallowed.
#[derive(Debug, Clone, PartialEq)]
pub enum TessError {
    /// A numeric parameter is outside the range the operation requires,
    /// e.g. a segment count of zero or too few spline control points.
    InvalidParameter(String),
    /// An index-based point-buffer access fell outside the valid range.
    OutOfRange {
        /// The requested index
        index: usize,
        /// The buffer length at the time of the access
        len: usize,
    },
    /// Control-point data could not be parsed or serialized.
    ParseError(String),
}

impl fmt::Display for TessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TessError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
            TessError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for buffer of length {}", index, len)
            }
            TessError::ParseError(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl Error for TessError {}

/// Result alias used throughout the crate
pub type TessResult<T> = Result<T, TessError>;
