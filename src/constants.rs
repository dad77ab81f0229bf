//! Crate-wide numeric constants.

/// The Cardinal spline tension that yields a Catmull-Rom spline.
pub const CATMULL_ROM_TENSION: f64 = 0.5;

/// Minimum number of segments a circle approximation needs to enclose area.
pub const MIN_CIRCLE_SEGMENTS: u32 = 3;

/// Minimum number of control points for a spline with defined tangents
/// at both ends (open) or a loop (closed).
pub const MIN_SPLINE_CONTROL_POINTS: usize = 3;
