//! This module provides convenient macros for creating points and point buffers.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a PointBuffer from coordinate pairs
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        $crate::data::PointBuffer::from_points(&[$($crate::pt!($x, $y)),*])
    };
}
