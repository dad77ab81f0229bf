//! Sampling circles and axis-scaled arcs into point sequences

use crate::constants::MIN_CIRCLE_SEGMENTS;
use crate::data::point::Point;
use crate::error::{TessError, TessResult};

/// Sample `segments` points around a circle of `radius` centered on
/// `center`, starting at `start_angle` (radians) and advancing by
/// `2π / segments` per point. `scale_x`/`scale_y` scale the radius per
/// axis, so unequal scales sample an axis-aligned ellipse.
///
/// With `radius_to_center` set the center point is appended after the
/// perimeter points, letting a caller render a radius line without a
/// second draw call.
///
/// `segments` must be at least 3.
pub fn circle_arc(
    center: Point,
    radius: f64,
    start_angle: f64,
    segments: u32,
    radius_to_center: bool,
    scale_x: f64,
    scale_y: f64,
) -> TessResult<Vec<Point>> {
    if segments < MIN_CIRCLE_SEGMENTS {
        return Err(TessError::InvalidParameter(format!(
            "circle needs at least {} segments, got {}",
            MIN_CIRCLE_SEGMENTS, segments
        )));
    }

    let step = 2.0 * std::f64::consts::PI / f64::from(segments);
    let extra = usize::from(radius_to_center);

    let mut vertices = Vec::with_capacity(segments as usize + extra);
    for i in 0..segments {
        let theta = start_angle + f64::from(i) * step;
        vertices.push(Point::new(
            center.x + radius * scale_x * theta.cos(),
            center.y + radius * scale_y * theta.sin(),
        ));
    }
    if radius_to_center {
        vertices.push(center);
    }
    Ok(vertices)
}

/// [`circle_arc`] with unit axis scales
pub fn circle(
    center: Point,
    radius: f64,
    start_angle: f64,
    segments: u32,
    radius_to_center: bool,
) -> TessResult<Vec<Point>> {
    circle_arc(center, radius, start_angle, segments, radius_to_center, 1.0, 1.0)
}
