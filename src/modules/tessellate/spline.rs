//! Tessellating Catmull-Rom and Cardinal splines
//!
//! A Cardinal spline interpolates every control point; `tension` scales the
//! tangents at the control points. Tension 0 gives the loosest curve,
//! tension 1 degenerates toward straight segments between control points,
//! and values outside [0, 1] are accepted for exaggerated effects. The
//! Catmull-Rom spline is the tension = 0.5 specialization, not a separate
//! algorithm.
//!
//! # Example
//!
//! ```rust
//! use tessella_rs::modules::tessellate::spline;
//! use tessella_rs::points;
//!
//! let control_points = points![(0, 0), (1, 2), (3, 2), (4, 0)];
//! let curve = spline::catmull_rom(&control_points, 8, false).unwrap();
//!
//! // an open spline yields (n - 1) * segments + 1 points and
//! // passes through the first and last control point exactly
//! assert_eq!(curve.len(), 25);
//! assert_eq!(curve[0], control_points.get(0).unwrap());
//! assert_eq!(curve[24], control_points.get(3).unwrap());
//! ```

use crate::constants::{CATMULL_ROM_TENSION, MIN_SPLINE_CONTROL_POINTS};
use crate::data::point::Point;
use crate::data::point_buffer::PointBuffer;
use crate::error::{TessError, TessResult};

/// Evaluate the Cardinal spline basis for the span between `p1` and `p2`
/// at parameter `t` in [0, 1]. `p0` and `p3` are the neighboring control
/// points that shape the tangents at the span ends.
pub fn cardinal_spline_at(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    tension: f64,
    t: f64,
) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;

    // Hermite blend with tangent scale s; the four weights sum to 1,
    // so the result is an affine combination of the control points.
    let s = (1.0 - tension) / 2.0;

    let b1 = s * (-t3 + 2.0 * t2 - t);
    let b2 = s * (-t3 + t2) + (2.0 * t3 - 3.0 * t2 + 1.0);
    let b3 = s * (t3 - 2.0 * t2 + t) + (-2.0 * t3 + 3.0 * t2);
    let b4 = s * (t3 - t2);

    Point::new(
        b1 * p0.x + b2 * p1.x + b3 * p2.x + b4 * p3.x,
        b1 * p0.y + b2 * p1.y + b3 * p2.y + b4 * p3.y,
    )
}

/// Neighbor lookup with the boundary policy of the requested topology:
/// closed curves wrap around, open curves clamp to the nearest endpoint
/// (duplicating the edge point gives a one-sided boundary tangent).
fn neighbor(points: &[Point], index: isize, closed: bool) -> Point {
    let n = points.len() as isize;
    let clamped = if closed {
        index.rem_euclid(n)
    } else {
        index.clamp(0, n - 1)
    };
    points[clamped as usize]
}

/// Tessellate a Cardinal spline through `control_points`.
///
/// Each consecutive control-point pair spans `segments` straight pieces,
/// evaluated at uniform parameter steps. An open curve over n control
/// points yields `(n - 1) * segments + 1` points starting at the first and
/// ending at the last control point; a closed curve also tessellates the
/// wraparound span back to the first control point, yielding
/// `n * segments + 1` points whose last point closes the loop.
///
/// Requires at least 3 control points and `segments >= 1`; `tension` is
/// unconstrained.
pub fn cardinal_spline(
    control_points: &PointBuffer,
    tension: f64,
    segments: u32,
    closed: bool,
) -> TessResult<Vec<Point>> {
    if segments < 1 {
        return Err(TessError::InvalidParameter(format!(
            "spline needs at least 1 segment per span, got {}",
            segments
        )));
    }
    let n = control_points.len();
    if n < MIN_SPLINE_CONTROL_POINTS {
        return Err(TessError::InvalidParameter(format!(
            "spline needs at least {} control points, got {}",
            MIN_SPLINE_CONTROL_POINTS, n
        )));
    }

    let points = control_points.as_slice();
    let span_count = if closed { n } else { n - 1 };

    let mut vertices = Vec::with_capacity(span_count * segments as usize + 1);
    for span in 0..span_count {
        let i = span as isize;
        let p0 = neighbor(points, i - 1, closed);
        let p1 = points[span];
        let p2 = neighbor(points, i + 1, closed);
        let p3 = neighbor(points, i + 2, closed);

        // t = 0 reproduces p1, which the previous span already emitted
        let start = if span == 0 { 0 } else { 1 };
        for step in start..=segments {
            let t = f64::from(step) / f64::from(segments);
            vertices.push(cardinal_spline_at(p0, p1, p2, p3, tension, t));
        }
    }
    Ok(vertices)
}

/// Tessellate a Catmull-Rom spline: a Cardinal spline with tension 0.5.
pub fn catmull_rom(
    control_points: &PointBuffer,
    segments: u32,
    closed: bool,
) -> TessResult<Vec<Point>> {
    cardinal_spline(control_points, CATMULL_ROM_TENSION, segments, closed)
}
