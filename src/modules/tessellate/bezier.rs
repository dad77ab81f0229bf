//! Tessellating quadratic and cubic Bézier curves
//!
//! Points are sampled at uniform parameter steps `t = i / segments` using
//! the Bernstein form of the curve.
//!
//! # Example
//!
//! ```rust
//! use tessella_rs::modules::tessellate::bezier;
//! use tessella_rs::pt;
//!
//! let points = bezier::quad_bezier(pt!(0, 0), pt!(1, 1), pt!(2, 0), 2).unwrap();
//! assert_eq!(points, vec![pt!(0, 0), pt!(1, 0.5), pt!(2, 0)]);
//! ```

use crate::data::point::Point;
use crate::error::{TessError, TessResult};

/// Tessellate a quadratic Bézier curve into `segments + 1` points.
///
/// B(t) = (1-t)² · origin + 2(1-t)t · control + t² · destination
///
/// `segments` must be at least 1.
pub fn quad_bezier(
    origin: Point,
    control: Point,
    destination: Point,
    segments: u32,
) -> TessResult<Vec<Point>> {
    if segments < 1 {
        return Err(TessError::InvalidParameter(format!(
            "quad bezier needs at least 1 segment, got {}",
            segments
        )));
    }

    let mut vertices = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let t = f64::from(i) / f64::from(segments);
        let t1 = 1.0 - t;

        let x = t1.powi(2) * origin.x + 2.0 * t1 * t * control.x + t.powi(2) * destination.x;
        let y = t1.powi(2) * origin.y + 2.0 * t1 * t * control.y + t.powi(2) * destination.y;

        vertices.push(Point::new(x, y));
    }
    Ok(vertices)
}

/// Tessellate a cubic Bézier curve into `segments + 1` points.
///
/// B(t) = (1-t)³ · origin + 3(1-t)²t · control1 + 3(1-t)t² · control2 + t³ · destination
///
/// `segments` must be at least 1.
pub fn cubic_bezier(
    origin: Point,
    control1: Point,
    control2: Point,
    destination: Point,
    segments: u32,
) -> TessResult<Vec<Point>> {
    if segments < 1 {
        return Err(TessError::InvalidParameter(format!(
            "cubic bezier needs at least 1 segment, got {}",
            segments
        )));
    }

    let mut vertices = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let t = f64::from(i) / f64::from(segments);
        let t1 = 1.0 - t;

        let x = t1.powi(3) * origin.x
            + 3.0 * t1.powi(2) * t * control1.x
            + 3.0 * t1 * t.powi(2) * control2.x
            + t.powi(3) * destination.x;
        let y = t1.powi(3) * origin.y
            + 3.0 * t1.powi(2) * t * control1.y
            + 3.0 * t1 * t.powi(2) * control2.y
            + t.powi(3) * destination.y;

        vertices.push(Point::new(x, y));
    }
    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt;

    #[test]
    fn test_quad_bezier_midpoint() {
        // B(0.5) = 0.25*P0 + 0.5*P1 + 0.25*P2
        // = 0.25*(0,0) + 0.5*(1,1) + 0.25*(2,0) = (1, 0.5)
        let points = quad_bezier(pt!(0, 0), pt!(1, 1), pt!(2, 0), 2).unwrap();
        assert_eq!(points, vec![pt!(0, 0), pt!(1, 0.5), pt!(2, 0)]);
    }

    #[test]
    fn test_quad_bezier_endpoints_exact() {
        let origin = pt!(50, 200);
        let destination = pt!(250, 200);
        let points = quad_bezier(origin, pt!(150, 50), destination, 7).unwrap();

        assert_eq!(points.len(), 8);
        assert_eq!(points[0], origin);
        assert_eq!(points[7], destination);
    }

    #[test]
    fn test_cubic_bezier_endpoints_exact() {
        let origin = pt!(50, 200);
        let destination = pt!(250, 200);
        let points =
            cubic_bezier(origin, pt!(100, 50), pt!(200, 50), destination, 10).unwrap();

        assert_eq!(points.len(), 11);
        assert_eq!(points[0], origin);
        assert_eq!(points[10], destination);
    }

    #[test]
    fn test_cubic_bezier_degenerate_point() {
        // all four control points coincide: every sample is that point
        let p = pt!(5, 5);
        let points = cubic_bezier(p, p, p, p, 6).unwrap();
        assert_eq!(points, vec![p; 7]);
    }

    #[test]
    fn test_zero_segments_rejected() {
        assert!(matches!(
            quad_bezier(pt!(0, 0), pt!(1, 1), pt!(2, 0), 0),
            Err(TessError::InvalidParameter(_))
        ));
        assert!(matches!(
            cubic_bezier(pt!(0, 0), pt!(1, 1), pt!(2, 1), pt!(3, 0), 0),
            Err(TessError::InvalidParameter(_))
        ));
    }
}
