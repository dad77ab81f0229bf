//! Curve descriptions: one tagged variant per curve kind.

use crate::data::point::Point;
use crate::data::point_buffer::PointBuffer;
use crate::error::TessResult;
use crate::modules::tessellate::{bezier, spline};

/// A parametric curve description, tagged by curve kind.
///
/// Each variant carries its own parameter set; [`Curve::tessellate`]
/// dispatches exhaustively over the tag, so adding a curve kind is a
/// compile-time checked change everywhere the enum is matched.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// Quadratic Bézier with one control point
    QuadBezier {
        origin: Point,
        control: Point,
        destination: Point,
        segments: u32,
    },
    /// Cubic Bézier with two control points
    CubicBezier {
        origin: Point,
        control1: Point,
        control2: Point,
        destination: Point,
        segments: u32,
    },
    /// Catmull-Rom spline through the control points
    CatmullRom {
        control_points: PointBuffer,
        segments: u32,
        closed: bool,
    },
    /// Cardinal spline through the control points with explicit tension
    Cardinal {
        control_points: PointBuffer,
        tension: f64,
        segments: u32,
        closed: bool,
    },
}

impl Curve {
    /// Tessellate this curve into an ordered point sequence.
    ///
    /// `segments` is the number of straight-line pieces per curve span;
    /// see the functions in [`crate::modules::tessellate`] for the exact
    /// output lengths and parameter constraints of each curve kind.
    pub fn tessellate(&self) -> TessResult<Vec<Point>> {
        match self {
            Curve::QuadBezier {
                origin,
                control,
                destination,
                segments,
            } => bezier::quad_bezier(*origin, *control, *destination, *segments),
            Curve::CubicBezier {
                origin,
                control1,
                control2,
                destination,
                segments,
            } => bezier::cubic_bezier(*origin, *control1, *control2, *destination, *segments),
            Curve::CatmullRom {
                control_points,
                segments,
                closed,
            } => spline::catmull_rom(control_points, *segments, *closed),
            Curve::Cardinal {
                control_points,
                tension,
                segments,
                closed,
            } => spline::cardinal_spline(control_points, *tension, *segments, *closed),
        }
    }
}
