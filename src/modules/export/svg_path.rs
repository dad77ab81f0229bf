//! SVG export utilities for point sequences
//!
//! A tessellated curve is already a polyline, so its SVG form is a single
//! `M` command followed by `L` commands for every remaining point.
//!
//! # Examples
//!
//! ```rust
//! use tessella_rs::modules::export::svg_path::ToSvgPath;
//! use tessella_rs::pt;
//!
//! let polyline = vec![pt!(0, 0), pt!(1, 0.5), pt!(2, 0)];
//! assert_eq!(polyline.to_svg_path(), "M0,0 L1,0.5 L2,0");
//! ```

use crate::data::point::Point;
use crate::data::point_buffer::PointBuffer;

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

impl ToSvgPath for [Point] {
    fn to_svg_path(&self) -> String {
        let mut result = String::new();

        for (i, point) in self.iter().enumerate() {
            if i == 0 {
                result.push_str(&format!("M{},{}", point.x, point.y));
            } else {
                result.push_str(&format!(" L{},{}", point.x, point.y));
            }
        }

        result
    }
}

impl ToSvgPath for Vec<Point> {
    fn to_svg_path(&self) -> String {
        self.as_slice().to_svg_path()
    }
}

impl ToSvgPath for PointBuffer {
    fn to_svg_path(&self) -> String {
        self.as_slice().to_svg_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points;

    #[test]
    fn test_polyline_export_to_svg_path() {
        struct SvgPathExportTestCase<'a> {
            name: &'a str,
            points: PointBuffer,
            expected_path: &'a str,
        }

        let test_cases = [
            SvgPathExportTestCase {
                name: "empty",
                points: points![],
                expected_path: "",
            },
            SvgPathExportTestCase {
                name: "single_point",
                points: points![(10, 20)],
                expected_path: "M10,20",
            },
            SvgPathExportTestCase {
                name: "polyline",
                points: points![(0, 0), (1, 0.5), (2, 0)],
                expected_path: "M0,0 L1,0.5 L2,0",
            },
        ];

        for test_case in test_cases {
            assert_eq!(
                test_case.points.to_svg_path(),
                test_case.expected_path,
                "Test case: {}",
                test_case.name
            );
        }
    }
}
