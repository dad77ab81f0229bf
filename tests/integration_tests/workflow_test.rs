use approx::assert_abs_diff_eq;
use tessella_rs::modules::export::svg_path::ToSvgPath;
use tessella_rs::modules::parse::json;
use tessella_rs::{points, pt, Curve, PointBuffer};

#[test]
fn test_complete_workflow() {
    // Control points arrive as JSON, e.g. from an editor or asset file
    let control_points = json::point_buffer_from_json(
        r#"[{"x": 50.0, "y": 200.0}, {"x": 100.0, "y": 50.0}, {"x": 200.0, "y": 50.0}, {"x": 250.0, "y": 200.0}]"#,
    )
    .unwrap();

    // Tessellate a Catmull-Rom spline through them
    let curve = Curve::CatmullRom {
        control_points: control_points.clone(),
        segments: 10,
        closed: false,
    };
    let polyline = curve.tessellate().unwrap();

    // Open spline: (n - 1) * segments + 1 points, interpolating the
    // first and last control point exactly
    assert_eq!(polyline.len(), 31);
    assert_eq!(polyline[0], pt!(50, 200));
    assert_eq!(*polyline.last().unwrap(), pt!(250, 200));

    // Hand the polyline back to a buffer and draw it backwards too; the
    // reversed copy leaves the original untouched
    let vertices = PointBuffer::from(polyline);
    let backwards = vertices.reversed();
    assert_eq!(backwards.len(), vertices.len());
    assert_eq!(backwards.get(0).unwrap(), vertices.get(30).unwrap());
    assert_eq!(vertices.get(0).unwrap(), pt!(50, 200));

    // The control polygon itself renders as SVG path data
    let path_data = control_points.to_svg_path();
    assert_eq!(path_data, "M50,200 L100,50 L200,50 L250,200");
}

#[test]
fn test_closed_spline_workflow() {
    let square = points![(0, 0), (100, 0), (100, 100), (0, 100)];

    let curve = Curve::Cardinal {
        control_points: square.clone(),
        tension: 0.0,
        segments: 12,
        closed: true,
    };
    let loop_points = curve.tessellate().unwrap();

    // Closed topology adds the wraparound span and revisits the start
    assert_eq!(loop_points.len(), 4 * 12 + 1);
    let first = loop_points[0];
    let last = *loop_points.last().unwrap();
    assert_abs_diff_eq!(first.x, last.x, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y, last.y, epsilon = 1e-9);

    // Round-trip the control points through JSON without loss
    let json_data = json::point_buffer_to_json(&square).unwrap();
    let restored = json::point_buffer_from_json(&json_data).unwrap();
    assert_eq!(restored, square);
}
