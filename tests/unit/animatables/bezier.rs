use pretty_assertions::assert_eq;

use super::*;

fn p(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

#[test]
fn ordered_colinear_control_points_are_a_line() {
    // Control points 1 and 2 lie between 0 and 3 on one line.
    let seg = BezierSegment::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(4.0, 4.0));
    assert!(seg.is_a_line());
}

#[test]
fn colinear_but_outside_endpoints_is_not_a_line() {
    // All on one line, but cp1 overshoots past cp3.
    let seg = BezierSegment::new(p(0.0, 0.0), p(8.0, 8.0), p(2.0, 2.0), p(4.0, 4.0));
    assert!(!seg.is_a_line());
}

#[test]
fn bent_control_points_are_not_a_line() {
    let seg = BezierSegment::new(p(0.0, 0.0), p(1.0, 3.0), p(2.0, 2.0), p(4.0, 0.0));
    assert!(!seg.is_a_line());
}

#[test]
fn colinearity_is_axis_aligned_friendly() {
    assert!(are_points_colinear(
        0.0,
        p(0.0, 5.0),
        p(1.0, 5.0),
        p(2.0, 5.0),
        p(3.0, 5.0)
    ));
    assert!(!are_points_colinear(
        0.0,
        p(0.0, 5.0),
        p(1.0, 6.0),
        p(2.0, 5.0),
        p(3.0, 5.0)
    ));
}

#[test]
fn with_offset_translates_all_control_points() {
    let seg = BezierSegment::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(4.0, 4.0));
    let moved = seg.with_offset(p(10.0, -1.0));
    assert_eq!(moved.cp0, p(10.0, -1.0));
    assert_eq!(moved.cp3, p(14.0, 3.0));
}

#[test]
fn path_geometry_equality_is_by_segments_and_closed_flag() {
    let seg = BezierSegment::new(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(4.0, 4.0));
    let a = PathGeometry::new(vec![seg], true);
    let b = PathGeometry::new(vec![seg], true);
    let open = PathGeometry::new(vec![seg], false);

    // Reflexive and symmetric.
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, open);
    assert_ne!(a, PathGeometry::empty());
}
