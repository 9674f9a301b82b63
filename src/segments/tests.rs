use super::*;
use crate::types::Point;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn length_and_midpoint() {
    let seg = LineSegment::from_coords(0.0, 0.0, 30.0, 40.0);
    assert!(approx_eq(seg.length(), 50.0));
    assert_eq!(seg.midpoint(), Point::new(15.0, 20.0));
}

#[test]
fn angle_is_direction_agnostic() {
    let fwd = LineSegment::from_coords(0.0, 0.0, 10.0, 10.0);
    let rev = LineSegment::from_coords(10.0, 10.0, 0.0, 0.0);
    assert!(approx_eq(fwd.angle(), 45.0));
    assert!(approx_eq(rev.angle(), 45.0));
    let horiz = LineSegment::from_coords(5.0, 0.0, -5.0, 0.0);
    assert!(approx_eq(horiz.angle(), 0.0));
}

#[test]
fn line_is_normalized() {
    let seg = LineSegment::from_coords(1.0, 2.0, 7.0, -3.0);
    let l = seg.line().expect("non-degenerate segment");
    assert!(approx_eq(l.x * l.x + l.y * l.y, 1.0));
    assert!(approx_eq(l.x * 1.0 + l.y * 2.0 + l.z, 0.0));
    assert!(approx_eq(l.x * 7.0 + l.y * -3.0 + l.z, 0.0));
    assert!(LineSegment::from_coords(3.0, 3.0, 3.0, 3.0).line().is_none());
}

#[test]
fn line_distance_is_unclamped() {
    let seg = LineSegment::from_coords(0.0, 0.0, 10.0, 0.0);
    assert!(approx_eq(seg.distance_to_line(Point::new(50.0, 3.0)), 3.0));
    assert!(approx_eq(seg.distance_to_line(Point::new(-20.0, -4.0)), 4.0));
}

#[test]
fn segment_distance_is_clamped() {
    let seg = LineSegment::from_coords(0.0, 0.0, 10.0, 0.0);
    assert!(approx_eq(seg.distance_to_segment(Point::new(5.0, 3.0)), 3.0));
    assert!(approx_eq(seg.distance_to_segment(Point::new(13.0, 4.0)), 5.0));
    assert!(approx_eq(seg.distance_to_segment(Point::new(-3.0, 4.0)), 5.0));
}

#[test]
fn zero_length_segment_distances_fall_back_to_point() {
    let seg = LineSegment::from_coords(2.0, 2.0, 2.0, 2.0);
    assert!(approx_eq(seg.length(), 0.0));
    assert!(approx_eq(seg.distance_to_line(Point::new(5.0, 6.0)), 5.0));
    assert!(approx_eq(seg.distance_to_segment(Point::new(5.0, 6.0)), 5.0));
}
