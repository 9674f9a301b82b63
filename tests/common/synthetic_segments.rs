use joint_survey::segments::LineSegment;

/// Parallel traces at `angle_deg`, `spacing` pixels apart, each `length` long,
/// laid out around `center`.
pub fn joint_family(
    center: (f64, f64),
    angle_deg: f64,
    count: usize,
    spacing: f64,
    length: f64,
) -> Vec<LineSegment> {
    assert!(count > 0, "family needs at least one trace");
    let (s, c) = angle_deg.to_radians().sin_cos();
    let (nx, ny) = (-s, c);
    let half = 0.5 * length;
    (0..count)
        .map(|i| {
            let offset = (i as f64 - 0.5 * (count - 1) as f64) * spacing;
            let mx = center.0 + nx * offset;
            let my = center.1 + ny * offset;
            LineSegment::from_coords(mx - c * half, my - s * half, mx + c * half, my + s * half)
        })
        .collect()
}

/// Re-detections of `seg`: a jittered near copy, a reversed copy and an
/// inner fragment, all shorter than the original.
pub fn noisy_copies(seg: &LineSegment) -> Vec<LineSegment> {
    let (x0, y0, x1, y1) = (seg.start.x, seg.start.y, seg.end.x, seg.end.y);
    let (dx, dy) = (x1 - x0, y1 - y0);
    vec![
        LineSegment::from_coords(
            x0 + 0.02 * dx + 1.0,
            y0 + 0.02 * dy,
            x1 - 0.02 * dx,
            y1 - 0.02 * dy + 1.0,
        ),
        LineSegment::from_coords(
            x1 - 0.03 * dx,
            y1 - 0.03 * dy,
            x0 + 0.01 * dx,
            y0 + 0.01 * dy - 1.0,
        ),
        LineSegment::from_coords(
            x0 + 0.3 * dx,
            y0 + 0.3 * dy + 2.0,
            x0 + 0.6 * dx,
            y0 + 0.6 * dy + 2.0,
        ),
    ]
}
