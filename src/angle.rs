//! Orientation utilities shared by the deduplicator and the clusterer.
//!
//! All angles here are in degrees. A joint trace has no direction, so most
//! helpers fold orientations into the bidirectional range [0, 180).

/// Normalizes an orientation into the bidirectional range [0, 180).
///
/// Applies `angle mod 360`, lifts negatives by 360, then folds the upper half
/// circle down by 180. NaN propagates unchanged.
#[inline]
pub fn normalize_bidirectional_deg(angle: f64) -> f64 {
    let mut norm = angle % 360.0;
    if norm < 0.0 {
        norm += 360.0;
    }
    if norm >= 180.0 {
        norm -= 180.0;
    }
    // -1e-17 + 360.0 rounds to 360.0; fold the last ulp back to 0.
    if norm >= 180.0 {
        norm -= 180.0;
    }
    norm
}

/// Smallest unsigned difference between two orientations, treating antipodal
/// directions as equivalent. Returns a value in [0, 90].
#[inline]
pub fn orientation_difference_deg(a: f64, b: f64) -> f64 {
    let diff = normalize_bidirectional_deg(a - b);
    if diff > 90.0 {
        180.0 - diff
    } else {
        diff
    }
}

/// Orientation of the vector `(dx, dy)` in degrees, folded into [0, 180).
#[inline]
pub fn segment_angle_deg(dx: f64, dy: f64) -> f64 {
    normalize_bidirectional_deg(dy.atan2(dx).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_bidirectional_basic() {
        assert!(approx_eq(normalize_bidirectional_deg(45.0), 45.0));
        assert!(approx_eq(normalize_bidirectional_deg(180.0), 0.0));
        assert!(approx_eq(normalize_bidirectional_deg(270.0), 90.0));
        assert!(approx_eq(normalize_bidirectional_deg(-30.0), 150.0));
        assert!(approx_eq(normalize_bidirectional_deg(725.0), 5.0));
    }

    #[test]
    fn normalize_is_periodic_and_bounded() {
        let mut a = -720.0;
        while a <= 720.0 {
            let n = normalize_bidirectional_deg(a);
            assert!((0.0..180.0).contains(&n), "angle {a} normalized to {n}");
            assert!(approx_eq(n, normalize_bidirectional_deg(a + 180.0)));
            assert!(approx_eq(n, normalize_bidirectional_deg(a - 360.0)));
            a += 7.3;
        }
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let n = normalize_bidirectional_deg(-1e-17);
        assert!((0.0..180.0).contains(&n), "got {n}");
    }

    #[test]
    fn normalize_propagates_nan() {
        assert!(normalize_bidirectional_deg(f64::NAN).is_nan());
    }

    #[test]
    fn orientation_difference_handles_wrap() {
        assert!(approx_eq(orientation_difference_deg(1.0, 179.0), 2.0));
        assert!(approx_eq(orientation_difference_deg(179.0, 1.0), 2.0));
        assert!(approx_eq(orientation_difference_deg(0.0, 90.0), 90.0));
        assert!(approx_eq(orientation_difference_deg(10.0, 190.0), 0.0));
    }

    #[test]
    fn segment_angle_ignores_direction() {
        assert!(approx_eq(segment_angle_deg(1.0, 0.0), 0.0));
        assert!(approx_eq(segment_angle_deg(-1.0, 0.0), 0.0));
        assert!(approx_eq(segment_angle_deg(1.0, 1.0), 45.0));
        assert!(approx_eq(segment_angle_deg(-1.0, -1.0), 45.0));
        assert!(approx_eq(segment_angle_deg(0.0, -1.0), 90.0));
    }
}
