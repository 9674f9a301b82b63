//! Collapse near-duplicate line detections into one segment per joint trace.
//!
//! The detector typically reports the same crack several times: parallel
//! copies a pixel or two apart, and short fragments lying along a longer
//! detection. Deduplication is a greedy filter over the candidates sorted by
//! length (longest first). Each candidate is compared only against segments
//! already accepted, so whenever two segments are judged duplicates the
//! longer one survives. No endpoints are merged or averaged; the output is a
//! subset of the input.
//!
//! Two tests decide whether a candidate duplicates an accepted segment:
//! - Endpoint proximity: both endpoints lie within the match threshold of the
//!   accepted segment's endpoints, under either pairing.
//! - Collinear containment: similar orientation (within
//!   `collinear_angle_tol_deg`, 180° wrap aware), midpoints closer than half
//!   the longer length, and both candidate endpoints within the match
//!   threshold of the accepted segment's infinite line.
//!
//! Complexity is O(n²); one photograph yields at most a few hundred
//! candidates.

mod options;

pub use options::DedupOptions;

use crate::angle::orientation_difference_deg;
use crate::segments::LineSegment;
use log::debug;
use std::cmp::Ordering;

/// Returns one representative segment per distinct trace, preferring the
/// longest evidence.
pub fn dedup_segments(segments: &[LineSegment], options: &DedupOptions) -> Vec<LineSegment> {
    let mut sorted: Vec<(f64, LineSegment)> =
        segments.iter().map(|s| (s.length(), *s)).collect();
    // Stable sort: equal lengths keep their detection order.
    sorted.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut accepted: Vec<(f64, LineSegment)> = Vec::with_capacity(sorted.len());
    for (len, candidate) in sorted {
        let duplicate = accepted
            .iter()
            .any(|(kept_len, kept)| is_duplicate(&candidate, len, kept, *kept_len, options));
        if !duplicate {
            accepted.push((len, candidate));
        }
    }

    debug!(
        "dedup_segments: {} candidates -> {} segments (threshold={:.1}px)",
        segments.len(),
        accepted.len(),
        options.match_threshold_px
    );
    accepted.into_iter().map(|(_, s)| s).collect()
}

/// True when `candidate` duplicates the already accepted segment `kept`.
pub fn is_duplicate(
    candidate: &LineSegment,
    candidate_len: f64,
    kept: &LineSegment,
    kept_len: f64,
    options: &DedupOptions,
) -> bool {
    endpoints_match(candidate, kept, options.match_threshold_px)
        || collinear_contained(candidate, candidate_len, kept, kept_len, options)
}

fn endpoints_match(a: &LineSegment, b: &LineSegment, threshold: f64) -> bool {
    let same = a.start.distance(b.start) < threshold && a.end.distance(b.end) < threshold;
    let swapped = a.start.distance(b.end) < threshold && a.end.distance(b.start) < threshold;
    same || swapped
}

fn collinear_contained(
    candidate: &LineSegment,
    candidate_len: f64,
    kept: &LineSegment,
    kept_len: f64,
    options: &DedupOptions,
) -> bool {
    if orientation_difference_deg(candidate.angle(), kept.angle())
        >= options.collinear_angle_tol_deg
    {
        return false;
    }
    let gate = 0.5 * candidate_len.max(kept_len);
    if candidate.midpoint().distance(kept.midpoint()) >= gate {
        return false;
    }
    let threshold = options.match_threshold_px;
    kept.distance_to_line(candidate.start) < threshold
        && kept.distance_to_line(candidate.end) < threshold
}
