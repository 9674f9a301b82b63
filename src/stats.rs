//! Fracture statistics over the current joint collection.
//!
//! All values are metric base units (m, m², m/m²). Imperial conversion is a
//! presentation concern, see [`crate::units`].
//!
//! The analyzed area is the photographed rectangle's real-world size,
//! assuming the photo plane is parallel to the face (no perspective
//! correction). `frequency` divides the joint count by `sqrt(area)`, using
//! the square side as a proxy scan line; it approximates, but is not, a 1-D
//! scan-line frequency.

use crate::clustering::JointSet;
use crate::types::{Joint, ScaleData};
use log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractureStats {
    pub joint_count: usize,
    pub total_length: f64,
    pub mean_length: f64,
    /// Upper median: element `n / 2` of the ascending lengths.
    pub median_length: f64,
    pub min_length: f64,
    pub max_length: f64,
    pub area_analyzed: f64,
    /// Trace length per unit area (m/m²).
    pub p21: f64,
    /// Joints per metre of the `sqrt(area)` proxy scan line.
    pub frequency: f64,
}

/// Per-set breakdown reported alongside [`FractureStats`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointSetStats {
    pub set_id: usize,
    pub mean_orientation: f64,
    pub count: usize,
    pub total_length: f64,
    pub mean_length: f64,
    /// Fraction of all clustered trace length carried by this set.
    pub length_share: f64,
    pub p21: f64,
}

/// Real-world area of a `width_px` × `height_px` photo, 0 for a degenerate
/// scale.
pub fn analyzed_area(scale: &ScaleData, width_px: u32, height_px: u32) -> f64 {
    if !scale.is_valid() {
        warn!(
            "analyzed_area: degenerate scale {} px/m, reporting zero area",
            scale.pixels_per_meter
        );
        return 0.0;
    }
    (width_px as f64 / scale.pixels_per_meter) * (height_px as f64 / scale.pixels_per_meter)
}

pub fn fracture_stats(
    joints: &[Joint],
    scale: &ScaleData,
    photo_width_px: u32,
    photo_height_px: u32,
) -> FractureStats {
    // No joints means nothing to report, area included.
    if joints.is_empty() {
        return FractureStats::default();
    }
    let area = analyzed_area(scale, photo_width_px, photo_height_px);
    let mut lengths: Vec<f64> = joints.iter().map(|j| j.length_meters).collect();
    let n = lengths.len();

    lengths.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let total_length: f64 = lengths.iter().sum();
    let (p21, frequency) = if area > 0.0 {
        (total_length / area, n as f64 / area.sqrt())
    } else {
        (0.0, 0.0)
    };

    FractureStats {
        joint_count: n,
        total_length,
        mean_length: total_length / n as f64,
        median_length: lengths[n / 2],
        min_length: lengths[0],
        max_length: lengths[n - 1],
        area_analyzed: area,
        p21,
        frequency,
    }
}

pub fn joint_set_stats(sets: &[JointSet<'_>], area_analyzed: f64) -> Vec<JointSetStats> {
    let clustered_length: f64 = sets.iter().map(|s| s.total_length).sum();
    sets.iter()
        .map(|set| JointSetStats {
            set_id: set.id,
            mean_orientation: set.mean_orientation,
            count: set.count,
            total_length: set.total_length,
            mean_length: set.mean_length,
            length_share: if clustered_length > 0.0 {
                set.total_length / clustered_length
            } else {
                0.0
            },
            p21: if area_analyzed > 0.0 {
                set.total_length / area_analyzed
            } else {
                0.0
            },
        })
        .collect()
}
