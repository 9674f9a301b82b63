//! Group joints into joint sets by apparent 2-D orientation.
//!
//! This is a coarse fixed-bin histogram, not a statistical clustering:
//! orientations are folded into [0, 180) and keyed by
//! `floor(angle / bin_width) * bin_width`. Bin boundaries do not adapt to the
//! data, so a true joint set whose mean sits on a boundary can be split
//! across two neighbouring bins.
//!
//! Sets are ranked by member count (ties: lower bin start first), truncated
//! to `max_sets`, and given a 1-based rank id plus a palette colour for the
//! rose diagram.

mod histogram;

use crate::types::{Joint, JointId};
use histogram::OrientationBins;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Bin width used by the rose diagram.
pub const DEFAULT_BIN_WIDTH_DEG: f64 = 15.0;
pub const DEFAULT_MAX_SETS: usize = 12;

/// Display colours assigned to joint sets by rank, cycling past the end.
pub const JOINT_SET_PALETTE: [&str; 12] = [
    "#E6194B", "#3CB44B", "#FFE119", "#4363D8", "#F58231", "#911EB4", "#46F0F0", "#F032E6",
    "#BCF60C", "#FABEBE", "#008080", "#9A6324",
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterOptions {
    pub max_sets: usize,
    pub bin_width_deg: f64,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_sets: DEFAULT_MAX_SETS,
            bin_width_deg: DEFAULT_BIN_WIDTH_DEG,
        }
    }
}

/// A cluster of joints sharing similar apparent orientation.
///
/// Derived from the joint collection on every recomputation; `joints`
/// borrows the members rather than owning them.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JointSet<'a> {
    /// 1-based rank by member count.
    pub id: usize,
    pub bin_start_deg: f64,
    /// Mean of the members' folded orientations, rounded to whole degrees.
    pub mean_orientation: f64,
    pub count: usize,
    pub joints: Vec<&'a Joint>,
    pub total_length: f64,
    pub mean_length: f64,
    pub color_index: usize,
}

impl JointSet<'_> {
    pub fn color(&self) -> &'static str {
        JOINT_SET_PALETTE[self.color_index % JOINT_SET_PALETTE.len()]
    }

    /// Owned copy carrying member ids instead of references.
    pub fn summary(&self) -> JointSetSummary {
        JointSetSummary {
            id: self.id,
            bin_start_deg: self.bin_start_deg,
            mean_orientation: self.mean_orientation,
            count: self.count,
            total_length: self.total_length,
            mean_length: self.mean_length,
            color_index: self.color_index,
            color: self.color().to_string(),
            joint_ids: self.joints.iter().map(|j| j.id).collect(),
        }
    }
}

/// Serializable form of a [`JointSet`] for reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointSetSummary {
    pub id: usize,
    pub bin_start_deg: f64,
    pub mean_orientation: f64,
    pub count: usize,
    pub total_length: f64,
    pub mean_length: f64,
    pub color_index: usize,
    pub color: String,
    pub joint_ids: Vec<JointId>,
}

/// Outcome of one clustering pass: the ranked, truncated sets plus the
/// number of non-empty bins they were picked from.
#[derive(Clone, Debug)]
pub struct Clustering<'a> {
    pub sets: Vec<JointSet<'a>>,
    pub orientation_bins: usize,
}

/// Bins joints into sets with the default 15° bin width and keeps the
/// `max_sets` most populated.
pub fn cluster_joints(joints: &[Joint], max_sets: usize) -> Vec<JointSet<'_>> {
    let options = ClusterOptions {
        max_sets,
        ..ClusterOptions::default()
    };
    cluster_joints_with(joints, &options).sets
}

pub fn cluster_joints_with<'a>(joints: &'a [Joint], options: &ClusterOptions) -> Clustering<'a> {
    let mut sets = bin_joints(joints, options);
    let orientation_bins = sets.len();
    sets.truncate(options.max_sets);
    debug!(
        "cluster_joints: {} joints -> {} of {} bins kept (max_sets={})",
        joints.len(),
        sets.len(),
        orientation_bins,
        options.max_sets
    );
    Clustering {
        sets,
        orientation_bins,
    }
}

/// All non-empty bins, ranked by member count, without truncation.
/// `options.max_sets` is ignored here.
///
/// Every input joint appears in exactly one returned set.
pub fn bin_joints<'a>(joints: &'a [Joint], options: &ClusterOptions) -> Vec<JointSet<'a>> {
    let bin_width_deg = options.bin_width_deg;
    let bin_width = if bin_width_deg.is_finite() && bin_width_deg > 0.0 {
        bin_width_deg
    } else {
        warn!("bin_joints: invalid bin width {bin_width_deg}, using {DEFAULT_BIN_WIDTH_DEG}");
        DEFAULT_BIN_WIDTH_DEG
    };

    let mut bins = OrientationBins::new(bin_width);
    for joint in joints {
        bins.accumulate(joint);
    }
    if bins.defaulted() > 0 {
        debug!(
            "bin_joints: {} joints without orientation binned at 0 deg",
            bins.defaulted()
        );
    }

    let mut sets: Vec<JointSet<'_>> = bins
        .into_bins()
        .map(|(bin_start_deg, bin)| {
            let count = bin.members.len();
            let total_length: f64 = bin.members.iter().map(|j| j.length_meters).sum();
            JointSet {
                id: 0,
                bin_start_deg,
                mean_orientation: (bin.angle_sum / count as f64).round(),
                count,
                total_length,
                mean_length: total_length / count as f64,
                joints: bin.members,
                color_index: 0,
            }
        })
        .collect();

    // Stable: equal counts stay in ascending bin order.
    sets.sort_by(|a, b| b.count.cmp(&a.count));
    for (rank, set) in sets.iter_mut().enumerate() {
        set.id = rank + 1;
        set.color_index = rank % JOINT_SET_PALETTE.len();
    }
    sets
}
