//! Parameter types configuring the analysis stages.
//!
//! Defaults are the field values used for handheld photos of a rock face:
//! a 15 px duplicate tolerance, 10° collinearity, 15° rose-diagram bins and
//! at most twelve joint sets.

use crate::clustering::ClusterOptions;
use crate::dedup::DedupOptions;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisParams {
    pub dedup: DedupOptions,
    pub clustering: ClusterOptions,
    /// Id given to the first joint built from detected segments.
    pub first_joint_id: u32,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            dedup: DedupOptions::default(),
            clustering: ClusterOptions::default(),
            first_joint_id: 1,
        }
    }
}

impl AnalysisParams {
    pub fn with_match_threshold(mut self, match_threshold_px: f64) -> Self {
        self.dedup.match_threshold_px = match_threshold_px;
        self
    }

    pub fn with_max_sets(mut self, max_sets: usize) -> Self {
        self.clustering.max_sets = max_sets;
        self
    }
}

/// Pixel dimensions of the analysed photograph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSize {
    pub width_px: u32,
    pub height_px: u32,
}

impl PhotoSize {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}
