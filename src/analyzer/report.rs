use super::params::PhotoSize;
use crate::clustering::JointSetSummary;
use crate::diagnostics::{StageCounts, TimingBreakdown};
use crate::stats::{FractureStats, JointSetStats};
use crate::types::{Joint, ScaleData};
use serde::{Deserialize, Serialize};

/// Everything the report formatters need from one analyzer run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub photo: PhotoSize,
    pub scale: ScaleData,
    pub joints: Vec<Joint>,
    pub joint_sets: Vec<JointSetSummary>,
    pub stats: FractureStats,
    pub set_stats: Vec<JointSetStats>,
    pub counts: StageCounts,
    pub timing: TimingBreakdown,
}

impl AnalysisReport {
    /// True when there is nothing to report yet.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}
