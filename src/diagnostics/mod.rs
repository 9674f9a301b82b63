//! Run diagnostics attached to every analysis report.
//!
//! `StageCounts` traces how many items survive each stage; `TimingBreakdown`
//! records how long each stage took.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    /// Candidate segments handed over by the line detector.
    pub raw_segments: usize,
    /// Segments left after duplicate removal.
    pub deduplicated_segments: usize,
    pub joints: usize,
    /// Non-empty orientation bins before truncation to `max_sets`.
    pub orientation_bins: usize,
    pub joint_sets: usize,
    /// Joints binned at 0° because they carried no orientation.
    pub joints_without_orientation: usize,
}
