#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod diagnostics;
pub mod stats;
pub mod types;
pub mod units;

// Algorithm building blocks, public for tools and tests.
pub mod angle;
pub mod clustering;
pub mod dedup;
pub mod segments;

// Tool support.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{AnalysisParams, AnalysisReport, JointAnalyzer, PhotoSize};
pub use crate::clustering::{cluster_joints, JointSet, JointSetSummary};
pub use crate::dedup::{dedup_segments, DedupOptions};
pub use crate::stats::{fracture_stats, FractureStats};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use joint_survey::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let raw = vec![LineSegment::from_coords(0.0, 0.0, 400.0, 10.0)];
/// let scale = ScaleData::new(200.0);
/// let report = JointAnalyzer::default().analyze(&raw, &scale, PhotoSize::new(800, 600))?;
/// println!("joints={} p21={:.3}", report.stats.joint_count, report.stats.p21);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::segments::LineSegment;
    pub use crate::types::{Joint, Point, ScaleData};
    pub use crate::{AnalysisParams, FractureStats, JointAnalyzer, PhotoSize};
}
