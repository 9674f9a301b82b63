//! Batch analysis pipeline from raw detections to fracture statistics.
//!
//! The [`JointAnalyzer`] runs the three stages in order: duplicate removal
//! over the detector's raw segments, joint construction with the photo's
//! scale, then orientation clustering and statistics over the joints. Each
//! call recomputes everything from its inputs; nothing is cached between
//! calls, so the analyzer is safe to share across threads.
//!
//! After manual edits (add, drag, delete) the caller hands the edited joint
//! collection to [`JointAnalyzer::recompute`], which skips deduplication.
//!
//! ```no_run
//! use joint_survey::{JointAnalyzer, AnalysisParams, PhotoSize};
//! use joint_survey::segments::LineSegment;
//! use joint_survey::types::ScaleData;
//!
//! # fn example(raw: Vec<LineSegment>) -> Result<(), String> {
//! let analyzer = JointAnalyzer::new(AnalysisParams::default());
//! let report = analyzer.analyze(&raw, &ScaleData::new(250.0), PhotoSize::new(4000, 3000))?;
//! println!("P21 = {:.3} m/m²", report.stats.p21);
//! # Ok::<(), String>(())
//! # }
//! ```

pub mod params;
mod report;

pub use params::{AnalysisParams, PhotoSize};
pub use report::AnalysisReport;

use crate::clustering::{cluster_joints_with, JointSetSummary};
use crate::dedup::dedup_segments;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{StageCounts, TimingBreakdown};
use crate::segments::LineSegment;
use crate::stats::{fracture_stats, joint_set_stats};
use crate::types::{joints_from_segments, Joint, ScaleData};
use log::{debug, warn};
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct JointAnalyzer {
    params: AnalysisParams,
}

impl JointAnalyzer {
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Full pass over raw detector output.
    ///
    /// Fails only when the surviving segments cannot be numbered from
    /// `first_joint_id` without running past `u32::MAX`.
    pub fn analyze(
        &self,
        segments: &[LineSegment],
        scale: &ScaleData,
        photo: PhotoSize,
    ) -> Result<AnalysisReport, String> {
        debug!(
            "JointAnalyzer::analyze start segments={} photo={}x{} px/m={:.3}",
            segments.len(),
            photo.width_px,
            photo.height_px,
            scale.pixels_per_meter
        );
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let unique = timing.time("dedup", || dedup_segments(segments, &self.params.dedup));
        let joints = timing.time("joints", || {
            joints_from_segments(&unique, scale, self.params.first_joint_id)
        })?;

        let mut report = self.build_report(joints, scale, photo, timing);
        report.counts.raw_segments = segments.len();
        report.counts.deduplicated_segments = unique.len();
        report.timing.total_ms = elapsed_ms(total_start);
        debug!(
            "JointAnalyzer::analyze done joints={} sets={} total_ms={:.3}",
            report.counts.joints, report.counts.joint_sets, report.timing.total_ms
        );
        Ok(report)
    }

    /// Recomputes sets and statistics for an already curated joint list.
    pub fn recompute(
        &self,
        joints: &[Joint],
        scale: &ScaleData,
        photo: PhotoSize,
    ) -> AnalysisReport {
        let total_start = Instant::now();
        let mut report =
            self.build_report(joints.to_vec(), scale, photo, TimingBreakdown::default());
        report.timing.total_ms = elapsed_ms(total_start);
        debug!(
            "JointAnalyzer::recompute joints={} sets={} total_ms={:.3}",
            report.counts.joints, report.counts.joint_sets, report.timing.total_ms
        );
        report
    }

    fn build_report(
        &self,
        joints: Vec<Joint>,
        scale: &ScaleData,
        photo: PhotoSize,
        mut timing: TimingBreakdown,
    ) -> AnalysisReport {
        if !scale.is_valid() {
            warn!(
                "JointAnalyzer: scale not calibrated ({} px/m), lengths and densities will be zero",
                scale.pixels_per_meter
            );
        }
        let clustering = timing.time("cluster", || {
            cluster_joints_with(&joints, &self.params.clustering)
        });
        let sets = clustering.sets;

        let stats = timing.time("stats", || {
            fracture_stats(&joints, scale, photo.width_px, photo.height_px)
        });
        let set_stats = joint_set_stats(&sets, stats.area_analyzed);
        let joint_sets: Vec<JointSetSummary> = sets.iter().map(|s| s.summary()).collect();

        let counts = StageCounts {
            raw_segments: 0,
            deduplicated_segments: 0,
            joints: joints.len(),
            orientation_bins: clustering.orientation_bins,
            joint_sets: joint_sets.len(),
            joints_without_orientation: joints
                .iter()
                .filter(|j| j.orientation.is_none())
                .count(),
        };

        AnalysisReport {
            photo,
            scale: scale.clone(),
            joints,
            joint_sets,
            stats,
            set_stats,
            counts,
            timing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Endpoint, JointId, Point};

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::from_coords(x0, y0, x1, y1)
    }

    #[test]
    fn analyze_runs_all_stages() {
        let raw = vec![
            seg(0.0, 0.0, 300.0, 0.0),
            seg(2.0, 1.0, 298.0, -1.0),
            seg(0.0, 100.0, 500.0, 100.0),
            seg(50.0, 200.0, 50.0, 600.0),
        ];
        let analyzer = JointAnalyzer::new(AnalysisParams::default());
        let report = analyzer
            .analyze(&raw, &ScaleData::new(100.0), PhotoSize::new(1000, 800))
            .expect("analysis");

        assert_eq!(report.counts.raw_segments, 4);
        assert_eq!(report.counts.deduplicated_segments, 3);
        assert_eq!(report.joints.len(), 3);
        assert_eq!(report.joint_sets.len(), 2);
        assert_eq!(report.joint_sets[0].count, 2);
        assert!((report.stats.total_length - 12.0).abs() < 1e-9);
        assert!((report.stats.area_analyzed - 80.0).abs() < 1e-9);
        assert_eq!(report.set_stats.len(), 2);
        for label in ["dedup", "joints", "cluster", "stats"] {
            assert!(report.timing.stage(label).is_some(), "missing stage {label}");
        }
    }

    #[test]
    fn recompute_reflects_manual_edits() {
        let analyzer = JointAnalyzer::new(AnalysisParams::default());
        let scale = ScaleData::new(100.0);
        let photo = PhotoSize::new(1000, 800);
        let report = analyzer
            .analyze(&[seg(0.0, 0.0, 200.0, 0.0)], &scale, photo)
            .expect("analysis");

        let mut joints = report.joints.clone();
        joints[0].move_endpoint(Endpoint::End, Point::new(0.0, 400.0), &scale);
        joints[0].id = JointId(42);
        let updated = analyzer.recompute(&joints, &scale, photo);

        assert_eq!(updated.counts.raw_segments, 0);
        assert!((updated.stats.total_length - 4.0).abs() < 1e-9);
        assert_eq!(updated.joint_sets[0].bin_start_deg, 90.0);
        assert_eq!(updated.joint_sets[0].joint_ids, vec![JointId(42)]);
    }

    #[test]
    fn max_sets_truncates_but_counts_all_bins() {
        let raw: Vec<LineSegment> = (0..6)
            .map(|i| {
                let a = (i as f64 * 30.0 + 5.0).to_radians();
                let (cx, cy) = (500.0 + i as f64 * 1000.0, 500.0);
                seg(cx, cy, cx + 200.0 * a.cos(), cy + 200.0 * a.sin())
            })
            .collect();
        let params = AnalysisParams::default().with_max_sets(4);
        let report = JointAnalyzer::new(params)
            .analyze(&raw, &ScaleData::new(10.0), PhotoSize::new(8000, 1000))
            .expect("analysis");
        assert_eq!(report.counts.orientation_bins, 6);
        assert_eq!(report.joint_sets.len(), 4);
        assert_eq!(report.stats.joint_count, 6);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = JointAnalyzer::default()
            .analyze(&[], &ScaleData::new(0.0), PhotoSize::default())
            .expect("analysis");
        assert!(report.is_empty());
        assert!(report.joint_sets.is_empty());
        assert_eq!(report.stats.joint_count, 0);
        assert_eq!(report.stats.p21, 0.0);
    }

    #[test]
    fn first_joint_id_overflow_is_an_error() {
        let raw = vec![seg(0.0, 0.0, 300.0, 0.0), seg(0.0, 200.0, 0.0, 600.0)];
        let scale = ScaleData::new(100.0);
        let photo = PhotoSize::new(1000, 800);

        let params = AnalysisParams {
            first_joint_id: u32::MAX,
            ..AnalysisParams::default()
        };
        let err = JointAnalyzer::new(params)
            .analyze(&raw, &scale, photo)
            .unwrap_err();
        assert!(err.contains("overflow"), "unexpected message: {err}");

        let params = AnalysisParams {
            first_joint_id: u32::MAX - 1,
            ..AnalysisParams::default()
        };
        let report = JointAnalyzer::new(params)
            .analyze(&raw, &scale, photo)
            .expect("ids fit");
        let ids: Vec<JointId> = report.joints.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![JointId(u32::MAX - 1), JointId(u32::MAX)]);
    }
}
