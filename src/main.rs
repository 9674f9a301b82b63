use joint_survey::segments::LineSegment;
use joint_survey::types::ScaleData;
use joint_survey::{AnalysisParams, JointAnalyzer, PhotoSize};

fn main() {
    // Demo stub: two joint families plus a few duplicate detections
    let raw = vec![
        LineSegment::from_coords(100.0, 100.0, 900.0, 140.0),
        LineSegment::from_coords(104.0, 102.0, 880.0, 141.0),
        LineSegment::from_coords(300.0, 113.0, 600.0, 127.0),
        LineSegment::from_coords(100.0, 400.0, 850.0, 430.0),
        LineSegment::from_coords(200.0, 50.0, 260.0, 700.0),
        LineSegment::from_coords(600.0, 60.0, 640.0, 720.0),
        LineSegment::from_coords(602.0, 64.0, 641.0, 700.0),
    ];
    let analyzer = JointAnalyzer::new(AnalysisParams::default());
    let report = match analyzer.analyze(&raw, &ScaleData::new(200.0), PhotoSize::new(1000, 800)) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    println!(
        "joints={} sets={} p21={:.3} frequency={:.3} total_ms={:.3}",
        report.stats.joint_count,
        report.joint_sets.len(),
        report.stats.p21,
        report.stats.frequency,
        report.timing.total_ms
    );
}
