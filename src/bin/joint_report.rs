use joint_survey::config::load_config;
use joint_survey::io::{load_segments, write_json_file};
use joint_survey::units::UnitSystem;
use joint_survey::{AnalysisReport, JointAnalyzer};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config_path = Path::new(&config_path);
    let config = load_config(config_path)?;
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));

    let segments = load_segments(&base.join(&config.segments))?;
    let photo = config.photo.resolve(base)?;
    let scale = config.scale.resolve()?;

    let analyzer = JointAnalyzer::new(config.analysis.clone());
    let report = analyzer.analyze(&segments, &scale, photo)?;

    let output = base.join(&config.output.report_json);
    write_json_file(&output, &report)?;

    print_summary(&report, config.units);
    println!("Saved report to {}", output.display());
    Ok(())
}

fn print_summary(report: &AnalysisReport, units: UnitSystem) {
    let stats = &report.stats;
    let len = units.length_label();
    println!(
        "Segments: {} raw, {} after dedup",
        report.counts.raw_segments, report.counts.deduplicated_segments
    );
    if report.is_empty() {
        println!("No joints to analyze");
        return;
    }
    println!(
        "Joints: {}  total {:.2} {len}  mean {:.2} {len}  median {:.2} {len}  \
         range {:.2}-{:.2} {len}",
        stats.joint_count,
        units.length(stats.total_length),
        units.length(stats.mean_length),
        units.length(stats.median_length),
        units.length(stats.min_length),
        units.length(stats.max_length),
    );
    println!(
        "Area: {:.2} {}  P21: {:.4} {}  frequency: {:.4} /{len}",
        units.area(stats.area_analyzed),
        units.area_label(),
        units.intensity(stats.p21),
        units.intensity_label(),
        units.frequency(stats.frequency),
    );
    for set in &report.joint_sets {
        println!(
            "  Set {:>2}: {:>3}°  n={:<3} total {:.2} {len}  {}",
            set.id,
            set.mean_orientation,
            set.count,
            units.length(set.total_length),
            set.color
        );
    }
}

fn usage() -> String {
    "Usage: joint_report <config.json>".to_string()
}
