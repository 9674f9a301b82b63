//! JSON configuration for the `joint_report` tool.
//!
//! ```json
//! {
//!   "segments": "out/raw_segments.json",
//!   "photo": { "image": "face.jpg" },
//!   "scale": { "calibration": { "p1": {"x": 10, "y": 20}, "p2": {"x": 510, "y": 20}, "realDistanceM": 2.0 } },
//!   "analysis": { "dedup": { "matchThresholdPx": 15 }, "clustering": { "maxSets": 12 } },
//!   "units": "metric",
//!   "output": { "reportJson": "out/report.json" }
//! }
//! ```

use crate::analyzer::{AnalysisParams, PhotoSize};
use crate::io::photo_size;
use crate::types::{Calibration, ScaleData};
use crate::units::UnitSystem;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportToolConfig {
    pub segments: PathBuf,
    pub photo: PhotoConfig,
    pub scale: ScaleConfig,
    #[serde(default)]
    pub analysis: AnalysisParams,
    #[serde(default)]
    pub units: UnitSystem,
    pub output: ReportOutputConfig,
}

/// Photo dimensions, given directly or probed from the image file.
/// Explicit dimensions win when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhotoConfig {
    pub image: Option<PathBuf>,
    pub width_px: Option<u32>,
    pub height_px: Option<u32>,
}

impl PhotoConfig {
    pub fn resolve(&self, base: &Path) -> Result<PhotoSize, String> {
        match (self.width_px, self.height_px, &self.image) {
            (Some(w), Some(h), _) => Ok(PhotoSize::new(w, h)),
            (_, _, Some(image)) => photo_size(&base.join(image)),
            _ => Err("Photo needs either widthPx and heightPx or an image path".to_string()),
        }
    }
}

/// Scale entered directly in pixels per metre, or derived from two
/// calibration points.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleConfig {
    pub pixels_per_meter: Option<f64>,
    pub calibration: Option<Calibration>,
}

impl ScaleConfig {
    pub fn resolve(&self) -> Result<ScaleData, String> {
        if let Some(cal) = &self.calibration {
            return ScaleData::from_calibration(cal.p1, cal.p2, cal.real_distance_m);
        }
        match self.pixels_per_meter {
            Some(ppm) if ppm.is_finite() && ppm > 0.0 => Ok(ScaleData::new(ppm)),
            Some(ppm) => Err(format!("pixelsPerMeter must be positive, got {ppm}")),
            None => Err("Scale needs either pixelsPerMeter or calibration".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutputConfig {
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ReportToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<ReportToolConfig, String> {
    serde_json::from_str(data).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config(
            r#"{
                "segments": "raw.json",
                "photo": { "widthPx": 1000, "heightPx": 800 },
                "scale": { "calibration": {
                    "p1": { "x": 0, "y": 0 }, "p2": { "x": 300, "y": 400 }, "realDistanceM": 2.0
                } },
                "analysis": { "dedup": { "matchThresholdPx": 20 }, "clustering": { "maxSets": 6 } },
                "units": "imperial",
                "output": { "reportJson": "out/report.json" }
            }"#,
        )
        .expect("config parses");
        assert_eq!(cfg.analysis.dedup.match_threshold_px, 20.0);
        assert_eq!(cfg.analysis.dedup.collinear_angle_tol_deg, 10.0);
        assert_eq!(cfg.analysis.clustering.max_sets, 6);
        assert_eq!(cfg.analysis.clustering.bin_width_deg, 15.0);
        assert_eq!(cfg.units, UnitSystem::Imperial);
        let scale = cfg.scale.resolve().expect("scale");
        assert!((scale.pixels_per_meter - 250.0).abs() < 1e-9);
        let photo = cfg.photo.resolve(Path::new(".")).expect("photo");
        assert_eq!(photo, PhotoSize::new(1000, 800));
    }

    #[test]
    fn analysis_section_is_optional() {
        let cfg = parse_config(
            r#"{
                "segments": "raw.json",
                "photo": { "widthPx": 640, "heightPx": 480 },
                "scale": { "pixelsPerMeter": 100 },
                "output": { "reportJson": "report.json" }
            }"#,
        )
        .expect("config parses");
        assert_eq!(cfg.analysis, AnalysisParams::default());
        assert_eq!(cfg.units, UnitSystem::Metric);
    }

    #[test]
    fn scale_requires_a_source() {
        assert!(ScaleConfig::default().resolve().is_err());
        let bad = ScaleConfig {
            pixels_per_meter: Some(0.0),
            calibration: None,
        };
        assert!(bad.resolve().is_err());
    }

    #[test]
    fn photo_requires_a_source() {
        assert!(PhotoConfig::default().resolve(Path::new(".")).is_err());
    }
}
