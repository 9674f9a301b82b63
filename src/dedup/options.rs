use serde::{Deserialize, Serialize};

/// Tolerances for collapsing duplicate detections of one joint trace.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DedupOptions {
    /// Pixel tolerance shared by the endpoint and perpendicular-distance tests.
    pub match_threshold_px: f64,
    /// Maximum orientation difference (degrees) for the collinear test.
    pub collinear_angle_tol_deg: f64,
}

impl Default for DedupOptions {
    fn default() -> Self {
        Self {
            match_threshold_px: 15.0,
            collinear_angle_tol_deg: 10.0,
        }
    }
}

impl DedupOptions {
    pub fn with_threshold(mut self, match_threshold_px: f64) -> Self {
        self.match_threshold_px = match_threshold_px;
        self
    }
}
