use crate::segments::LineSegment;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// 2-D coordinate in image pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

/// Pixel-to-metre conversion derived from a user calibration.
///
/// `calibration` is absent when the scale was entered directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleData {
    pub pixels_per_meter: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<Calibration>,
}

/// Two picked image points and the real-world distance between them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    pub p1: Point,
    pub p2: Point,
    pub real_distance_m: f64,
}

impl ScaleData {
    pub fn new(pixels_per_meter: f64) -> Self {
        Self {
            pixels_per_meter,
            calibration: None,
        }
    }

    /// Derives `pixels_per_meter = |p1 - p2| / real_distance_m`.
    pub fn from_calibration(p1: Point, p2: Point, real_distance_m: f64) -> Result<Self, String> {
        if !real_distance_m.is_finite() || real_distance_m <= 0.0 {
            return Err(format!(
                "Calibration distance must be a positive number of metres, got {real_distance_m}"
            ));
        }
        let pixel_distance = p1.distance(p2);
        if !pixel_distance.is_finite() || pixel_distance <= 0.0 {
            return Err(format!(
                "Calibration points ({}, {}) and ({}, {}) must be distinct",
                p1.x, p1.y, p2.x, p2.y
            ));
        }
        Ok(Self {
            pixels_per_meter: pixel_distance / real_distance_m,
            calibration: Some(Calibration {
                p1,
                p2,
                real_distance_m,
            }),
        })
    }

    /// False for a zero, negative or non-finite scale.
    pub fn is_valid(&self) -> bool {
        self.pixels_per_meter.is_finite() && self.pixels_per_meter > 0.0
    }

    /// Converts a pixel length to metres; 0 when the scale is degenerate.
    pub fn pixels_to_meters(&self, pixels: f64) -> f64 {
        if self.is_valid() {
            pixels / self.pixels_per_meter
        } else {
            0.0
        }
    }
}

/// Identifier of a joint within one analysis project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointId(pub u32);

/// How a joint entered the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointSource {
    #[default]
    Detected,
    Manual,
}

/// Which end of a joint a drag moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// A measured rock discontinuity trace.
///
/// `orientation` is stored in degrees in [0, 180). It is optional because a
/// manually placed joint may not have been recomputed yet; the clusterer
/// substitutes 0 for a missing value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joint {
    pub id: JointId,
    pub start: Point,
    pub end: Point,
    pub length_pixels: f64,
    pub length_meters: f64,
    #[serde(default)]
    pub orientation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub source: JointSource,
}

impl Joint {
    pub fn from_segment(
        id: JointId,
        segment: &LineSegment,
        scale: &ScaleData,
        source: JointSource,
    ) -> Self {
        let length_pixels = segment.length();
        Self {
            id,
            start: segment.start,
            end: segment.end,
            length_pixels,
            length_meters: scale.pixels_to_meters(length_pixels),
            orientation: Some(segment.angle()),
            confidence: None,
            source,
        }
    }

    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.start, self.end)
    }

    /// Moves one endpoint and recomputes length and orientation.
    pub fn move_endpoint(&mut self, endpoint: Endpoint, to: Point, scale: &ScaleData) {
        match endpoint {
            Endpoint::Start => self.start = to,
            Endpoint::End => self.end = to,
        }
        let segment = self.segment();
        self.length_pixels = segment.length();
        self.length_meters = scale.pixels_to_meters(self.length_pixels);
        self.orientation = Some(segment.angle());
    }

    /// Pixel distance from `point` to the nearest point on the trace.
    pub fn distance_to(&self, point: Point) -> f64 {
        self.segment().distance_to_segment(point)
    }
}

/// Builds joints from segments, numbering them from `first_id`.
///
/// Fails when the numbering would run past `u32::MAX`.
pub fn joints_from_segments(
    segments: &[LineSegment],
    scale: &ScaleData,
    first_id: u32,
) -> Result<Vec<Joint>, String> {
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            let id = u32::try_from(i)
                .ok()
                .and_then(|offset| first_id.checked_add(offset))
                .ok_or_else(|| {
                    format!(
                        "Joint id overflow: {} segments do not fit after first id {first_id}",
                        segments.len()
                    )
                })?;
            Ok(Joint::from_segment(
                JointId(id),
                seg,
                scale,
                JointSource::Detected,
            ))
        })
        .collect()
}

/// Returns the joint closest to `point` within `tolerance_px`, if any.
pub fn find_joint_near(joints: &[Joint], point: Point, tolerance_px: f64) -> Option<&Joint> {
    joints
        .iter()
        .map(|j| (j, j.distance_to(point)))
        .filter(|(_, d)| *d <= tolerance_px)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(j, _)| j)
}
