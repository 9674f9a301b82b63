use crate::angle::segment_angle_deg;
use crate::types::Point;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Candidate joint trace in pixel space, as produced by the line detector or
/// drawn by hand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Orientation in degrees, folded into [0, 180).
    pub fn angle(&self) -> f64 {
        segment_angle_deg(self.end.x - self.start.x, self.end.y - self.start.y)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        )
    }

    /// Line representation: ax + by + c = 0, with sqrt(a^2+b^2)=1.
    ///
    /// `None` for a zero-length segment, which spans no line.
    pub fn line(&self) -> Option<Vector3<f64>> {
        let a = self.end.y - self.start.y;
        let b = self.start.x - self.end.x;
        let c = self.end.x * self.start.y - self.start.x * self.end.y;
        let norm = (a * a + b * b).sqrt();
        if norm > 0.0 {
            Some(Vector3::new(a / norm, b / norm, c / norm))
        } else {
            None
        }
    }

    /// Perpendicular distance from `p` to the infinite line through the
    /// segment. Degenerates to the distance to `start` for a zero-length
    /// segment.
    pub fn distance_to_line(&self, p: Point) -> f64 {
        match self.line() {
            Some(l) => (l.x * p.x + l.y * p.y + l.z).abs(),
            None => self.start.distance(p),
        }
    }

    /// Distance from `p` to the nearest point on the segment itself; the
    /// projection parameter is clamped to [0, 1].
    pub fn distance_to_segment(&self, p: Point) -> f64 {
        let a = self.start.to_vector();
        let d = self.end.to_vector() - a;
        let len_sq = d.norm_squared();
        if len_sq <= 0.0 {
            return self.start.distance(p);
        }
        let t = ((p.to_vector() - a).dot(&d) / len_sq).clamp(0.0, 1.0);
        (a + d * t - p.to_vector()).norm()
    }
}
