//! Line segment geometry.
//!
//! Raw segments arrive from the external edge/line detector in pixel space.
//! Orientation is taken modulo 180°, since a trace drawn start→end and one
//! drawn end→start describe the same crack. See
//! `angle::normalize_bidirectional_deg`.
//!
//! Two distance measures are provided and they are not interchangeable:
//! - `distance_to_line`: unclamped, to the infinite supporting line (used by
//!   the collinear-containment duplicate test).
//! - `distance_to_segment`: clamped projection onto the segment (used for
//!   hit-testing joints).

mod segment;

pub use segment::LineSegment;

#[cfg(test)]
mod tests;
