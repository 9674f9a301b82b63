use crate::angle::normalize_bidirectional_deg;
use crate::types::Joint;
use std::collections::BTreeMap;

/// Fixed-width orientation histogram over [0, 180) that remembers which
/// joints fell into each bin.
pub(crate) struct OrientationBins<'a> {
    bin_width: f64,
    bins: BTreeMap<usize, Bin<'a>>,
    defaulted: usize,
}

#[derive(Default)]
pub(crate) struct Bin<'a> {
    pub(crate) members: Vec<&'a Joint>,
    pub(crate) angle_sum: f64,
}

impl<'a> OrientationBins<'a> {
    pub(crate) fn new(bin_width: f64) -> Self {
        debug_assert!(bin_width > 0.0, "bin width must be positive");
        OrientationBins {
            bin_width,
            bins: BTreeMap::new(),
            defaulted: 0,
        }
    }

    pub(crate) fn accumulate(&mut self, joint: &'a Joint) {
        let raw = match joint.orientation {
            Some(angle) => angle,
            None => {
                self.defaulted += 1;
                0.0
            }
        };
        let angle = normalize_bidirectional_deg(raw);
        // NaN saturates to bin 0 rather than being dropped.
        let idx = (angle / self.bin_width).floor() as usize;
        let bin = self.bins.entry(idx).or_default();
        bin.members.push(joint);
        bin.angle_sum += angle;
    }

    /// Joints that had no orientation and were binned as 0°.
    pub(crate) fn defaulted(&self) -> usize {
        self.defaulted
    }

    /// Non-empty bins in ascending angle order.
    pub(crate) fn into_bins(self) -> impl Iterator<Item = (f64, Bin<'a>)> {
        let width = self.bin_width;
        self.bins
            .into_iter()
            .map(move |(idx, bin)| (idx as f64 * width, bin))
    }
}
