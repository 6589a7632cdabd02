//! Gradient-threshold edge detector shared by both scan axes.
//!
//! The detector follows the luma difference between consecutive samples. An
//! edge fires when the difference leaves the band beyond `±threshold`; its
//! position is the sample with the largest absolute difference since the
//! previous edge.
use super::types::EdgeType;

#[derive(Clone, Debug)]
pub(crate) struct EdgeDetector {
    threshold: i32,
    last_luma: i32,
    last_diff: i32,
    peak_diff: i32,
    peak_pos: i32,
}

impl EdgeDetector {
    pub(crate) fn new(threshold: i32, first_luma: u8, first_pos: i32) -> Self {
        Self {
            threshold: threshold.max(1),
            last_luma: first_luma as i32,
            last_diff: 0,
            peak_diff: 0,
            peak_pos: first_pos,
        }
    }

    /// Restart after a gap in the scan (e.g. the robot's own body).
    pub(crate) fn reset(&mut self, luma: u8, pos: i32) {
        *self = Self::new(self.threshold, luma, pos);
    }

    /// Feed the sample at `pos`; returns the edge that ended with this sample.
    pub(crate) fn push(&mut self, pos: i32, luma: u8) -> Option<(EdgeType, i32)> {
        let luma = luma as i32;
        let diff = luma - self.last_luma;
        let edge = if self.last_diff >= self.threshold && diff < self.threshold {
            Some((EdgeType::Rising, self.peak_pos))
        } else if self.last_diff <= -self.threshold && diff > -self.threshold {
            Some((EdgeType::Falling, self.peak_pos))
        } else {
            None
        };
        if edge.is_some() {
            self.peak_diff = 0;
        }
        if diff.abs() > self.peak_diff {
            self.peak_diff = diff.abs();
            self.peak_pos = pos;
        }
        self.last_luma = luma;
        self.last_diff = diff;
        edge
    }
}
