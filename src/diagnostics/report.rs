use super::timing::TimingBreakdown;
use crate::landmarks::LandmarkModel;
use crate::robots::RobotDetection;
use crate::segmenter::ImageSegments;
use serde::Serialize;
use std::time::Duration;

/// Outputs of one vision cycle. Segments are borrowed from the segmenter
/// that produced them.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport<'a> {
    pub frame: FrameDescriptor,
    pub timings: TimingBreakdown,
    pub segments: &'a ImageSegments,
    pub robots: RobotDetection,
    pub landmarks: LandmarkModel,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDescriptor {
    pub width: usize,
    pub height: usize,
    pub valid: bool,
    pub timestamp: Duration,
}

impl CycleReport<'_> {
    /// One-line summary for logs and tool output.
    pub fn summary(&self) -> String {
        format!(
            "frame {}x{} valid={} scanlines={}/{} segments={} robots={} goals={} circles={} penalty_areas={} intersections={} total_ms={:.3}",
            self.frame.width,
            self.frame.height,
            self.frame.valid,
            self.segments.vertical.len(),
            self.segments.horizontal.len(),
            self.segments.segment_count(),
            self.robots.positions.len(),
            self.landmarks.goals.len(),
            self.landmarks.center_circles.len(),
            self.landmarks.penalty_areas.len(),
            self.landmarks.intersections.len(),
            self.timings.total_ms
        )
    }
}
