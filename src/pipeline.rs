//! One vision cycle: segmentation, robot detection and landmark extraction.
use crate::config::VisionConfig;
use crate::diagnostics::{CycleReport, FrameDescriptor, TimingBreakdown};
use crate::landmarks::{LandmarkExtractor, LandmarkInput};
use crate::robots::RobotDetector;
use crate::segmenter::ScanlineSegmenter;
use crate::services::FrameContext;
use log::debug;
use std::time::Instant;

/// Owns the three stages and runs them in order for each frame.
///
/// The landmark extractor keeps its goal post buffer between calls, so one
/// `VisionCycle` should be used per camera stream.
pub struct VisionCycle {
    segmenter: ScanlineSegmenter,
    robots: RobotDetector,
    landmarks: LandmarkExtractor,
}

impl VisionCycle {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            segmenter: ScanlineSegmenter::new(config.segmenter),
            robots: RobotDetector::new(config.robots),
            landmarks: LandmarkExtractor::new(config.landmarks),
        }
    }

    pub fn segmenter(&self) -> &ScanlineSegmenter {
        &self.segmenter
    }

    pub fn robots(&self) -> &RobotDetector {
        &self.robots
    }

    pub fn landmarks(&self) -> &LandmarkExtractor {
        &self.landmarks
    }

    /// Processes one frame together with the landmark candidates of this cycle.
    pub fn process(
        &mut self,
        ctx: &FrameContext<'_>,
        input: &LandmarkInput,
    ) -> CycleReport<'_> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let segments = self.segmenter.process(ctx);
        timings.record("segmenter", start);

        let start = Instant::now();
        let robots = self.robots.process(ctx, segments);
        timings.record("robots", start);

        let start = Instant::now();
        let landmarks = self.landmarks.process(input);
        timings.record("landmarks", start);

        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let report = CycleReport {
            frame: FrameDescriptor {
                width: ctx.frame.width_px(),
                height: ctx.frame.height_px(),
                valid: ctx.valid,
                timestamp: ctx.timestamp,
            },
            timings,
            segments,
            robots,
            landmarks,
        };
        debug!("VisionCycle::process {}", report.summary());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{YCbCr422, YCbCr422Image};
    use crate::services::{ChromaFieldColor, PinholeGround, PolygonSilhouette, PolylineBoundary};
    use std::time::Duration;

    #[test]
    fn report_borrows_the_segmenter_output() {
        let frame = YCbCr422Image::filled(64, 48, YCbCr422::uniform(80, 100, 90));
        let camera = PinholeGround {
            cx: 32.0,
            cy: 24.0,
            ..Default::default()
        };
        let field_color = ChromaFieldColor::default();
        let boundary = PolylineBoundary::default();
        let silhouette = PolygonSilhouette::empty();
        let ctx = FrameContext {
            frame: &frame,
            valid: true,
            timestamp: Duration::from_millis(40),
            projection: &camera,
            field_color: &field_color,
            field_boundary: &boundary,
            silhouette: &silhouette,
        };
        let mut cycle = VisionCycle::new(VisionConfig::default());
        let report = cycle.process(&ctx, &LandmarkInput::default());
        assert!(report.segments.valid);
        assert!(!report.segments.vertical.is_empty());
        let published: *const _ = report.segments;
        drop(report);
        assert!(std::ptr::eq(published, cycle.segmenter().segments()));
    }
}
