#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod pipeline;
pub mod services;
pub mod types;

// Stages. Each can be driven on its own; `VisionCycle` chains them.
pub mod landmarks;
pub mod robots;
pub mod segmenter;

pub mod angle;

// --- High-level re-exports -------------------------------------------------

pub use crate::pipeline::VisionCycle;
pub use crate::config::VisionConfig;
pub use crate::diagnostics::{CycleReport, TimingBreakdown};

pub use crate::landmarks::{LandmarkExtractor, LandmarkInput, LandmarkModel, LandmarkOptions};
pub use crate::robots::{RobotDetection, RobotDetector, RobotOptions};
pub use crate::segmenter::{ImageSegments, ScanlineSegmenter, SegmenterOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use field_vision::prelude::*;
/// use std::time::Duration;
///
/// # fn main() {
/// let frame = YCbCr422Image::filled(640, 480, YCbCr422::uniform(80, 100, 90));
/// let camera = PinholeGround::default();
/// let field_color = ChromaFieldColor::default();
/// let boundary = PolylineBoundary::default();
/// let silhouette = PolygonSilhouette::empty();
/// let ctx = FrameContext {
///     frame: &frame,
///     valid: true,
///     timestamp: Duration::from_millis(40),
///     projection: &camera,
///     field_color: &field_color,
///     field_boundary: &boundary,
///     silhouette: &silhouette,
/// };
///
/// let mut cycle = VisionCycle::new(VisionConfig::default());
/// let report = cycle.process(&ctx, &LandmarkInput::default());
/// println!("{}", report.summary());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{YCbCr422, YCbCr422Image};
    pub use crate::landmarks::LandmarkInput;
    pub use crate::services::{
        ChromaFieldColor, FrameContext, PinholeGround, PolygonSilhouette, PolylineBoundary,
    };
    pub use crate::{CycleReport, VisionConfig, VisionCycle};
}
