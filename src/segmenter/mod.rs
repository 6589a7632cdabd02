//! Scanline segmentation of camera frames.
//!
//! The segmenter walks two families of scan paths over a YCbCr 4:2:2 frame:
//!
//! - Vertical scanlines at a fixed column spacing, sampled every
//!   `vertical_sample_step_px` rows from the horizon downwards. They feed the
//!   robot detector and general structure analysis.
//! - Horizontal scanlines whose rows and sampling stride adapt to the ground
//!   distance they see, so sampling density stays roughly constant on the
//!   field despite perspective.
//!
//! Both families share one gradient-threshold edge detector (`edge`). Each
//! detected luminance edge closes the current segment at the steepest sample
//! and opens the next. Segment colors are medians of a few interior samples
//! and are scored by the field color classifier.
//!
//! The robot's own body is excluded: vertical scanlines stop at the topmost
//! silhouette edge; horizontal scanlines mark the occluded stretch with `End`
//! and `Start` edges.
//!
//! Invariants
//! - Segments of a scanline are contiguous: `segments[i].end == segments[i + 1].start`.
//! - The first segment of every scanline starts with [`EdgeType::Border`].
//! - An invalid frame yields an empty, invalid [`ImageSegments`].

mod color;
mod edge;
mod horizontal;
mod options;
mod scan;
mod types;
mod vertical;

pub use options::SegmenterOptions;
pub use types::{EdgeType, ImageSegments, ScanAxis, Scanline, Segment};

use crate::services::FrameContext;
use log::debug;

/// Per-frame scanline segmentation. Owns the segments of the most recent
/// frame; `process` hands out a borrow of them.
pub struct ScanlineSegmenter {
    options: SegmenterOptions,
    segments: ImageSegments,
}

impl ScanlineSegmenter {
    pub fn new(options: SegmenterOptions) -> Self {
        Self {
            options,
            segments: ImageSegments::default(),
        }
    }

    pub fn options(&self) -> &SegmenterOptions {
        &self.options
    }

    /// Segments of the most recent frame.
    pub fn segments(&self) -> &ImageSegments {
        &self.segments
    }

    /// Rebuilds all scanlines for `ctx.frame`.
    pub fn process(&mut self, ctx: &FrameContext<'_>) -> &ImageSegments {
        self.segments.clear();
        self.segments.timestamp = ctx.timestamp;
        self.segments.width = ctx.frame.width_px();
        self.segments.height = ctx.frame.height_px();
        if !ctx.valid {
            debug!("ScanlineSegmenter::process frame invalid, skipping");
            return &self.segments;
        }
        if ctx.frame.width_px() < 2 || ctx.frame.height_px() < 2 {
            debug!(
                "ScanlineSegmenter::process frame too small ({}x{})",
                ctx.frame.width_px(),
                ctx.frame.height_px()
            );
            return &self.segments;
        }

        let options = &self.options;
        self.segments.vertical = vertical::columns(ctx.frame.width_px(), options)
            .enumerate()
            .map(|(id, x)| vertical::scan_vertical(ctx, options, id, x))
            .collect();

        let rows = horizontal::plan_rows(
            ctx.frame.width_px(),
            ctx.frame.height_px(),
            ctx.projection,
            options,
        );
        self.segments.horizontal = rows
            .into_iter()
            .enumerate()
            .map(|(id, row)| horizontal::scan_horizontal(ctx, options, id, row))
            .collect();

        self.segments.valid = true;
        debug!(
            "ScanlineSegmenter::process vertical={} horizontal={} segments={}",
            self.segments.vertical.len(),
            self.segments.horizontal.len(),
            self.segments.segment_count()
        );
        &self.segments
    }
}

#[cfg(test)]
mod tests;
