//! Vertical scanlines: fixed column spacing, fixed sampling stride.
use super::edge::EdgeDetector;
use super::options::SegmenterOptions;
use super::scan::ScanBuilder;
use super::types::{EdgeType, ScanAxis, Scanline};
use crate::services::FrameContext;

/// Columns that get a vertical scanline.
pub(crate) fn columns(width: usize, options: &SegmenterOptions) -> impl Iterator<Item = i32> {
    let spacing = options.vertical_spacing_px.max(1);
    (spacing / 2..width).step_by(spacing).map(|x| x as i32)
}

/// Scans column `x` from the horizon down to the image bottom or the top of
/// the robot's own silhouette, whichever comes first.
pub(crate) fn scan_vertical(
    ctx: &FrameContext<'_>,
    options: &SegmenterOptions,
    id: usize,
    x: i32,
) -> Scanline {
    let frame = ctx.frame;
    let height = frame.height_px() as i32;
    let horizon = ctx.projection.horizon_y(x as f32);
    let start = if horizon.is_finite() {
        (horizon.ceil() as i32).clamp(0, height - 1)
    } else {
        0
    };
    let (end, end_edge) = match ctx.silhouette.top_at_column(x as f32) {
        Some(top) if top < (height - 1) as f32 => ((top.floor() as i32).max(start), EdgeType::End),
        _ => (height - 1, EdgeType::Border),
    };

    let luma_at = |y: i32| {
        if options.median_luma_vertical {
            frame.median_luma_3(x as usize, y as usize)
        } else {
            frame.luma(x as usize, y as usize)
        }
    };

    let mut builder = ScanBuilder::new(
        frame,
        ctx.field_color,
        options,
        ScanAxis::Vertical,
        x,
        start,
    );
    let mut detector = EdgeDetector::new(options.edge_threshold_vertical, luma_at(start), start);
    builder.count_sample(start);

    let step = options.vertical_sample_step_px.max(1) as i32;
    let mut y = start + step;
    while y <= end {
        if let Some((edge, at)) = detector.push(y, luma_at(y)) {
            builder.split(at, edge, false);
        }
        builder.count_sample(y);
        y += step;
    }
    builder.finish(id, end, end_edge)
}
