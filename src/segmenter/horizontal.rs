//! Horizontal scanlines with ground-distance-adaptive placement.
//!
//! Rows are placed from the bottom of the image towards the horizon so that
//! consecutive rows are roughly `horizontal_row_step_m` apart on the ground.
//! Within a row the sampling stride is the pixel length of a
//! `horizontal_sample_step_m` lateral ground step at that row's distance.
use super::edge::EdgeDetector;
use super::options::SegmenterOptions;
use super::scan::ScanBuilder;
use super::types::{EdgeType, ScanAxis, Scanline};
use crate::services::{FrameContext, Projection};
use crate::types::{GroundPoint, Pixel};
use nalgebra::Vector2;

/// Placement of one horizontal scanline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowPlan {
    pub y: i32,
    pub stride: i32,
}

pub(crate) fn plan_rows(
    width: usize,
    height: usize,
    projection: &dyn Projection,
    options: &SegmenterOptions,
) -> Vec<RowPlan> {
    let mut rows = Vec::new();
    if width == 0 || height == 0 {
        return rows;
    }
    let cx = width as f32 * 0.5;
    let horizon = projection.horizon_y(cx);
    let horizon = if horizon.is_finite() { horizon } else { -1.0 };
    let min_spacing = options.min_horizontal_row_spacing_px.max(1);
    let mut y = height as i32 - 1;

    while (y as f32) > horizon && y >= 0 && rows.len() < options.max_horizontal_scanlines {
        let Some(ground) = projection.pixel_to_ground(&Pixel::new(cx, y as f32)) else {
            break;
        };
        rows.push(RowPlan {
            y,
            stride: sample_stride(projection, &ground, cx, options),
        });

        let dist = ground.coords.norm();
        if dist <= f32::EPSILON {
            break;
        }
        let next_ground = ground + ground.coords / dist * options.horizontal_row_step_m;
        match projection.ground_to_pixel(&next_ground) {
            Some(p) if p.y.is_finite() => y = (p.y.floor() as i32).min(y - min_spacing),
            _ => break,
        }
    }
    rows
}

fn sample_stride(
    projection: &dyn Projection,
    ground: &GroundPoint,
    cx: f32,
    options: &SegmenterOptions,
) -> i32 {
    let max_stride = options.max_horizontal_sample_step_px.max(1);
    let dist = ground.coords.norm();
    if dist <= f32::EPSILON {
        return 1;
    }
    let lateral = Vector2::new(-ground.y, ground.x) / dist * options.horizontal_sample_step_m;
    match projection.ground_to_pixel(&(ground + lateral)) {
        Some(p) if p.x.is_finite() => ((p.x - cx).abs().round() as i32).clamp(1, max_stride),
        _ => max_stride,
    }
}

/// Scans row `y` left to right. Crossing the robot's own silhouette closes the
/// current segment with `End` and resumes with `Start` once the body is left.
pub(crate) fn scan_horizontal(
    ctx: &FrameContext<'_>,
    options: &SegmenterOptions,
    id: usize,
    row: RowPlan,
) -> Scanline {
    let frame = ctx.frame;
    let y = row.y;
    let end = frame.width_px() as i32 - 1;
    let on_body = |x: i32| ctx.silhouette.is_on_silhouette(&Pixel::new(x as f32, y as f32));

    let mut builder = ScanBuilder::new(
        frame,
        ctx.field_color,
        options,
        ScanAxis::Horizontal,
        y,
        0,
    );
    let first_luma = frame.luma(0, y as usize);
    let mut detector = EdgeDetector::new(options.edge_threshold_horizontal, first_luma, 0);
    if on_body(0) {
        builder.split(0, EdgeType::End, true);
    }
    builder.count_sample(0);

    let stride = row.stride.max(1);
    let mut x = stride;
    while x <= end {
        let luma = frame.luma(x as usize, y as usize);
        match (builder.is_occluded(), on_body(x)) {
            (false, true) => builder.split(x, EdgeType::End, true),
            (true, false) => {
                builder.split(x, EdgeType::Start, false);
                detector.reset(luma, x);
            }
            (true, true) => {}
            (false, false) => {
                if let Some((edge, at)) = detector.push(x, luma) {
                    builder.split(at, edge, false);
                }
            }
        }
        builder.count_sample(x);
        x += stride;
    }
    builder.finish(id, end, EdgeType::Border)
}
