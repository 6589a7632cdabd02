use super::horizontal::plan_rows;
use super::*;
use crate::image::{YCbCr422, YCbCr422Image};
use crate::services::{
    ChromaFieldColor, PinholeGround, PolygonSilhouette, PolylineBoundary, Projection,
};
use crate::types::{GroundPoint, Pixel};
use std::time::Duration;

const GREEN: YCbCr422 = YCbCr422::uniform(80, 100, 90);
const WHITE: YCbCr422 = YCbCr422::uniform(220, 128, 128);

/// Camera looking straight down at nothing: horizon above the image, no ground.
struct NoGround;

impl Projection for NoGround {
    fn pixel_to_ground(&self, _pixel: &Pixel) -> Option<GroundPoint> {
        None
    }
    fn ground_to_pixel(&self, _point: &GroundPoint) -> Option<Pixel> {
        None
    }
    fn horizon_y(&self, _x: f32) -> f32 {
        f32::NEG_INFINITY
    }
}

fn segment_with(
    frame: &YCbCr422Image,
    projection: &dyn Projection,
    silhouette: &PolygonSilhouette,
    options: SegmenterOptions,
) -> ImageSegments {
    let field_color = ChromaFieldColor::default();
    let boundary = PolylineBoundary::default();
    let ctx = FrameContext {
        frame,
        valid: true,
        timestamp: Duration::from_millis(40),
        projection,
        field_color: &field_color,
        field_boundary: &boundary,
        silhouette,
    };
    let mut segmenter = ScanlineSegmenter::new(options);
    segmenter.process(&ctx).clone()
}

fn step_frame(height: usize, split: usize, low: u8, high: u8) -> YCbCr422Image {
    let mut frame = YCbCr422Image::filled(4, height, YCbCr422::uniform(low, 128, 128));
    for y in split..height {
        for x in 0..4 {
            frame.set_luma(x, y, high);
        }
    }
    frame
}

fn striped_field(width: usize, height: usize) -> YCbCr422Image {
    let mut frame = YCbCr422Image::filled(width, height, GREEN);
    for y in 0..height {
        for x in 0..width {
            let on_line = (y / 37) % 3 == 1 && y % 37 < 6 || (x + y / 3) % 97 < 5;
            if on_line {
                *frame.cell_mut(x, y) = WHITE;
            }
        }
    }
    frame
}

#[test]
fn luminance_step_yields_one_rising_edge_and_two_segments() {
    let frame = step_frame(80, 40, 100, 180);
    let options = SegmenterOptions {
        vertical_spacing_px: 4,
        edge_threshold_vertical: 30,
        ..Default::default()
    };
    let segments = segment_with(&frame, &NoGround, &PolygonSilhouette::empty(), options);
    assert!(segments.valid);
    assert_eq!(segments.vertical.len(), 1);
    assert!(segments.horizontal.is_empty(), "no ground, no horizontal rows");

    let scan = &segments.vertical[0];
    let edges: Vec<EdgeType> = scan
        .segments
        .iter()
        .flat_map(|s| [s.start_edge, s.end_edge])
        .collect();
    assert_eq!(scan.segments.len(), 2, "segments={:?}", scan.segments);
    assert_eq!(
        edges.iter().filter(|e| **e == EdgeType::Rising).count(),
        2,
        "the single rising edge is shared by both segments"
    );
    assert!(!edges.contains(&EdgeType::Falling));
    assert_eq!(scan.segments[0].end.y, 40);
    assert_eq!(scan.segments[0].start_edge, EdgeType::Border);
    assert_eq!(scan.segments[1].end_edge, EdgeType::Border);
    assert_eq!(scan.segments[0].color.y1, 100);
    assert_eq!(scan.segments[1].color.y1, 180);
    // Rows 0..=38 before the step, 40..=78 from the step on.
    assert_eq!(scan.segments[0].samples, 20);
    assert_eq!(scan.segments[1].samples, 20);
}

#[test]
fn invalid_frame_publishes_nothing() {
    let frame = step_frame(40, 20, 100, 180);
    let field_color = ChromaFieldColor::default();
    let boundary = PolylineBoundary::default();
    let silhouette = PolygonSilhouette::empty();
    let ctx = FrameContext {
        frame: &frame,
        valid: false,
        timestamp: Duration::ZERO,
        projection: &NoGround,
        field_color: &field_color,
        field_boundary: &boundary,
        silhouette: &silhouette,
    };
    let mut segmenter = ScanlineSegmenter::new(SegmenterOptions::default());
    let out = segmenter.process(&ctx);
    assert!(!out.valid);
    assert!(out.vertical.is_empty() && out.horizontal.is_empty());
}

#[test]
fn median_luma_suppresses_single_row_noise() {
    let mut frame = YCbCr422Image::filled(4, 40, YCbCr422::uniform(100, 128, 128));
    for x in 0..4 {
        frame.set_luma(x, 20, 250);
    }
    let raw = segment_with(
        &frame,
        &NoGround,
        &PolygonSilhouette::empty(),
        SegmenterOptions {
            vertical_spacing_px: 4,
            ..Default::default()
        },
    );
    let filtered = segment_with(
        &frame,
        &NoGround,
        &PolygonSilhouette::empty(),
        SegmenterOptions {
            vertical_spacing_px: 4,
            median_luma_vertical: true,
            ..Default::default()
        },
    );
    assert_eq!(raw.vertical[0].segments.len(), 3);
    assert_eq!(filtered.vertical[0].segments.len(), 1);
}

#[test]
fn scanlines_are_contiguous_with_silhouette() {
    let frame = striped_field(320, 240);
    let camera = PinholeGround {
        cx: 160.0,
        cy: 120.0,
        focal_px: 280.0,
        ..Default::default()
    };
    let silhouette = PolygonSilhouette::new(vec![
        Pixel::new(120.0, 239.0),
        Pixel::new(140.0, 200.0),
        Pixel::new(180.0, 200.0),
        Pixel::new(200.0, 239.0),
    ]);
    let segments = segment_with(&frame, &camera, &silhouette, SegmenterOptions::default());
    assert!(!segments.vertical.is_empty());
    assert!(!segments.horizontal.is_empty());
    for scan in segments.vertical.iter().chain(segments.horizontal.iter()) {
        assert!(!scan.segments.is_empty(), "scanline {:?} {} empty", scan.axis, scan.id);
        assert_eq!(scan.segments[0].start_edge, EdgeType::Border);
        for pair in scan.segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "gap in {:?} {}", scan.axis, scan.id);
        }
        for seg in &scan.segments {
            assert!(seg.length() > 0);
            assert!((0.0..=1.0).contains(&seg.field));
        }
    }
}

#[test]
fn vertical_scanline_stops_at_silhouette_top() {
    let frame = YCbCr422Image::filled(16, 60, GREEN);
    let silhouette = PolygonSilhouette::new(vec![
        Pixel::new(0.0, 45.0),
        Pixel::new(15.0, 45.0),
        Pixel::new(15.0, 59.0),
        Pixel::new(0.0, 59.0),
    ]);
    let options = SegmenterOptions {
        vertical_spacing_px: 8,
        ..Default::default()
    };
    let segments = segment_with(&frame, &NoGround, &silhouette, options);
    for scan in &segments.vertical {
        assert_eq!(scan.max_extent, 45);
        let last = scan.segments.last().expect("one segment");
        assert_eq!(last.end.y, 45);
        assert_eq!(last.end_edge, EdgeType::End);
    }
}

#[test]
fn horizontal_scanline_marks_silhouette_crossing() {
    let frame = YCbCr422Image::filled(320, 240, GREEN);
    let camera = PinholeGround {
        cx: 160.0,
        cy: 120.0,
        focal_px: 280.0,
        ..Default::default()
    };
    let silhouette = PolygonSilhouette::new(vec![
        Pixel::new(100.0, 180.0),
        Pixel::new(220.0, 180.0),
        Pixel::new(220.0, 240.0),
        Pixel::new(100.0, 240.0),
    ]);
    let segments = segment_with(&frame, &camera, &silhouette, SegmenterOptions::default());
    let bottom = segments
        .horizontal
        .first()
        .expect("rows start at the image bottom");
    assert_eq!(bottom.position, 239);
    let kinds: Vec<(EdgeType, EdgeType)> = bottom
        .segments
        .iter()
        .map(|s| (s.start_edge, s.end_edge))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (EdgeType::Border, EdgeType::End),
            (EdgeType::End, EdgeType::Start),
            (EdgeType::Start, EdgeType::Border),
        ]
    );
    assert!(bottom.segments[1].is_occluded());
    assert!(!bottom.segments[0].is_occluded() && !bottom.segments[2].is_occluded());
    assert!(bottom.segments[0].field > 0.9, "field color on both sides");
    assert!(bottom.segments[2].field > 0.9);
}

#[test]
fn row_entirely_on_silhouette_is_occluded() {
    let frame = YCbCr422Image::filled(320, 240, GREEN);
    let camera = PinholeGround {
        cx: 160.0,
        cy: 120.0,
        focal_px: 280.0,
        ..Default::default()
    };
    let silhouette = PolygonSilhouette::new(vec![
        Pixel::new(-5.0, 200.0),
        Pixel::new(330.0, 200.0),
        Pixel::new(330.0, 250.0),
        Pixel::new(-5.0, 250.0),
    ]);
    let segments = segment_with(&frame, &camera, &silhouette, SegmenterOptions::default());
    let bottom = segments
        .horizontal
        .first()
        .expect("rows start at the image bottom");
    assert_eq!(bottom.position, 239);
    assert_eq!(bottom.segments.len(), 1, "segments={:?}", bottom.segments);
    let seg = &bottom.segments[0];
    assert_eq!(seg.start_edge, EdgeType::Border);
    assert!(seg.is_occluded());
    assert_eq!(seg.samples, 0);
    assert_eq!(seg.field, 0.0);
    assert!(bottom.is_contiguous());
}

#[test]
fn horizontal_rows_thin_out_towards_horizon() {
    let camera = PinholeGround::default();
    let options = SegmenterOptions::default();
    let rows = plan_rows(640, 480, &camera, &options);
    assert!(rows.len() > 3, "rows={rows:?}");
    assert_eq!(rows[0].y, 479);
    let horizon = camera.horizon_y(320.0);
    for pair in rows.windows(2) {
        assert!(pair[1].y < pair[0].y, "rows must move up: {rows:?}");
        assert!(pair[0].y - pair[1].y >= options.min_horizontal_row_spacing_px);
        assert!(pair[1].stride <= pair[0].stride, "stride shrinks with distance");
    }
    assert!(rows.iter().all(|r| r.y as f32 > horizon));
}
