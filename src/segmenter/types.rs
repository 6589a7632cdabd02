use crate::image::YCbCr422;
use nalgebra::Point2;
use serde::Serialize;
use std::time::Duration;

/// What bounds a segment at one of its ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeType {
    /// Image border or the end of the scan range.
    Border,
    /// Scanline resumes after leaving the robot's own silhouette.
    Start,
    /// Scanline enters the robot's own silhouette.
    End,
    /// Luminance increases across the edge.
    Rising,
    /// Luminance decreases across the edge.
    Falling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ScanAxis {
    Vertical,
    Horizontal,
}

/// Contiguous run of one scanline between two edges.
#[derive(Clone, Debug, Serialize)]
pub struct Segment {
    pub start: Point2<i32>,
    pub end: Point2<i32>,
    /// Per-channel median of the interior samples.
    pub color: YCbCr422,
    /// Field color membership of `color`, in [0, 1].
    pub field: f32,
    pub start_edge: EdgeType,
    pub end_edge: EdgeType,
    /// Number of scan samples taken inside the segment. A sample on the
    /// boundary belongs to the segment that starts there.
    pub samples: u32,
    /// Covered by the robot's own body. Occluded segments carry no samples
    /// and no color.
    pub occluded: bool,
}

impl Segment {
    /// Length along the scan axis in pixels.
    pub fn length(&self) -> i32 {
        (self.end.x - self.start.x).abs() + (self.end.y - self.start.y).abs()
    }

    /// True for the stretch of a scanline covered by the robot's own body.
    pub fn is_occluded(&self) -> bool {
        self.occluded
    }
}

/// One sampling path across the image.
#[derive(Clone, Debug, Serialize)]
pub struct Scanline {
    pub axis: ScanAxis,
    /// Sequential per-axis index.
    pub id: usize,
    /// Column (vertical) or row (horizontal) of the scanline.
    pub position: i32,
    /// Last pixel along the scan axis that was sampled.
    pub max_extent: i32,
    pub segments: Vec<Segment>,
}

impl Scanline {
    /// Segments share their boundaries and the first one starts at a border.
    pub fn is_contiguous(&self) -> bool {
        let first_ok = self
            .segments
            .first()
            .map_or(true, |s| s.start_edge == EdgeType::Border);
        first_ok
            && self.segments.windows(2).all(|w| w[0].end == w[1].start)
            && self.segments.iter().all(|s| s.length() > 0)
    }
}

/// All scanlines of one frame.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ImageSegments {
    pub valid: bool,
    pub timestamp: Duration,
    pub width: usize,
    pub height: usize,
    pub vertical: Vec<Scanline>,
    pub horizontal: Vec<Scanline>,
}

impl ImageSegments {
    pub fn clear(&mut self) {
        self.valid = false;
        self.vertical.clear();
        self.horizontal.clear();
    }

    pub fn segment_count(&self) -> usize {
        self.vertical
            .iter()
            .chain(self.horizontal.iter())
            .map(|s| s.segments.len())
            .sum()
    }
}
