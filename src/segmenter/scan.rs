//! Incremental construction of one scanline's segments.
use super::color::segment_color;
use super::options::SegmenterOptions;
use super::types::{EdgeType, ScanAxis, Scanline, Segment};
use crate::image::{YCbCr422, YCbCr422Image};
use crate::services::FieldColor;
use nalgebra::Point2;

struct Run {
    start: i32,
    start_edge: EdgeType,
    occluded: bool,
}

pub(crate) struct ScanBuilder<'a> {
    frame: &'a YCbCr422Image,
    field_color: &'a dyn FieldColor,
    options: &'a SegmenterOptions,
    axis: ScanAxis,
    position: i32,
    run: Run,
    /// Positions of the samples taken since the current run opened.
    samples: Vec<i32>,
    segments: Vec<Segment>,
}

impl<'a> ScanBuilder<'a> {
    pub(crate) fn new(
        frame: &'a YCbCr422Image,
        field_color: &'a dyn FieldColor,
        options: &'a SegmenterOptions,
        axis: ScanAxis,
        position: i32,
        start: i32,
    ) -> Self {
        Self {
            frame,
            field_color,
            options,
            axis,
            position,
            run: Run {
                start,
                start_edge: EdgeType::Border,
                occluded: false,
            },
            samples: Vec::new(),
            segments: Vec::new(),
        }
    }

    fn point(&self, along: i32) -> Point2<i32> {
        match self.axis {
            ScanAxis::Vertical => Point2::new(self.position, along),
            ScanAxis::Horizontal => Point2::new(along, self.position),
        }
    }

    /// Records a sample taken at `along`. Occluded runs take no samples.
    pub(crate) fn count_sample(&mut self, along: i32) {
        if !self.run.occluded {
            self.samples.push(along);
        }
    }

    fn close(&mut self, at: i32, end_edge: EdgeType, samples: u32) {
        debug_assert!(at > self.run.start, "closing empty run at {at}");
        let (color, field) = if self.run.occluded {
            (YCbCr422::default(), 0.0)
        } else {
            let color = segment_color(
                self.frame,
                self.axis,
                self.position,
                self.run.start,
                at,
                self.options,
            );
            (color, self.field_color.field_score(&color))
        };
        let segment = Segment {
            start: self.point(self.run.start),
            end: self.point(at),
            color,
            field,
            start_edge: self.run.start_edge,
            end_edge,
            samples,
            occluded: self.run.occluded,
        };
        self.segments.push(segment);
    }

    /// Ends the current run at `at` and opens the next one there.
    ///
    /// An edge at the very start of the run only relabels the run's start.
    /// Edges fire a few samples after their peak; samples at or beyond `at`
    /// move to the new run.
    pub(crate) fn split(&mut self, at: i32, edge: EdgeType, occluded: bool) {
        if at <= self.run.start {
            if !(self.segments.is_empty() && self.run.start_edge == EdgeType::Border) {
                self.run.start_edge = edge;
            }
            self.run.occluded = occluded;
            if occluded {
                self.samples.clear();
            }
            return;
        }
        let before = self.samples.iter().filter(|&&p| p < at).count() as u32;
        self.close(at, edge, before);
        self.samples.retain(|&p| p >= at);
        if occluded {
            self.samples.clear();
        }
        self.run = Run {
            start: at,
            start_edge: edge,
            occluded,
        };
    }

    pub(crate) fn is_occluded(&self) -> bool {
        self.run.occluded
    }

    /// Closes the last run at `end` and returns the finished scanline.
    pub(crate) fn finish(mut self, id: usize, end: i32, end_edge: EdgeType) -> Scanline {
        if end > self.run.start {
            let samples = self.samples.len() as u32;
            self.close(end, end_edge, samples);
        } else if let Some(last) = self.segments.last_mut() {
            last.end_edge = end_edge;
        }
        let scanline = Scanline {
            axis: self.axis,
            id,
            position: self.position,
            max_extent: end,
            segments: self.segments,
        };
        debug_assert!(scanline.is_contiguous(), "non-contiguous scanline {id}");
        scanline
    }
}
