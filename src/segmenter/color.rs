//! Representative color of a segment.
//!
//! Long segments take the per-channel median of five interior samples, medium
//! ones of three, short ones a single sample at their center.
use super::options::SegmenterOptions;
use super::types::ScanAxis;
use crate::image::{YCbCr422, YCbCr422Image};

const MAX_SAMPLES: usize = 5;

pub(crate) fn sample_count(length: i32, options: &SegmenterOptions) -> usize {
    if length > options.color_samples_long_min_px {
        5
    } else if length > options.color_samples_medium_min_px {
        3
    } else {
        1
    }
}

/// Median color of the segment `[start, end]` on the scanline at `position`.
pub(crate) fn segment_color(
    frame: &YCbCr422Image,
    axis: ScanAxis,
    position: i32,
    start: i32,
    end: i32,
    options: &SegmenterOptions,
) -> YCbCr422 {
    debug_assert!(end >= start, "segment end {end} precedes start {start}");
    let length = end - start;
    let n = sample_count(length, options);
    let mut samples = [YCbCr422::default(); MAX_SAMPLES];
    for (i, sample) in samples.iter_mut().take(n).enumerate() {
        let along = start + length * (i as i32 + 1) / (n as i32 + 1);
        let (x, y) = match axis {
            ScanAxis::Vertical => (position, along),
            ScanAxis::Horizontal => (along, position),
        };
        *sample = frame.cell(x as usize, y as usize);
    }
    median_cell(&samples[..n])
}

/// Per-channel median of a few cells.
pub(crate) fn median_cell(cells: &[YCbCr422]) -> YCbCr422 {
    debug_assert!(!cells.is_empty() && cells.len() <= MAX_SAMPLES);
    let mid = cells.len() / 2;
    let channel = |f: fn(&YCbCr422) -> u8| {
        let mut values = [0u8; MAX_SAMPLES];
        for (v, c) in values.iter_mut().zip(cells) {
            *v = f(c);
        }
        let values = &mut values[..cells.len()];
        *values.select_nth_unstable(mid).1
    };
    YCbCr422 {
        y1: channel(|c| c.y1),
        cb: channel(|c| c.cb),
        y2: channel(|c| c.y2),
        cr: channel(|c| c.cr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_follows_length_bands() {
        let options = SegmenterOptions::default();
        assert_eq!(sample_count(2, &options), 1);
        assert_eq!(sample_count(5, &options), 3);
        assert_eq!(sample_count(40, &options), 5);
    }

    #[test]
    fn median_rejects_outlier_cells() {
        let cells = [
            YCbCr422::uniform(80, 100, 90),
            YCbCr422::uniform(255, 128, 128),
            YCbCr422::uniform(82, 101, 91),
        ];
        assert_eq!(median_cell(&cells), YCbCr422::uniform(82, 101, 91));
    }

    #[test]
    fn long_vertical_segment_ignores_a_single_bright_pixel() {
        let mut frame = YCbCr422Image::filled(4, 40, YCbCr422::uniform(80, 100, 90));
        *frame.cell_mut(2, 10) = YCbCr422::uniform(250, 128, 128);
        let color = segment_color(
            &frame,
            ScanAxis::Vertical,
            2,
            0,
            30,
            &SegmenterOptions::default(),
        );
        assert_eq!(color, YCbCr422::uniform(80, 100, 90));
    }
}
