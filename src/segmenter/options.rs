use serde::Deserialize;

/// Parameters of the scanline segmenter.
///
/// Luminance thresholds are in 8-bit luma units; `*_m` values are metres on
/// the ground plane.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SegmenterOptions {
    /// Horizontal distance between vertical scanlines.
    pub vertical_spacing_px: usize,
    /// Sampling stride along vertical scanlines.
    pub vertical_sample_step_px: usize,
    pub edge_threshold_vertical: i32,
    pub edge_threshold_horizontal: i32,
    /// Use the median of three rows as luma on vertical scanlines.
    pub median_luma_vertical: bool,
    /// Ground distance between consecutive horizontal scanlines.
    pub horizontal_row_step_m: f32,
    /// Ground distance between consecutive samples of a horizontal scanline.
    pub horizontal_sample_step_m: f32,
    pub min_horizontal_row_spacing_px: i32,
    pub max_horizontal_sample_step_px: i32,
    pub max_horizontal_scanlines: usize,
    /// Segments longer than this get five color samples.
    pub color_samples_long_min_px: i32,
    /// Segments longer than this (and not long) get three color samples.
    pub color_samples_medium_min_px: i32,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            vertical_spacing_px: 8,
            vertical_sample_step_px: 2,
            edge_threshold_vertical: 24,
            edge_threshold_horizontal: 24,
            median_luma_vertical: false,
            horizontal_row_step_m: 0.15,
            horizontal_sample_step_m: 0.05,
            min_horizontal_row_spacing_px: 2,
            max_horizontal_sample_step_px: 16,
            max_horizontal_scanlines: 64,
            color_samples_long_min_px: 6,
            color_samples_medium_min_px: 3,
        }
    }
}
