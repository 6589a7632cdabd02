//! Line candidate filters.
use super::options::LandmarkOptions;
use super::types::LineInfo;

/// Lines trusted for goals, penalty areas and intersections.
///
/// The projection distance limit is relaxed while the body tilt is low-noise.
pub(crate) fn general_filter(
    lines: &[LineInfo],
    options: &LandmarkOptions,
    low_noise_tilt: bool,
) -> Vec<LineInfo> {
    let max_projection_distance = if low_noise_tilt {
        options.max_projection_distance_low_noise
    } else {
        options.max_projection_distance
    };
    lines
        .iter()
        .filter(|l| {
            l.length >= options.min_line_length && l.projection_distance <= max_projection_distance
        })
        .cloned()
        .collect()
}

/// Short, nearby lines that may be chords of the center circle.
pub(crate) fn circle_filter(lines: &[LineInfo], options: &LandmarkOptions) -> Vec<LineInfo> {
    lines
        .iter()
        .filter(|l| {
            l.length >= options.circle_min_line_length
                && l.length <= options.circle_max_line_length
                && l.projection_distance <= options.circle_max_projection_distance
        })
        .cloned()
        .collect()
}
