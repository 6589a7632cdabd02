//! Per-scanline evidence for obstacles.
use super::options::RobotOptions;
use crate::segmenter::Scanline;
use crate::services::FieldBoundary;
use crate::types::Pixel;
use serde::Serialize;

/// Obstacle evidence gathered along one vertical scanline.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Column {
    /// Image column of the scanline.
    pub x: i32,
    /// Bottom rows of non-field segments inside the field, top to bottom.
    pub edge_points: Vec<i32>,
    /// Lowest edge point, i.e. the obstacle foot nearest to the camera.
    pub seed: Option<i32>,
}

impl Column {
    /// Number of edge points with `top <= y <= bottom`.
    pub fn count_between(&self, top: i32, bottom: i32) -> usize {
        self.edge_points
            .iter()
            .filter(|&&y| y >= top && y <= bottom)
            .count()
    }
}

/// Rebuilds `out` with one column per vertical scanline.
pub(crate) fn build_columns(
    scanlines: &[Scanline],
    boundary: &dyn FieldBoundary,
    options: &RobotOptions,
    out: &mut Vec<Column>,
) {
    out.clear();
    for scan in scanlines {
        let mut column = Column {
            x: scan.position,
            ..Default::default()
        };
        let mut run = 0usize;
        for segment in &scan.segments {
            let center = Pixel::new(
                scan.position as f32,
                (segment.start.y + segment.end.y) as f32 * 0.5,
            );
            let non_field = !segment.is_occluded() && segment.field <= options.max_field_score;
            if non_field && boundary.is_inside_field(&center) {
                run += 1;
                if run > options.min_non_field_run {
                    column.edge_points.push(segment.end.y);
                    column.seed = Some(segment.end.y);
                }
            } else {
                run = 0;
            }
        }
        out.push(column);
    }
}

/// Median of each seed with its two neighbours. A column whose neighbourhood
/// has a missing seed (including the outermost columns) ends up unseeded.
pub(crate) fn smooth_seeds(columns: &[Column]) -> Vec<Option<i32>> {
    (0..columns.len())
        .map(|i| {
            if i == 0 || i + 1 >= columns.len() {
                return None;
            }
            let mut window = [
                columns[i - 1].seed?,
                columns[i].seed?,
                columns[i + 1].seed?,
            ];
            window.sort_unstable();
            Some(window[1])
        })
        .collect()
}
