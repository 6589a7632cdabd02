//! Robot detection from vertical scanlines.
//!
//! Non-field segments inside the field boundary leave edge points in their
//! column. The lowest edge point of each column is a foot candidate ("seed").
//! Detection is a greedy non-maximum suppression: the nearest seed is boxed
//! with the projected size of a robot, the box is slid sideways to the
//! densest placement, and accepted boxes delete the columns they cover.

mod column;
mod options;
mod search;

pub use column::Column;
pub use options::RobotOptions;

use crate::segmenter::ImageSegments;
use crate::services::FrameContext;
use crate::types::{GroundPoint, Pixel};
use log::debug;
use serde::Serialize;
use std::cmp::Reverse;
use std::time::Duration;

/// Box that passed the density test.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RobotCandidate {
    /// Column the search started from.
    pub seed_column: usize,
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub density: f32,
    /// Box reaches the bottom of the image; the feet are not visible.
    pub cut: bool,
    /// Center of the robot on the ground, unset for cut boxes.
    pub position: Option<GroundPoint>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RobotDetection {
    pub valid: bool,
    pub timestamp: Duration,
    pub positions: Vec<GroundPoint>,
    pub candidates: Vec<RobotCandidate>,
}

/// Greedy robot detector. Reuses its column buffer across frames.
pub struct RobotDetector {
    options: RobotOptions,
    columns: Vec<Column>,
}

impl RobotDetector {
    pub fn new(options: RobotOptions) -> Self {
        Self {
            options,
            columns: Vec::new(),
        }
    }

    pub fn options(&self) -> &RobotOptions {
        &self.options
    }

    /// Columns of the most recent frame.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn process(&mut self, ctx: &FrameContext<'_>, segments: &ImageSegments) -> RobotDetection {
        let mut detection = RobotDetection {
            timestamp: segments.timestamp,
            ..Default::default()
        };
        if !segments.valid {
            debug!("RobotDetector::process segments invalid, skipping");
            self.columns.clear();
            return detection;
        }
        detection.valid = true;

        let options = &self.options;
        column::build_columns(
            &segments.vertical,
            ctx.field_boundary,
            options,
            &mut self.columns,
        );
        let columns = &self.columns;
        let seeds = column::smooth_seeds(columns);
        let spacing = match columns.as_slice() {
            [a, b, ..] => (b.x - a.x).max(1) as f32,
            _ => 1.0,
        };
        let bottom_limit = segments.height as i32 - 1 - options.bottom_margin_px;

        let mut visited = vec![false; columns.len()];
        let mut deleted = vec![false; columns.len()];
        loop {
            // Nearest seed first; the leftmost wins ties.
            let next = seeds
                .iter()
                .enumerate()
                .filter(|(i, _)| !visited[*i] && !deleted[*i])
                .filter_map(|(i, s)| s.map(|y| (i, y)))
                .min_by_key(|&(i, y)| (Reverse(y), i));
            let Some((index, seed_y)) = next else {
                break;
            };
            visited[index] = true;

            let seed_px = Pixel::new(columns[index].x as f32, seed_y as f32);
            let Some(seed_ground) = ctx.projection.pixel_to_ground(&seed_px) else {
                debug!("RobotDetector::process seed {seed_px:?} does not project");
                continue;
            };
            let Some(width_px) =
                search::box_width_px(ctx.projection, &seed_ground, options.robot_width_m)
            else {
                debug!("RobotDetector::process no box for seed at {seed_ground:?}");
                continue;
            };
            let box_columns = ((width_px / spacing).round() as usize).max(1);
            let top = seed_y - options.box_height_px(width_px).round() as i32;
            let Some(window) = search::best_window(columns, index, box_columns, top, seed_y)
            else {
                continue;
            };
            if window.density < options.min_edge_density {
                debug!(
                    "RobotDetector::process reject column {index}: density {:.2} < {:.2}",
                    window.density, options.min_edge_density
                );
                continue;
            }

            let end = window.start + window.len;
            let left = columns[window.start].x;
            let right = columns[end - 1].x;
            let cut = seed_y >= bottom_limit;
            let padding_ratio = if cut {
                options.cut_padding_ratio
            } else {
                options.padding_ratio
            };
            let padding = (window.len as f32 * padding_ratio).ceil() as usize;
            let lo = window.start.saturating_sub(padding);
            let hi = (end + padding).min(columns.len());
            deleted[lo..hi].iter_mut().for_each(|d| *d = true);

            let position = if cut {
                None
            } else {
                let foot = Pixel::new((left + right) as f32 * 0.5, seed_y as f32);
                ctx.projection
                    .pixel_to_ground(&foot)
                    .map(|p| push_outward(p, options.robot_diameter_m * 0.5))
            };
            if let Some(p) = position {
                detection.positions.push(p);
            }
            detection.candidates.push(RobotCandidate {
                seed_column: index,
                left,
                right,
                top,
                bottom: seed_y,
                density: window.density,
                cut,
                position,
            });
        }

        debug!(
            "RobotDetector::process columns={} candidates={} robots={}",
            columns.len(),
            detection.candidates.len(),
            detection.positions.len()
        );
        detection
    }
}

/// Moves a foot point away from the camera by `distance`.
fn push_outward(point: GroundPoint, distance: f32) -> GroundPoint {
    let norm = point.coords.norm();
    if norm <= f32::EPSILON {
        return point;
    }
    point + point.coords * (distance / norm)
}
