//! Field landmarks from line, goal post and penalty mark candidates.
//!
//! Each cycle is a linear pipeline over three independent inputs. An input
//! that is not valid this cycle only disables the passes that depend on it:
//!
//! 1. goal posts are buffered across cycles ([`GoalPostBuffer`]) and paired
//!    into goals,
//! 2. line candidates are filtered once for general use and once for the
//!    center circle,
//! 3. the center circle is found by voting,
//! 4. the penalty area is anchored at the penalty mark (or a resting ball
//!    during a shoot-out),
//! 5. orthogonal line pairs become X/T/L intersections,
//! 6. lines no landmark consumed are republished.
//!
//! The goal post buffer is the only state that survives between cycles.

mod circle;
mod goals;
mod intersections;
mod lines;
mod options;
mod penalty;
mod types;

pub use circle::PointCluster;
pub use goals::{BufferedGoalPost, GoalPostBuffer};
pub use intersections::orientation as intersection_orientation;
pub use options::LandmarkOptions;
pub use types::{
    BallState, CenterCircle, GamePhase, GameState, GameStateFlags, Goal, GoalPostData,
    Intersection, IntersectionType, LandmarkInput, LandmarkModel, LineData, LineInfo,
    PenaltyArea, PenaltySpotData,
};

use log::debug;
use std::collections::HashSet;

/// Landmark extraction with a goal post memory.
pub struct LandmarkExtractor {
    options: LandmarkOptions,
    goal_posts: GoalPostBuffer,
}

impl LandmarkExtractor {
    pub fn new(options: LandmarkOptions) -> Self {
        let goal_posts = GoalPostBuffer::new(options.max_buffered_goal_posts);
        Self {
            options,
            goal_posts,
        }
    }

    pub fn options(&self) -> &LandmarkOptions {
        &self.options
    }

    pub fn goal_posts(&self) -> &GoalPostBuffer {
        &self.goal_posts
    }

    /// Runs every landmark pass for one cycle.
    pub fn process(&mut self, input: &LandmarkInput) -> LandmarkModel {
        let mut model = LandmarkModel {
            valid: true,
            timestamp: input.timestamp,
            ..Default::default()
        };

        self.update_goal_posts(input);
        model.goals = self.goal_posts.pairs(&self.options);

        let options = &self.options;
        let raw_lines: &[LineInfo] = input
            .lines
            .as_ref()
            .map(|d| d.lines.as_slice())
            .unwrap_or(&[]);
        if input.lines.is_none() {
            debug!("LandmarkExtractor::process line data invalid, skipping line passes");
        }
        let general = lines::general_filter(raw_lines, options, input.low_noise_tilt);
        let mut consumed: HashSet<usize> = HashSet::new();

        if options.detect_center_circle && !raw_lines.is_empty() {
            let circle_lines = lines::circle_filter(raw_lines, options);
            if let Some(found) = circle::detect_center_circle(&circle_lines, raw_lines, options) {
                consumed.extend(found.used_line_ids.iter().copied());
                model.center_circles.push(found);
            }
        }

        if options.detect_penalty_areas {
            if let Some(spot) = penalty::penalty_spot(input, options) {
                let area = penalty::detect_penalty_area(spot, &general, options);
                consumed.extend(area.used_line_ids.iter().copied());
                model.penalty_areas.push(area);
            }
        }

        if options.detect_intersections {
            model.intersections = intersections::detect_intersections(&general, options);
            for intersection in &model.intersections {
                consumed.extend(intersection.used_line_ids.iter().copied());
            }
        }

        model.unused_lines = general
            .into_iter()
            .filter(|l| !consumed.contains(&l.id))
            .enumerate()
            .map(|(id, l)| LineInfo { id, ..l })
            .collect();

        debug!(
            "LandmarkExtractor::process goals={} circles={} penalty_areas={} intersections={} unused_lines={}",
            model.goals.len(),
            model.center_circles.len(),
            model.penalty_areas.len(),
            model.intersections.len(),
            model.unused_lines.len()
        );
        model
    }

    fn update_goal_posts(&mut self, input: &LandmarkInput) {
        let options = &self.options;
        if !options.buffer_goal_posts {
            self.goal_posts.clear();
            if let Some(data) = &input.goal_posts {
                for post in &data.posts {
                    self.goal_posts
                        .insert(*post, data.timestamp, options.goal_post_association_radius);
                }
            }
            return;
        }
        self.goal_posts.apply_odometry(&input.odometry);
        match &input.goal_posts {
            Some(data) => self
                .goal_posts
                .integrate(data, options.goal_post_association_radius),
            None => debug!("LandmarkExtractor::process goal post data invalid"),
        }
        self.goal_posts
            .evict_older_than(input.timestamp, options.goal_post_max_age());
    }
}
