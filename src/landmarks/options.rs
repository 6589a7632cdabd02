use serde::Deserialize;
use std::time::Duration;

/// Field dimensions and tuning of the landmark extractor.
///
/// Distances are metres, angles degrees, ages seconds. The defaults follow
/// the SPL field; every value is deployment-tuned and may be overridden.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LandmarkOptions {
    pub goal_inner_width: f32,
    pub goal_post_diameter: f32,
    pub center_circle_radius: f32,
    pub penalty_area_length: f32,
    pub penalty_mark_distance: f32,

    /// Keep goal posts across cycles; otherwise goals are instantaneous.
    pub buffer_goal_posts: bool,
    pub max_buffered_goal_posts: usize,
    pub goal_post_association_radius: f32,
    pub goal_post_max_age_s: f32,
    pub max_goal_post_distance_deviation: f32,

    pub min_line_length: f32,
    pub max_projection_distance: f32,
    /// Projection distance limit while the body tilt is low-noise.
    pub max_projection_distance_low_noise: f32,

    pub detect_center_circle: bool,
    pub circle_min_line_length: f32,
    pub circle_max_line_length: f32,
    pub circle_max_projection_distance: f32,
    pub circle_cluster_max_distance: f32,
    pub circle_min_votes: usize,
    pub circle_orthogonality_tolerance_deg: f32,
    pub circle_orientation_min_line_length: f32,
    pub circle_orientation_max_distance: f32,

    pub detect_penalty_areas: bool,
    pub penalty_min_line_length: f32,
    pub penalty_distance_tolerance: f32,
    pub penalty_max_line_extension: f32,
    /// Maximum age of a resting ball used as penalty mark in a shoot-out.
    pub ball_as_penalty_spot_max_age_s: f32,

    pub detect_intersections: bool,
    pub intersection_orthogonality_tolerance_deg: f32,
    pub intersection_min_overlap: f32,
    pub intersection_max_extension: f32,
}

impl Default for LandmarkOptions {
    fn default() -> Self {
        Self {
            goal_inner_width: 1.5,
            goal_post_diameter: 0.1,
            center_circle_radius: 0.75,
            penalty_area_length: 1.65,
            penalty_mark_distance: 1.3,

            buffer_goal_posts: true,
            max_buffered_goal_posts: 16,
            goal_post_association_radius: 0.4,
            goal_post_max_age_s: 5.0,
            max_goal_post_distance_deviation: 0.4,

            min_line_length: 0.3,
            max_projection_distance: 3.0,
            max_projection_distance_low_noise: 5.0,

            detect_center_circle: true,
            circle_min_line_length: 0.1,
            circle_max_line_length: 1.0,
            circle_max_projection_distance: 2.5,
            circle_cluster_max_distance: 0.25,
            circle_min_votes: 3,
            circle_orthogonality_tolerance_deg: 20.0,
            circle_orientation_min_line_length: 0.75,
            circle_orientation_max_distance: 0.2,

            detect_penalty_areas: true,
            penalty_min_line_length: 0.5,
            penalty_distance_tolerance: 0.25,
            penalty_max_line_extension: 0.5,
            ball_as_penalty_spot_max_age_s: 0.2,

            detect_intersections: true,
            intersection_orthogonality_tolerance_deg: 10.0,
            intersection_min_overlap: 0.1,
            intersection_max_extension: 0.3,
        }
    }
}

impl LandmarkOptions {
    /// Separation of two posts of the same goal, center to center.
    pub fn goal_post_separation(&self) -> f32 {
        self.goal_inner_width + self.goal_post_diameter
    }

    /// Distance from the penalty mark to the front line of the penalty area.
    pub fn penalty_line_distance(&self) -> f32 {
        self.penalty_area_length - self.penalty_mark_distance
    }

    pub fn goal_post_max_age(&self) -> Duration {
        Duration::from_secs_f32(self.goal_post_max_age_s.max(0.0))
    }

    pub fn ball_as_penalty_spot_max_age(&self) -> Duration {
        Duration::from_secs_f32(self.ball_as_penalty_spot_max_age_s.max(0.0))
    }
}
