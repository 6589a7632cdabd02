//! Goal post buffer and goal pairing.
//!
//! Posts are kept robot-relative. Every cycle the buffer is moved by the
//! inverse odometry delta, fresh candidates are merged in, stale posts are
//! evicted and every pair at goal width becomes a goal.
use super::options::LandmarkOptions;
use super::types::{Goal, GoalPostData};
use crate::types::GroundPoint;
use log::debug;
use nalgebra::Isometry2;
use serde::Serialize;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BufferedGoalPost {
    pub position: GroundPoint,
    pub last_seen: Duration,
}

/// Bounded collection of goal posts carried across cycles.
#[derive(Clone, Debug)]
pub struct GoalPostBuffer {
    posts: Vec<BufferedGoalPost>,
    capacity: usize,
    last_source_timestamp: Option<Duration>,
}

impl GoalPostBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            posts: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
            last_source_timestamp: None,
        }
    }

    pub fn posts(&self) -> &[BufferedGoalPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn clear(&mut self) {
        self.posts.clear();
    }

    /// Re-expresses buffered posts after the robot moved by `odometry`.
    pub fn apply_odometry(&mut self, odometry: &Isometry2<f32>) {
        let inverse = odometry.inverse();
        for post in &mut self.posts {
            post.position = inverse * post.position;
        }
    }

    /// Merges `position` into the first nearby post seen in a different image,
    /// or appends it. The oldest post is dropped when the buffer is full.
    pub fn insert(&mut self, position: GroundPoint, seen: Duration, association_radius: f32) {
        let radius_sq = association_radius * association_radius;
        if let Some(post) = self.posts.iter_mut().find(|p| {
            p.last_seen != seen && nalgebra::distance_squared(&p.position, &position) <= radius_sq
        }) {
            post.position = nalgebra::center(&post.position, &position);
            post.last_seen = seen;
            return;
        }
        if self.posts.len() >= self.capacity {
            if let Some(oldest) = self
                .posts
                .iter()
                .enumerate()
                .min_by_key(|(_, p)| p.last_seen)
                .map(|(i, _)| i)
            {
                self.posts.remove(oldest);
            }
        }
        self.posts.push(BufferedGoalPost {
            position,
            last_seen: seen,
        });
    }

    /// Adds the candidates of `data` unless that image was already processed.
    pub fn integrate(&mut self, data: &GoalPostData, association_radius: f32) {
        if self.last_source_timestamp == Some(data.timestamp) {
            debug!("GoalPostBuffer::integrate skipping already processed candidates");
            return;
        }
        self.last_source_timestamp = Some(data.timestamp);
        for post in &data.posts {
            self.insert(*post, data.timestamp, association_radius);
        }
    }

    /// Drops posts not seen for longer than `max_age`.
    pub fn evict_older_than(&mut self, now: Duration, max_age: Duration) {
        self.posts
            .retain(|p| now.saturating_sub(p.last_seen) <= max_age);
    }

    /// Goals formed by the buffered posts.
    pub fn pairs(&self, options: &LandmarkOptions) -> Vec<Goal> {
        pair_goals(&self.posts, options)
    }
}

/// Every unique pair of posts whose separation matches a goal.
pub(crate) fn pair_goals(posts: &[BufferedGoalPost], options: &LandmarkOptions) -> Vec<Goal> {
    let expected = options.goal_post_separation();
    let mut goals = Vec::new();
    for (i, a) in posts.iter().enumerate() {
        for b in &posts[i + 1..] {
            let distance = nalgebra::distance(&a.position, &b.position);
            if (distance - expected).abs() <= options.max_goal_post_distance_deviation {
                goals.push(ordered_goal(a.position, b.position));
            }
        }
    }
    goals
}

/// Left is the post with the larger lateral (`y`) coordinate.
pub(crate) fn ordered_goal(a: GroundPoint, b: GroundPoint) -> Goal {
    if a.y >= b.y {
        Goal { left: a, right: b }
    } else {
        Goal { left: b, right: a }
    }
}
