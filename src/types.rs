//! Shared geometric types.
//!
//! Ground coordinates are robot-relative metres with `x` pointing forward and
//! `y` to the left. Pixel coordinates have their origin in the top-left corner
//! of the image with `y` growing downwards.
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Position on the ground plane, robot-relative, in metres.
pub type GroundPoint = Point2<f32>;

/// Position in the image, in pixels.
pub type Pixel = Point2<f32>;

/// Finite line segment on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundLine {
    pub p1: GroundPoint,
    pub p2: GroundPoint,
}

impl GroundLine {
    pub fn new(p1: GroundPoint, p2: GroundPoint) -> Self {
        Self { p1, p2 }
    }

    pub fn vector(&self) -> Vector2<f32> {
        self.p2 - self.p1
    }

    pub fn length(&self) -> f32 {
        self.vector().norm()
    }

    pub fn midpoint(&self) -> GroundPoint {
        nalgebra::center(&self.p1, &self.p2)
    }

    /// Unit direction from `p1` to `p2`, zero for degenerate lines.
    pub fn direction(&self) -> Vector2<f32> {
        let v = self.vector();
        let len = v.norm();
        if len > f32::EPSILON {
            v / len
        } else {
            Vector2::zeros()
        }
    }

    /// Unit normal (direction rotated by +90°).
    pub fn normal(&self) -> Vector2<f32> {
        let d = self.direction();
        Vector2::new(-d.y, d.x)
    }

    /// Direction angle of `p1 → p2` in (-π, π].
    pub fn angle(&self) -> f32 {
        let v = self.vector();
        v.y.atan2(v.x)
    }

    /// Perpendicular distance from `point` to the infinite line through the segment.
    pub fn distance_to_line(&self, point: &GroundPoint) -> f32 {
        self.normal().dot(&(point - self.p1)).abs()
    }

    /// Foot of the perpendicular from `point`, expressed as the parameter `t`
    /// along `p1 → p2` (0 at `p1`, 1 at `p2`).
    pub fn projection_parameter(&self, point: &GroundPoint) -> f32 {
        let v = self.vector();
        let len_sq = v.norm_squared();
        if len_sq <= f32::EPSILON {
            return 0.0;
        }
        (point - self.p1).dot(&v) / len_sq
    }

    pub fn point_at(&self, t: f32) -> GroundPoint {
        self.p1 + self.vector() * t
    }

    /// Intersection of the infinite lines through `self` and `other`.
    ///
    /// Returns `None` when the lines are (near) parallel.
    pub fn intersect(&self, other: &GroundLine) -> Option<GroundPoint> {
        let d1 = self.vector();
        let d2 = other.vector();
        let denom = d1.perp(&d2);
        let scale = d1.norm() * d2.norm();
        if scale <= f32::EPSILON || denom.abs() <= 1e-6 * scale {
            return None;
        }
        let t = (other.p1 - self.p1).perp(&d2) / denom;
        Some(self.p1 + d1 * t)
    }

    /// Distance from `point` to the closer of the two endpoints.
    pub fn nearer_endpoint_distance(&self, point: &GroundPoint) -> f32 {
        nalgebra::distance(point, &self.p1).min(nalgebra::distance(point, &self.p2))
    }

    /// Endpoint farther away from `point`.
    pub fn farther_endpoint(&self, point: &GroundPoint) -> GroundPoint {
        let d1 = nalgebra::distance_squared(point, &self.p1);
        let d2 = nalgebra::distance_squared(point, &self.p2);
        if d1 >= d2 {
            self.p1
        } else {
            self.p2
        }
    }
}
