//! Angle utilities shared by the landmark geometry.
//!
//! Field lines are undirected, so most comparisons fold angles modulo π.
//! Orientations reported for landmarks are directed and live in (-π, π].
use nalgebra::Vector2;
use std::f32::consts::{FRAC_PI_2, PI};

/// Wraps an angle into the range (-π, π].
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

/// Computes the smallest unsigned angular difference between two angles,
/// treating antipodal directions as equivalent (i.e. π apart → 0).
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs().rem_euclid(PI);
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}

/// True when two undirected line angles are within `tolerance` of a right angle.
#[inline]
pub fn is_orthogonal(a: f32, b: f32, tolerance: f32) -> bool {
    (angular_difference(a, b) - FRAC_PI_2).abs() <= tolerance
}

/// Direction angle of a 2D vector in (-π, π].
#[inline]
pub fn direction_angle(v: &Vector2<f32>) -> f32 {
    v.y.atan2(v.x)
}
