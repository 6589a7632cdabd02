//! Center circle detection by voting.
//!
//! Every short line is treated as a chord of the center circle. Its midpoint
//! pushed by the circle radius along both normals gives two candidate centers.
//! Candidates are clustered greedily; the cluster with the most votes wins.
use super::options::LandmarkOptions;
use super::types::{CenterCircle, LineInfo};
use crate::angle::{is_orthogonal, normalize_angle};
use crate::types::GroundPoint;
use log::debug;
use std::f32::consts::FRAC_PI_2;

/// Running-mean cluster of candidate circle centers.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCluster {
    pub center: GroundPoint,
    pub votes: usize,
    /// Angles of the lines that voted for this cluster.
    pub angles: Vec<f32>,
    pub line_ids: Vec<usize>,
}

impl PointCluster {
    fn new(point: &CenterVote) -> Self {
        Self {
            center: point.position,
            votes: 1,
            angles: vec![point.angle],
            line_ids: vec![point.line_id],
        }
    }

    /// True when `angle` is within `tolerance` of a right angle to any member.
    fn conflicts_with(&self, angle: f32, tolerance: f32) -> bool {
        self.angles.iter().any(|&a| is_orthogonal(a, angle, tolerance))
    }

    fn add(&mut self, point: &CenterVote) {
        self.votes += 1;
        self.center += (point.position - self.center) / self.votes as f32;
        self.angles.push(point.angle);
        if !self.line_ids.contains(&point.line_id) {
            self.line_ids.push(point.line_id);
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct CenterVote {
    pub position: GroundPoint,
    pub angle: f32,
    pub line_id: usize,
}

/// Two candidate centers per line, one on each side.
pub(crate) fn center_votes(lines: &[LineInfo], radius: f32) -> Vec<CenterVote> {
    let mut votes = Vec::with_capacity(lines.len() * 2);
    for info in lines {
        let normal = info.line.normal();
        if normal.norm_squared() == 0.0 {
            continue;
        }
        let mid = info.line.midpoint();
        let angle = info.line.angle();
        for side in [1.0f32, -1.0] {
            votes.push(CenterVote {
                position: mid + normal * (side * radius),
                angle,
                line_id: info.id,
            });
        }
    }
    votes
}

/// Greedy clustering. A vote joins every cluster it is close to unless one of
/// that cluster's lines is orthogonal to its own; otherwise it opens a new one.
pub(crate) fn cluster_votes(
    votes: &[CenterVote],
    max_distance: f32,
    orthogonality_tolerance: f32,
) -> Vec<PointCluster> {
    let max_distance_sq = max_distance * max_distance;
    let mut clusters: Vec<PointCluster> = Vec::new();
    for vote in votes {
        let mut joined = false;
        for cluster in &mut clusters {
            if nalgebra::distance_squared(&cluster.center, &vote.position) > max_distance_sq {
                continue;
            }
            if cluster.conflicts_with(vote.angle, orthogonality_tolerance) {
                continue;
            }
            cluster.add(vote);
            joined = true;
        }
        if !joined {
            clusters.push(PointCluster::new(vote));
        }
    }
    clusters
}

/// Detects the center circle from `circle_lines`; `all_lines` are searched
/// for the line through the center that gives the orientation.
pub(crate) fn detect_center_circle(
    circle_lines: &[LineInfo],
    all_lines: &[LineInfo],
    options: &LandmarkOptions,
) -> Option<CenterCircle> {
    let votes = center_votes(circle_lines, options.center_circle_radius);
    let clusters = cluster_votes(
        &votes,
        options.circle_cluster_max_distance,
        options.circle_orthogonality_tolerance_deg.to_radians(),
    );
    // First cluster wins ties.
    let mut best: Option<&PointCluster> = None;
    for cluster in &clusters {
        if best.map_or(true, |b| cluster.votes > b.votes) {
            best = Some(cluster);
        }
    }
    let best = best?;
    if best.votes < options.circle_min_votes {
        debug!(
            "detect_center_circle best cluster has {} votes, need {}",
            best.votes, options.circle_min_votes
        );
        return None;
    }

    let mut used_line_ids = best.line_ids.clone();
    let orientation_line = all_lines
        .iter()
        .filter(|l| {
            l.length >= options.circle_orientation_min_line_length
                && l.line.distance_to_line(&best.center) <= options.circle_orientation_max_distance
        })
        .max_by(|a, b| a.length.total_cmp(&b.length));
    let orientation = orientation_line.map(|l| {
        if !used_line_ids.contains(&l.id) {
            used_line_ids.push(l.id);
        }
        normalize_angle(l.line.angle() + FRAC_PI_2)
    });

    Some(CenterCircle {
        position: best.center,
        orientation,
        used_line_ids,
    })
}
