use crate::types::{GroundLine, GroundPoint};
use nalgebra::Isometry2;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Field line candidate produced by the line detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineInfo {
    /// Stable id used to report which lines a landmark consumed.
    pub id: usize,
    pub line: GroundLine,
    pub length: f32,
    /// How far/obliquely the line was observed; larger means less reliable.
    pub projection_distance: f32,
}

impl LineInfo {
    pub fn new(id: usize, line: GroundLine, projection_distance: f32) -> Self {
        Self {
            id,
            length: line.length(),
            line,
            projection_distance,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LineData {
    pub timestamp: Duration,
    pub lines: Vec<LineInfo>,
}

/// Goal post candidates seen in one image.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GoalPostData {
    pub timestamp: Duration,
    pub posts: Vec<GroundPoint>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PenaltySpotData {
    pub timestamp: Duration,
    pub position: GroundPoint,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallState {
    pub position: GroundPoint,
    pub confident: bool,
    pub moving: bool,
    pub last_seen: Duration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Initial,
    Ready,
    Set,
    Playing,
    Finished,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Normal,
    PenaltyShootout,
    Overtime,
    Timeout,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateFlags {
    pub state: GameState,
    pub phase: GamePhase,
}

/// Everything the landmark extractor consumes in one cycle.
///
/// `None` marks an input that is not valid this cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkInput {
    pub timestamp: Duration,
    pub goal_posts: Option<GoalPostData>,
    pub lines: Option<LineData>,
    pub penalty_spot: Option<PenaltySpotData>,
    pub ball: Option<BallState>,
    pub game: GameStateFlags,
    /// Robot motion since the previous cycle (new pose in the old frame).
    pub odometry: Isometry2<f32>,
    /// Body tilt is currently stable (e.g. standing still).
    pub low_noise_tilt: bool,
}

impl Default for LandmarkInput {
    fn default() -> Self {
        Self {
            timestamp: Duration::ZERO,
            goal_posts: None,
            lines: None,
            penalty_spot: None,
            ball: None,
            game: GameStateFlags::default(),
            odometry: Isometry2::identity(),
            low_noise_tilt: false,
        }
    }
}

/// Two posts of one goal; `left` has the larger lateral coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Goal {
    pub left: GroundPoint,
    pub right: GroundPoint,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CenterCircle {
    pub position: GroundPoint,
    pub orientation: Option<f32>,
    pub used_line_ids: Vec<usize>,
}

impl CenterCircle {
    pub fn has_orientation(&self) -> bool {
        self.orientation.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PenaltyArea {
    /// Position of the penalty mark.
    pub position: GroundPoint,
    /// Direction from the penalty area line towards the mark.
    pub orientation: Option<f32>,
    pub used_line_ids: Vec<usize>,
}

impl PenaltyArea {
    pub fn has_orientation(&self) -> bool {
        self.orientation.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum IntersectionType {
    /// Both lines continue through the crossing.
    X,
    /// One line continues, the other ends at it.
    T,
    /// Both lines end at the crossing.
    L,
    #[default]
    Undefined,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Intersection {
    pub position: GroundPoint,
    pub kind: IntersectionType,
    pub orientation: Option<f32>,
    pub used_line_ids: Vec<usize>,
}

/// Landmarks found in one cycle.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LandmarkModel {
    pub valid: bool,
    pub timestamp: Duration,
    pub goals: Vec<Goal>,
    pub center_circles: Vec<CenterCircle>,
    pub penalty_areas: Vec<PenaltyArea>,
    pub intersections: Vec<Intersection>,
    /// Lines that passed the general filter but belong to no landmark,
    /// re-indexed from zero.
    pub unused_lines: Vec<LineInfo>,
}
