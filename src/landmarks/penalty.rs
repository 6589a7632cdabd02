//! Penalty area from the penalty mark and the front line of the area.
use super::options::LandmarkOptions;
use super::types::{GamePhase, GameState, LandmarkInput, LineInfo, PenaltyArea};
use crate::angle::direction_angle;
use crate::types::GroundPoint;
use log::debug;

/// Penalty mark for this cycle.
///
/// Falls back to a resting ball during a penalty shoot-out, where the ball
/// is placed on the mark.
pub(crate) fn penalty_spot(
    input: &LandmarkInput,
    options: &LandmarkOptions,
) -> Option<GroundPoint> {
    if let Some(spot) = &input.penalty_spot {
        return Some(spot.position);
    }
    let ball = input.ball.as_ref()?;
    let shootout = input.game.state == GameState::Playing
        && input.game.phase == GamePhase::PenaltyShootout;
    let age = input.timestamp.saturating_sub(ball.last_seen);
    let fresh = age <= options.ball_as_penalty_spot_max_age();
    if shootout && ball.confident && !ball.moving && fresh {
        debug!("penalty_spot using resting ball at {:?}", ball.position);
        Some(ball.position)
    } else {
        None
    }
}

/// Searches `lines` for the front line of the penalty area belonging to `spot`.
///
/// Only a unique match orients the area.
pub(crate) fn detect_penalty_area(
    spot: GroundPoint,
    lines: &[LineInfo],
    options: &LandmarkOptions,
) -> PenaltyArea {
    let expected = options.penalty_line_distance();
    let mut matches = lines.iter().filter(|info| {
        if info.length < options.penalty_min_line_length {
            return false;
        }
        let distance = info.line.distance_to_line(&spot);
        if (distance - expected).abs() > options.penalty_distance_tolerance {
            return false;
        }
        let t = info.line.projection_parameter(&spot);
        let overshoot = if t < 0.0 {
            -t
        } else if t > 1.0 {
            t - 1.0
        } else {
            0.0
        };
        overshoot * info.length <= options.penalty_max_line_extension
    });

    let first = matches.next();
    let unique = first.filter(|_| matches.next().is_none());
    match unique {
        Some(info) => {
            let foot = info.line.point_at(info.line.projection_parameter(&spot));
            PenaltyArea {
                position: spot,
                orientation: Some(direction_angle(&(spot - foot))),
                used_line_ids: vec![info.id],
            }
        }
        None => {
            debug!(
                "detect_penalty_area no unique line for spot {:?} (found any: {})",
                spot,
                first.is_some()
            );
            PenaltyArea {
                position: spot,
                orientation: None,
                used_line_ids: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::types::{BallState, GameStateFlags, PenaltySpotData};
    use crate::types::GroundLine;
    use nalgebra::Point2;
    use std::f32::consts::PI;
    use std::time::Duration;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn resting_ball(last_seen_ms: u64) -> BallState {
        BallState {
            position: Point2::new(2.0, 0.3),
            confident: true,
            moving: false,
            last_seen: Duration::from_millis(last_seen_ms),
        }
    }

    fn shootout_input(ball: BallState) -> LandmarkInput {
        LandmarkInput {
            timestamp: Duration::from_millis(1000),
            ball: Some(ball),
            game: GameStateFlags {
                state: GameState::Playing,
                phase: GamePhase::PenaltyShootout,
            },
            ..Default::default()
        }
    }

    #[test]
    fn detector_spot_takes_precedence_over_ball() {
        let options = LandmarkOptions::default();
        let mut input = shootout_input(resting_ball(990));
        input.penalty_spot = Some(PenaltySpotData {
            timestamp: Duration::from_millis(1000),
            position: Point2::new(3.0, -1.0),
        });
        assert_eq!(penalty_spot(&input, &options), Some(Point2::new(3.0, -1.0)));
    }

    #[test]
    fn resting_ball_is_used_only_in_a_shootout() {
        let options = LandmarkOptions::default();
        let input = shootout_input(resting_ball(900));
        assert_eq!(penalty_spot(&input, &options), Some(Point2::new(2.0, 0.3)));

        let stale = shootout_input(resting_ball(700));
        assert_eq!(penalty_spot(&stale, &options), None);

        let mut normal = shootout_input(resting_ball(900));
        normal.game.phase = GamePhase::Normal;
        assert_eq!(penalty_spot(&normal, &options), None);

        let mut rolling = shootout_input(resting_ball(900));
        if let Some(ball) = rolling.ball.as_mut() {
            ball.moving = true;
        }
        assert_eq!(penalty_spot(&rolling, &options), None);
    }

    #[test]
    fn unique_front_line_orients_the_area() {
        let options = LandmarkOptions::default();
        let spot = Point2::new(2.0, 0.0);
        // Front line 0.35 m beyond the mark, seen from the field side.
        let line = LineInfo::new(
            7,
            GroundLine::new(Point2::new(2.35, -1.0), Point2::new(2.35, 1.0)),
            1.0,
        );
        let area = detect_penalty_area(spot, &[line], &options);
        assert_eq!(area.used_line_ids, vec![7]);
        let orientation = area.orientation.expect("oriented");
        assert!(approx_eq(orientation.abs(), PI), "orientation={orientation}");
    }

    #[test]
    fn ambiguous_or_distant_lines_leave_area_unoriented() {
        let options = LandmarkOptions::default();
        let spot = Point2::new(2.0, 0.0);
        let near = LineInfo::new(
            0,
            GroundLine::new(Point2::new(2.35, -1.0), Point2::new(2.35, 1.0)),
            1.0,
        );
        let twin = LineInfo::new(
            1,
            GroundLine::new(Point2::new(1.65, -1.0), Point2::new(1.65, 1.0)),
            1.0,
        );
        let area = detect_penalty_area(spot, &[near, twin], &options);
        assert!(!area.has_orientation());
        assert!(area.used_line_ids.is_empty());

        let offset = LineInfo::new(
            2,
            GroundLine::new(Point2::new(2.35, 2.0), Point2::new(2.35, 4.0)),
            1.0,
        );
        let area = detect_penalty_area(spot, &[offset], &options);
        assert!(!area.has_orientation(), "foot point too far beyond the line end");
    }
}
