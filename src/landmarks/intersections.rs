//! Line intersections classified as X, T or L.
use super::options::LandmarkOptions;
use super::types::{Intersection, IntersectionType, LineInfo};
use crate::angle::{direction_angle, is_orthogonal};
use crate::types::{GroundLine, GroundPoint};
use log::debug;

/// True when `point` lies strictly between the endpoints of `line`.
fn is_interior(line: &GroundLine, point: &GroundPoint) -> bool {
    (line.p1 - point).dot(&(line.p2 - point)) < 0.0
}

/// Interior test with the minimum overlap applied: a line that barely crosses
/// is treated as ending at the intersection.
fn passes_through(line: &GroundLine, point: &GroundPoint, min_overlap: f32) -> bool {
    is_interior(line, point) && line.nearer_endpoint_distance(point) >= min_overlap
}

/// Classifies the crossing of two lines. `None` when the lines are not
/// orthogonal, do not intersect, or stop too far from the intersection.
pub(crate) fn classify(
    a: &LineInfo,
    b: &LineInfo,
    options: &LandmarkOptions,
) -> Option<Intersection> {
    let tolerance = options.intersection_orthogonality_tolerance_deg.to_radians();
    if !is_orthogonal(a.line.angle(), b.line.angle(), tolerance) {
        return None;
    }
    let point = a.line.intersect(&b.line)?;

    let through_a = passes_through(&a.line, &point, options.intersection_min_overlap);
    let through_b = passes_through(&b.line, &point, options.intersection_min_overlap);
    let too_short = |line: &GroundLine, through: bool| {
        !through && line.nearer_endpoint_distance(&point) > options.intersection_max_extension
    };
    if too_short(&a.line, through_a) || too_short(&b.line, through_b) {
        return None;
    }

    let kind = match (through_a, through_b) {
        (true, true) => IntersectionType::X,
        (true, false) | (false, true) => IntersectionType::T,
        (false, false) => IntersectionType::L,
    };
    let orientation = if through_b && !through_a {
        orientation(kind, &b.line, &a.line, &point)
    } else {
        orientation(kind, &a.line, &b.line, &point)
    };
    Some(Intersection {
        position: point,
        kind,
        orientation,
        used_line_ids: vec![a.id, b.id],
    })
}

/// Orientation of an intersection of `kind`. For a T, `a` is the line that
/// continues through the intersection.
pub fn orientation(
    kind: IntersectionType,
    a: &GroundLine,
    b: &GroundLine,
    point: &GroundPoint,
) -> Option<f32> {
    match kind {
        IntersectionType::T => t_orientation(a, b, point),
        IntersectionType::L => l_orientation(a, b, point),
        IntersectionType::X | IntersectionType::Undefined => None,
    }
}

/// Normal of the through line, pointing away from the stem.
fn t_orientation(through: &GroundLine, stem: &GroundLine, point: &GroundPoint) -> Option<f32> {
    let normal = through.normal();
    if normal.norm_squared() == 0.0 {
        return None;
    }
    let stem_end = stem.farther_endpoint(point);
    let away = if normal.dot(&(point - stem_end)) >= 0.0 {
        normal
    } else {
        -normal
    };
    Some(direction_angle(&away))
}

/// Bisector of the two legs, each taken towards its far endpoint.
fn l_orientation(a: &GroundLine, b: &GroundLine, point: &GroundPoint) -> Option<f32> {
    let leg = |line: &GroundLine| {
        let v = line.farther_endpoint(point) - point;
        let len = v.norm();
        (len > f32::EPSILON).then(|| v / len)
    };
    let sum = leg(a)? + leg(b)?;
    if sum.norm() <= 1e-4 {
        return None;
    }
    Some(direction_angle(&sum))
}

/// Every intersection among the unordered pairs of `lines`.
pub(crate) fn detect_intersections(
    lines: &[LineInfo],
    options: &LandmarkOptions,
) -> Vec<Intersection> {
    let mut out = Vec::new();
    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            if let Some(intersection) = classify(a, b, options) {
                out.push(intersection);
            }
        }
    }
    debug!(
        "detect_intersections lines={} intersections={}",
        lines.len(),
        out.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn line(id: usize, x1: f32, y1: f32, x2: f32, y2: f32) -> LineInfo {
        LineInfo::new(
            id,
            GroundLine::new(Point2::new(x1, y1), Point2::new(x2, y2)),
            1.0,
        )
    }

    fn options() -> LandmarkOptions {
        LandmarkOptions {
            intersection_orthogonality_tolerance_deg: 5.0,
            intersection_min_overlap: 0.1,
            ..Default::default()
        }
    }

    #[test]
    fn crossing_axis_lines_form_an_x() {
        let a = line(0, -1.0, 0.0, 1.0, 0.0);
        let b = line(1, 0.0, -1.0, 0.0, 1.0);
        let x = classify(&a, &b, &options()).expect("intersection");
        assert_eq!(x.kind, IntersectionType::X);
        assert_eq!(x.orientation, None);
        assert!(nalgebra::distance(&x.position, &Point2::origin()) < 1e-6);
        assert_eq!(x.used_line_ids, vec![0, 1]);
    }

    #[test]
    fn barely_crossing_line_is_downgraded() {
        let a = line(0, -1.0, 0.0, 1.0, 0.0);
        let b = line(1, 0.0, -1.0, 0.0, 0.05);
        let t = classify(&a, &b, &options()).expect("intersection");
        assert_ne!(t.kind, IntersectionType::X);
        assert_eq!(t.kind, IntersectionType::T);
        let orientation = t.orientation.expect("T has an orientation");
        assert!(approx_eq(orientation, FRAC_PI_2), "orientation={orientation}");
    }

    #[test]
    fn classification_is_invariant_under_swap() {
        let opts = options();
        let pairs = [
            (line(0, -1.0, 0.0, 1.0, 0.0), line(1, 0.0, -1.0, 0.0, 1.0)),
            (line(0, -1.0, 0.0, 1.0, 0.0), line(1, 0.0, -1.0, 0.0, 0.05)),
            (line(0, 0.0, 0.0, 1.0, 0.0), line(1, 0.0, 0.0, 0.0, 1.0)),
            (line(0, -1.0, 2.0, 1.0, 2.0), line(1, 0.5, 2.0, 0.5, 3.0)),
        ];
        for (a, b) in &pairs {
            let ab = classify(a, b, &opts).expect("ab");
            let ba = classify(b, a, &opts).expect("ba");
            assert_eq!(ab.kind, ba.kind);
            assert_eq!(ab.orientation.is_some(), ba.orientation.is_some());
            if let (Some(x), Some(y)) = (ab.orientation, ba.orientation) {
                assert!(approx_eq(x, y), "{x} vs {y}");
            }
        }
    }

    #[test]
    fn corner_gives_l_along_the_bisector() {
        let a = line(0, 0.0, 0.0, 1.0, 0.0);
        let b = line(1, 0.0, 1.0, 0.0, 0.02);
        let l = classify(&a, &b, &options()).expect("intersection");
        assert_eq!(l.kind, IntersectionType::L);
        let orientation = l.orientation.expect("L has an orientation");
        assert!(approx_eq(orientation, FRAC_PI_4), "orientation={orientation}");
    }

    #[test]
    fn distant_or_oblique_pairs_are_rejected() {
        let opts = options();
        let short = line(0, 0.5, 0.0, 1.0, 0.0);
        let upright = line(1, 0.0, 0.0, 0.0, 1.0);
        assert!(classify(&short, &upright, &opts).is_none());

        let oblique = line(2, -1.0, -1.0, 1.0, 1.0);
        let flat = line(3, -1.0, 0.0, 1.0, 0.0);
        assert!(classify(&oblique, &flat, &opts).is_none());

        let parallel = line(4, -1.0, 0.5, 1.0, 0.5);
        assert!(classify(&parallel, &flat, &opts).is_none());
    }

    #[test]
    fn pure_orientation_per_type() {
        let a = GroundLine::new(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
        let b = GroundLine::new(Point2::new(0.0, 1.0), Point2::new(0.0, 0.0));
        let p = Point2::origin();
        assert_eq!(orientation(IntersectionType::X, &a, &b, &p), None);
        assert_eq!(orientation(IntersectionType::Undefined, &a, &b, &p), None);
        let t = orientation(IntersectionType::T, &a, &b, &p).expect("T");
        assert!(approx_eq(t, -FRAC_PI_2), "t={t}");
    }
}
