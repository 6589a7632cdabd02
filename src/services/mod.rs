//! Interfaces to the collaborators the core consumes but does not own.
//!
//! The projection model, the field color classifier, the field boundary and
//! the robot's own silhouette are provided by the surrounding system. The
//! traits here are the whole contract; the small implementations in the
//! submodules exist for tools and tests.
pub mod field_color;
pub mod pinhole;
pub mod silhouette;

pub use field_color::ChromaFieldColor;
pub use pinhole::PinholeGround;
pub use silhouette::{PolygonSilhouette, PolylineBoundary};

use crate::image::{YCbCr422, YCbCr422Image};
use crate::types::{GroundPoint, Pixel};
use std::time::Duration;

/// Pixel ↔ ground mapping of the current camera.
pub trait Projection {
    /// Ground position seen at `pixel`, `None` above the horizon or without a
    /// valid camera matrix.
    fn pixel_to_ground(&self, pixel: &Pixel) -> Option<GroundPoint>;
    /// Pixel where `point` appears, `None` when it is behind the camera.
    fn ground_to_pixel(&self, point: &GroundPoint) -> Option<Pixel>;
    /// Image row of the horizon at column `x`.
    fn horizon_y(&self, x: f32) -> f32;
}

/// Field color membership of a color sample.
pub trait FieldColor {
    /// Probability in [0, 1] that `color` is field carpet.
    fn field_score(&self, color: &YCbCr422) -> f32;
}

/// Test whether a pixel lies inside the detected field boundary.
pub trait FieldBoundary {
    fn is_inside_field(&self, pixel: &Pixel) -> bool;
}

/// The robot's own body as seen by the camera.
pub trait Silhouette {
    /// Polygon edges in pixel coordinates.
    fn lines(&self) -> &[[Pixel; 2]];
    fn is_on_silhouette(&self, pixel: &Pixel) -> bool;

    /// Topmost row where a silhouette edge crosses column `x`.
    fn top_at_column(&self, x: f32) -> Option<f32> {
        self.lines()
            .iter()
            .filter_map(|[a, b]| {
                let (lo, hi) = if a.x <= b.x { (a, b) } else { (b, a) };
                if x < lo.x || x > hi.x {
                    return None;
                }
                let dx = hi.x - lo.x;
                if dx.abs() <= f32::EPSILON {
                    Some(lo.y.min(hi.y))
                } else {
                    Some(lo.y + (hi.y - lo.y) * (x - lo.x) / dx)
                }
            })
            .min_by(|a, b| a.total_cmp(b))
    }
}

/// Everything the image stages need to know about the current frame.
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub frame: &'a YCbCr422Image,
    /// Upstream validity flag of the frame.
    pub valid: bool,
    pub timestamp: Duration,
    pub projection: &'a dyn Projection,
    pub field_color: &'a dyn FieldColor,
    pub field_boundary: &'a dyn FieldBoundary,
    pub silhouette: &'a dyn Silhouette,
}
