//! Flat-ground pinhole camera.
//!
//! Camera at `height_m` above the ground, pitched down by `pitch_rad`, no roll.
//! Ground frame: `x` forward, `y` left, `z` up.
use super::Projection;
use crate::types::{GroundPoint, Pixel};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PinholeGround {
    pub focal_px: f32,
    pub cx: f32,
    pub cy: f32,
    pub height_m: f32,
    pub pitch_rad: f32,
}

impl Default for PinholeGround {
    fn default() -> Self {
        Self {
            focal_px: 560.0,
            cx: 320.0,
            cy: 240.0,
            height_m: 0.5,
            pitch_rad: 0.35,
        }
    }
}

impl Projection for PinholeGround {
    fn pixel_to_ground(&self, pixel: &Pixel) -> Option<GroundPoint> {
        let (sin, cos) = self.pitch_rad.sin_cos();
        let a = (pixel.x - self.cx) / self.focal_px;
        let b = (pixel.y - self.cy) / self.focal_px;
        let descent = sin + b * cos;
        if descent <= 1e-6 {
            return None;
        }
        let t = self.height_m / descent;
        Some(GroundPoint::new(t * (cos - b * sin), -t * a))
    }

    fn ground_to_pixel(&self, point: &GroundPoint) -> Option<Pixel> {
        let (sin, cos) = self.pitch_rad.sin_cos();
        let forward = point.x * cos + self.height_m * sin;
        if forward <= 1e-6 {
            return None;
        }
        let down = -point.x * sin + self.height_m * cos;
        let right = -point.y;
        Some(Pixel::new(
            self.cx + self.focal_px * right / forward,
            self.cy + self.focal_px * down / forward,
        ))
    }

    fn horizon_y(&self, _x: f32) -> f32 {
        self.cy - self.focal_px * self.pitch_rad.tan()
    }
}
