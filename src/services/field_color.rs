//! Chroma-distance field color model.
use super::FieldColor;
use crate::image::YCbCr422;
use serde::Deserialize;

/// Scores colors by their chroma distance to a reference field color.
///
/// The score falls linearly from 1 at the reference to 0 at `radius`; samples
/// brighter than `max_luma` (white lines, goal posts) always score 0.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ChromaFieldColor {
    pub cb: f32,
    pub cr: f32,
    pub radius: f32,
    pub max_luma: u8,
}

impl Default for ChromaFieldColor {
    fn default() -> Self {
        Self {
            cb: 100.0,
            cr: 90.0,
            radius: 24.0,
            max_luma: 180,
        }
    }
}

impl FieldColor for ChromaFieldColor {
    fn field_score(&self, color: &YCbCr422) -> f32 {
        if color.average_luma() > self.max_luma {
            return 0.0;
        }
        let dcb = color.cb as f32 - self.cb;
        let dcr = color.cr as f32 - self.cr;
        let dist = (dcb * dcb + dcr * dcr).sqrt();
        (1.0 - dist / self.radius.max(1e-3)).clamp(0.0, 1.0)
    }
}
