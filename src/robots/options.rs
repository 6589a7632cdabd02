use serde::Deserialize;

/// Parameters of the robot silhouette detector.
///
/// Robot dimensions are metres; padding ratios are fractions of the detection
/// box width.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RobotOptions {
    /// A segment at or below this field score counts as non-field.
    pub max_field_score: f32,
    /// Consecutive non-field segments needed before edge points are recorded.
    pub min_non_field_run: usize,
    pub robot_width_m: f32,
    pub robot_height_m: f32,
    /// Footprint used to move the detected foot point to the robot center.
    pub robot_diameter_m: f32,
    /// Minimum edge points per box column.
    pub min_edge_density: f32,
    /// Boxes reaching this close to the image bottom are treated as cut.
    pub bottom_margin_px: i32,
    pub padding_ratio: f32,
    pub cut_padding_ratio: f32,
}

impl Default for RobotOptions {
    fn default() -> Self {
        Self {
            max_field_score: 0.5,
            min_non_field_run: 0,
            robot_width_m: 0.35,
            robot_height_m: 0.6,
            robot_diameter_m: 0.3,
            min_edge_density: 1.0,
            bottom_margin_px: 2,
            padding_ratio: 0.5,
            cut_padding_ratio: 1.0,
        }
    }
}

impl RobotOptions {
    /// Box height in pixels for a box `width_px` wide.
    pub fn box_height_px(&self, width_px: f32) -> f32 {
        if self.robot_width_m <= f32::EPSILON {
            return 0.0;
        }
        width_px * self.robot_height_m / self.robot_width_m
    }
}
