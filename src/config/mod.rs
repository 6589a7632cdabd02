//! JSON configuration of the vision core and its tools.
pub mod landmark_tool;
pub mod scan_tool;

use crate::landmarks::LandmarkOptions;
use crate::robots::RobotOptions;
use crate::segmenter::SegmenterOptions;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Options of every stage of the vision cycle. Missing sections keep their
/// defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    pub segmenter: SegmenterOptions,
    pub landmarks: LandmarkOptions,
    pub robots: RobotOptions,
}

pub fn load_config(path: &Path) -> Result<VisionConfig, String> {
    parse_json_file(path)
}

/// Reads and parses a JSON config file with the usual error messages.
pub(crate) fn parse_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let json = r#"{ "segmenter": { "vertical_spacing_px": 16 }, "robots": { "min_edge_density": 2.5 } }"#;
        let config: VisionConfig = serde_json::from_str(json).expect("valid config");
        assert_eq!(config.segmenter.vertical_spacing_px, 16);
        assert_eq!(config.segmenter.vertical_sample_step_px, 2);
        assert!((config.robots.min_edge_density - 2.5).abs() < 1e-6);
        assert!((config.landmarks.goal_inner_width - 1.5).abs() < 1e-6);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/vision.json")).unwrap_err();
        assert!(err.starts_with("Failed to read config /nonexistent/vision.json"), "{err}");
    }
}
