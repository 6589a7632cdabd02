use super::parse_json_file;
use crate::landmarks::LandmarkOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of the `landmark_demo` tool.
///
/// `input` is a JSON array of cycle inputs, processed in order so that goal
/// posts are buffered across cycles.
#[derive(Debug, Deserialize)]
pub struct LandmarkToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub landmarks: LandmarkOptions,
    pub output: LandmarkOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LandmarkOutputConfig {
    #[serde(rename = "models_json")]
    pub models_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<LandmarkToolConfig, String> {
    parse_json_file(path)
}
