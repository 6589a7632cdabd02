use super::{parse_json_file, VisionConfig};
use crate::services::{ChromaFieldColor, PinholeGround, PolygonSilhouette, PolylineBoundary};
use crate::types::Pixel;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of the `scan_segments` tool.
#[derive(Debug, Deserialize)]
pub struct ScanToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub camera: PinholeGround,
    #[serde(default)]
    pub field_color: ChromaFieldColor,
    /// Field boundary polyline in pixels; empty means the whole image is field.
    #[serde(default)]
    pub field_boundary: PolylineBoundary,
    /// Own-body polygon in pixels.
    #[serde(default)]
    pub silhouette: Vec<Pixel>,
    #[serde(default)]
    pub vision: VisionConfig,
    pub output: ScanOutputConfig,
}

impl ScanToolConfig {
    pub fn silhouette(&self) -> PolygonSilhouette {
        PolygonSilhouette::new(self.silhouette.clone())
    }
}

#[derive(Debug, Deserialize)]
pub struct ScanOutputConfig {
    #[serde(rename = "luma_image")]
    pub luma_image: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ScanToolConfig, String> {
    parse_json_file(path)
}
