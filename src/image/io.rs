//! I/O helpers for camera frames and JSON.
//!
//! - `load_ycbcr422_image`: read a PNG/JPEG/etc. and pack it as a 4:2:2 frame.
//! - `save_luma_png`: write the luma plane of a frame as a grayscale PNG.
//! - `write_json_file` / `read_json_file`: serde_json round trips on disk.
use super::color::{pack_pair, YCbCr444};
use super::frame::YCbCr422Image;
use image::{GrayImage, RgbImage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to a 4:2:2 frame.
///
/// Odd widths drop the last column.
pub fn load_ycbcr422_image(path: &Path) -> Result<YCbCr422Image, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    Ok(rgb_to_ycbcr422(&img))
}

/// Packs an RGB buffer into 4:2:2 cells.
pub fn rgb_to_ycbcr422(img: &RgbImage) -> YCbCr422Image {
    let width = (img.width() as usize) & !1;
    let height = img.height() as usize;
    let mut data = Vec::with_capacity(width / 2 * height);
    for y in 0..height as u32 {
        for x in (0..width as u32).step_by(2) {
            let [r0, g0, b0] = img.get_pixel(x, y).0;
            let [r1, g1, b1] = img.get_pixel(x + 1, y).0;
            data.push(pack_pair(
                YCbCr444::from_rgb(r0, g0, b0),
                YCbCr444::from_rgb(r1, g1, b1),
            ));
        }
    }
    YCbCr422Image::new(width, height, data)
}

/// Save the luma plane of a frame to a grayscale PNG.
pub fn save_luma_png(frame: &YCbCr422Image, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        frame.width_px() as u32,
        frame.height_px() as u32,
        frame.luma_plane(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Parse a JSON file into `T`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
