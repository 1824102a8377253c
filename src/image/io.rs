//! I/O helpers for RGBA frames and JSON reports.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned [`RgbaFrame`].
//! - `save_rgba_image`: write an [`RgbaFrame`] to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Used by the demo binary only; the per-frame path never touches the
//! filesystem.

use super::RgbaFrame;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read an image file into an owned RGBA frame.
pub fn load_rgba_image(path: &Path) -> Result<RgbaFrame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to read image {}: {e}", path.display()))?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let data: Vec<[u8; 4]> = rgba.pixels().map(|p| p.0).collect();
    Ok(RgbaFrame::from_pixels(w as usize, h as usize, data))
}

/// Write an RGBA frame to an image file.
pub fn save_rgba_image(frame: &RgbaFrame, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut raw = Vec::with_capacity(frame.w * frame.h * 4);
    for px in &frame.data {
        raw.extend_from_slice(px);
    }
    let buffer: image::RgbaImage =
        image::ImageBuffer::from_raw(frame.w as u32, frame.h as u32, raw)
            .ok_or_else(|| "frame buffer size disagrees with dimensions".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to write image {}: {e}", path.display()))
}

/// Pretty-print a serializable value to a JSON file.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
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
