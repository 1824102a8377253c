//! Threshold calibration from a fixed on-screen sampling region.
//!
//! Calibration runs on demand, not per frame: it crops the calibration
//! rectangle out of the current full-resolution frame, converts the patch
//! to HSV, averages every channel, and derives a fresh [`ThresholdWindow`]
//! around the mean. The hue bounds are clamped to the valid byte range;
//! saturation and value bounds are deliberately left unclamped (observed
//! behavior of the source system — the range test downstream tolerates
//! out-of-range bounds).

use crate::image::{hsv, RgbaFrame};
use crate::types::ThresholdWindow;
use nalgebra::Vector4;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-width of the derived window per channel (hue, saturation, value,
/// alpha).
const RADIUS_HUE: f32 = 25.0;
const RADIUS_SAT: f32 = 50.0;
const RADIUS_VAL: f32 = 50.0;

/// Fixed sampling rectangle in full-resolution frame coordinates.
///
/// Sized to 1/16 of each frame dimension and anchored slightly below the
/// frame center; immutable for a given camera resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationRegion {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CalibrationRegion {
    /// Build the region for a camera resolution.
    pub fn for_resolution(frame_width: usize, frame_height: usize) -> Self {
        let width = frame_width / 16;
        let height = frame_height / 16;
        Self {
            x: frame_width / 2 - width,
            y: frame_height / 2 + height,
            width,
            height,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Calibration failures. "Region empty or outside the frame" is the only
/// failure class; everything else about calibration is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalibrationError {
    RegionOutOfBounds {
        region: CalibrationRegion,
        frame_width: usize,
        frame_height: usize,
    },
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::RegionOutOfBounds {
                region,
                frame_width,
                frame_height,
            } => write!(
                f,
                "calibration region {}x{}+{}+{} outside {}x{} frame",
                region.width, region.height, region.x, region.y, frame_width, frame_height
            ),
        }
    }
}

impl std::error::Error for CalibrationError {}

/// Sample the region of `frame` and derive the threshold window around its
/// mean HSV color.
pub fn sample_window(
    frame: &RgbaFrame,
    region: &CalibrationRegion,
) -> Result<ThresholdWindow, CalibrationError> {
    let patch = frame
        .crop(region.x, region.y, region.width, region.height)
        .ok_or(CalibrationError::RegionOutOfBounds {
            region: *region,
            frame_width: frame.w,
            frame_height: frame.h,
        })?;
    Ok(window_from_mean(mean_hsv(&patch)))
}

/// Per-channel arithmetic mean of the patch in HSV (alpha averaged as-is).
/// The patch is non-empty by construction (`crop` rejects empty windows).
fn mean_hsv(patch: &RgbaFrame) -> Vector4<f32> {
    let mut sum = [0.0f64; 4];
    for px in &patch.data {
        let [h, s, v] = hsv::rgb_to_hsv_full(px[0], px[1], px[2]);
        sum[0] += h as f64;
        sum[1] += s as f64;
        sum[2] += v as f64;
        sum[3] += px[3] as f64;
    }
    let n = patch.data.len() as f64;
    Vector4::new(
        (sum[0] / n) as f32,
        (sum[1] / n) as f32,
        (sum[2] / n) as f32,
        (sum[3] / n) as f32,
    )
}

/// Derive the window around a mean color: hue clamped to [0, 255],
/// saturation/value unclamped, alpha fixed to the full range.
pub fn window_from_mean(mean: Vector4<f32>) -> ThresholdWindow {
    let hue_lo = if mean.x >= RADIUS_HUE {
        mean.x - RADIUS_HUE
    } else {
        0.0
    };
    let hue_hi = if mean.x + RADIUS_HUE <= 255.0 {
        mean.x + RADIUS_HUE
    } else {
        255.0
    };
    ThresholdWindow::new(
        Vector4::new(hue_lo, mean.y - RADIUS_SAT, mean.z - RADIUS_VAL, 0.0),
        Vector4::new(hue_hi, mean.y + RADIUS_SAT, mean.z + RADIUS_VAL, 255.0),
    )
}
