use nalgebra::{Point2, Vector4};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::steering::SteeringCommand;

/// Inclusive HSV(+alpha) box tested by the binarization stage.
///
/// Bounds are kept as floats and may legally lie outside the 0–255 channel
/// range: calibration clamps the hue bounds only, and the per-pixel range
/// test tolerates out-of-range saturation/value bounds (a lower bound of
/// −40 simply accepts every hue down to 0).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdWindow {
    pub lower: Vector4<f32>,
    pub upper: Vector4<f32>,
}

impl ThresholdWindow {
    pub fn new(lower: Vector4<f32>, upper: Vector4<f32>) -> Self {
        Self { lower, upper }
    }

    /// Inclusive range test over the three HSV channels.
    ///
    /// The alpha bounds are carried for calibration reporting but do not
    /// participate here; the mask stage sees 3-channel HSV pixels.
    #[inline]
    pub fn contains_hsv(&self, px: [u8; 3]) -> bool {
        (0..3).all(|i| {
            let v = px[i] as f32;
            v >= self.lower[i] && v <= self.upper[i]
        })
    }
}

impl Default for ThresholdWindow {
    /// Orange preset used until the first calibration.
    fn default() -> Self {
        Self {
            lower: Vector4::new(-40.0, 110.0, 170.0, 0.0),
            upper: Vector4::new(24.0, 261.0, 256.0, 255.0),
        }
    }
}

impl fmt::Display for ThresholdWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lower = ({:.1}, {:.1}, {:.1}, {:.1}), upper = ({:.1}, {:.1}, {:.1}, {:.1})",
            self.lower[0],
            self.lower[1],
            self.lower[2],
            self.lower[3],
            self.upper[0],
            self.upper[1],
            self.upper[2],
            self.upper[3],
        )
    }
}

/// Fitted target circle in full-resolution frame coordinates.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TargetEstimate {
    pub center: Point2<f32>,
    pub radius: f32,
}

/// Per-frame processing outcome.
///
/// `command` is `None` when following was disabled for the frame (no
/// actuator call is made in that mode).
#[derive(Clone, Debug, Default, Serialize)]
pub struct TrackReport {
    pub found: bool,
    pub target: Option<TargetEstimate>,
    pub command: Option<SteeringCommand>,
    pub latency_ms: f64,
}
