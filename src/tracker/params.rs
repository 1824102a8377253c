//! Parameter types configuring the tracker.

use crate::steering::DRIVE_SPEED;
use crate::types::ThresholdWindow;
use serde::{Deserialize, Serialize};

/// Tracker-wide parameters.
///
/// Defaults reproduce the stock behavior: orange threshold preset, constant
/// drive speed 150, green annotations.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerParams {
    /// HSV(+alpha) window used until the first calibration.
    pub initial_window: ThresholdWindow,
    /// Forward speed passed to the actuator while following.
    pub drive_speed: f32,
    /// RGBA color of the on-screen annotations.
    pub marker_color: [u8; 4],
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            initial_window: ThresholdWindow::default(),
            drive_speed: DRIVE_SPEED,
            marker_color: [0, 255, 0, 255],
        }
    }
}
