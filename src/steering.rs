//! Mapping from target position to an actuator command.
//!
//! The horizontal offset of the target center maps to a mirrored,
//! full-circle steering angle: an object at the left frame edge steers to
//! 360°, at the right edge to 0°, dead center to 180°. The scale and
//! direction are load-bearing for the robot firmware and must not change.

use crate::types::TargetEstimate;
use serde::{Deserialize, Serialize};

/// Constant forward speed sent while a target is being followed.
pub const DRIVE_SPEED: f32 = 150.0;

/// Command issued to the robot collaborator, one per processed frame while
/// following is active.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SteeringCommand {
    Drive { speed: f32, angle: f32 },
    Stop,
}

/// Steering angle in degrees for a target at `center_x` in a frame of
/// `frame_width` pixels: `360 · (1 − center_x / frame_width)`.
#[inline]
pub fn steering_angle(center_x: f32, frame_width: f32) -> f32 {
    360.0 * (1.0 - center_x / frame_width)
}

/// Map the per-frame detection outcome to a command: drive towards a found
/// target, stop otherwise.
pub fn map_target(
    target: Option<&TargetEstimate>,
    frame_width: f32,
    speed: f32,
) -> SteeringCommand {
    match target {
        Some(t) => SteeringCommand::Drive {
            speed,
            angle: steering_angle(t.center.x, frame_width),
        },
        None => SteeringCommand::Stop,
    }
}
