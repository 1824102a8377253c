#![doc = include_str!("../README.md")]

// Pipeline stages, leaf to root.
pub mod binarize;
pub mod circle;
pub mod contours;
pub mod image;
pub mod morphology;
pub mod reduce;

// Steering, calibration and the orchestrator.
pub mod calibrate;
pub mod config;
pub mod robot;
pub mod steering;
pub mod tracker;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::calibrate::{CalibrationError, CalibrationRegion};
pub use crate::robot::{LogRobot, NullRobot, RobotActuator};
pub use crate::steering::SteeringCommand;
pub use crate::tracker::{Tracker, TrackerParams, TrackerWorkspace};
pub use crate::types::{TargetEstimate, ThresholdWindow, TrackReport};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use color_tracker::prelude::*;
///
/// # fn main() {
/// let mut frame = RgbaFrame::new(640, 480);
/// let mut tracker = Tracker::new(TrackerParams::default(), NullRobot);
/// let report = tracker.process(&mut frame, true);
/// println!("found={} latency_ms={:.3}", report.found, report.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbaFrame;
    pub use crate::{NullRobot, SteeringCommand, Tracker, TrackerParams, TrackReport};
}
