use crate::binarize;
use crate::calibrate::{self, CalibrationError, CalibrationRegion};
use crate::circle;
use crate::contours::{self, Contour};
use crate::image::{draw, hsv, RgbaFrame};
use crate::morphology;
use crate::reduce::{self, REDUCTION_FACTOR};
use crate::robot::RobotActuator;
use crate::steering;
use crate::types::{TargetEstimate, ThresholdWindow, TrackReport};
use log::debug;
use nalgebra::Point2;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::params::TrackerParams;
use super::workspace::TrackerWorkspace;

/// Tracker orchestrating the per-frame pipeline and the calibration entry
/// point.
///
/// `process` consumes one frame at a time, synchronously: reduce, convert
/// to HSV, binarize against the current threshold window, denoise, extract
/// contours, pick the largest blob, fit its enclosing circle at full
/// resolution, and issue exactly one actuator command. With following
/// disabled it instead draws the calibration marker and touches nothing
/// else.
///
/// The threshold window lives behind a shared `RwLock` so a control path
/// (for example a UI thread calling [`Tracker::calibrate`] through
/// [`Tracker::threshold_handle`]) can swap it without racing the per-frame
/// read: the binarizer takes one snapshot per frame.
pub struct Tracker<R: RobotActuator> {
    params: TrackerParams,
    window: Arc<RwLock<ThresholdWindow>>,
    region: Option<CalibrationRegion>,
    resolution: Option<(usize, usize)>,
    workspace: TrackerWorkspace,
    robot: R,
}

impl<R: RobotActuator> Tracker<R> {
    /// Create a tracker driving the given actuator.
    pub fn new(params: TrackerParams, robot: R) -> Self {
        let window = Arc::new(RwLock::new(params.initial_window));
        Self {
            params,
            window,
            region: None,
            resolution: None,
            workspace: TrackerWorkspace::new(),
            robot,
        }
    }

    /// Process one full-resolution frame.
    ///
    /// The frame is annotated in place (target marker while following, the
    /// calibration rectangle otherwise) and a report describing the outcome
    /// is returned. While `follow` is set this issues exactly one actuator
    /// command — `Drive` for a found target, `Stop` otherwise.
    pub fn process(&mut self, frame: &mut RgbaFrame, follow: bool) -> TrackReport {
        let start = Instant::now();
        self.ensure_stream(frame.w, frame.h);

        if !follow {
            self.draw_calibration_marker(frame);
            return TrackReport {
                found: false,
                target: None,
                command: None,
                latency_ms: start.elapsed().as_secs_f64() * 1000.0,
            };
        }

        let target = self.detect(frame);
        let command =
            steering::map_target(target.as_ref(), frame.w as f32, self.params.drive_speed);
        self.robot.send(&command);

        if let Some(t) = &target {
            draw::circle_outline(frame, t.center, t.radius, self.params.marker_color, 7.0);
            draw::disc(frame, t.center, 5.0, self.params.marker_color);
        }

        TrackReport {
            found: target.is_some(),
            target,
            command: Some(command),
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        }
    }

    /// Recalibrate the threshold window from the current frame.
    ///
    /// Samples the fixed calibration region (established at stream start;
    /// a frame smaller than that region fails with
    /// [`CalibrationError::RegionOutOfBounds`]), swaps the shared window,
    /// and returns the new bounds for user feedback.
    pub fn calibrate(&mut self, frame: &RgbaFrame) -> Result<ThresholdWindow, CalibrationError> {
        let region = match self.region {
            Some(region) => region,
            None => {
                // calibration before the first frame: adopt this resolution
                self.ensure_stream(frame.w, frame.h);
                CalibrationRegion::for_resolution(frame.w, frame.h)
            }
        };
        let window = calibrate::sample_window(frame, &region)?;
        *write_lock(&self.window) = window;
        debug!("calibrated threshold window: {window}");
        Ok(window)
    }

    /// Shared handle to the threshold window for external control paths.
    pub fn threshold_handle(&self) -> Arc<RwLock<ThresholdWindow>> {
        Arc::clone(&self.window)
    }

    /// Current snapshot of the threshold window.
    pub fn threshold_window(&self) -> ThresholdWindow {
        *read_lock(&self.window)
    }

    /// Calibration region, available once the first frame fixed the
    /// resolution.
    pub fn calibration_region(&self) -> Option<CalibrationRegion> {
        self.region
    }

    /// Update the forward speed used for subsequent drive commands.
    pub fn set_drive_speed(&mut self, speed: f32) {
        self.params.drive_speed = speed;
    }

    /// Update the annotation color.
    pub fn set_marker_color(&mut self, color: [u8; 4]) {
        self.params.marker_color = color;
    }

    /// Access the actuator (mainly for tests and shutdown paths).
    pub fn robot_mut(&mut self) -> &mut R {
        &mut self.robot
    }

    /// Fix the calibration region at stream start; a resolution change
    /// re-derives it and lets the workspace buffers resize on next use.
    fn ensure_stream(&mut self, width: usize, height: usize) {
        if self.resolution != Some((width, height)) {
            self.resolution = Some((width, height));
            self.region = Some(CalibrationRegion::for_resolution(width, height));
            debug!("stream resolution {width}x{height}, region {:?}", self.region);
        }
    }

    /// Stages 1–7: reduced-frame vision pipeline plus full-resolution
    /// circle fit. `None` when no blob with positive area matched.
    fn detect(&mut self, frame: &RgbaFrame) -> Option<TargetEstimate> {
        let ws = &mut self.workspace;
        reduce::reduce(frame, &mut ws.half, &mut ws.reduced);
        hsv::convert_rgba(&ws.reduced, &mut ws.hsv);

        let window = *read_lock(&self.window);
        binarize::in_range(&ws.hsv, &window, &mut ws.mask);
        morphology::close(&ws.mask, &mut ws.dilated, &mut ws.denoised);
        contours::extract_contours(&ws.denoised, &mut ws.labels, &mut ws.contours);

        let (idx, area) = contours::largest_contour(&ws.contours)?;
        debug!(
            "largest blob: contour {idx}/{} area {area:.1}",
            ws.contours.len()
        );
        estimate_target(&ws.contours[idx])
    }

    fn draw_calibration_marker(&self, frame: &mut RgbaFrame) {
        let Some(region) = self.region else {
            return;
        };
        // displayed marker is twice the sampled region, extending up/right
        let x = region.x as i32;
        let y = region.y as i32;
        let corner = (
            x + 2 * region.width as i32,
            y - 2 * region.height as i32,
        );
        draw::rect_outline(frame, (x, y), corner, self.params.marker_color, 5);
    }
}

/// Rescale a reduced-frame contour back to full resolution and fit its
/// minimal enclosing circle.
fn estimate_target(contour: &Contour) -> Option<TargetEstimate> {
    let scale = REDUCTION_FACTOR as f32;
    let points: Vec<Point2<f32>> = contour
        .points
        .iter()
        .map(|p| Point2::new(p.x as f32 * scale, p.y as f32 * scale))
        .collect();
    circle::min_enclosing_circle(&points).map(|c| TargetEstimate {
        center: c.center,
        radius: c.radius,
    })
}

fn read_lock(window: &RwLock<ThresholdWindow>) -> std::sync::RwLockReadGuard<'_, ThresholdWindow> {
    window.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_lock(
    window: &RwLock<ThresholdWindow>,
) -> std::sync::RwLockWriteGuard<'_, ThresholdWindow> {
    window.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
