mod common;

use common::synthetic_image::{disc_frame, uniform_frame};
use color_tracker::image::RgbaFrame;
use color_tracker::{
    CalibrationError, RobotActuator, SteeringCommand, Tracker, TrackerParams,
};

const ORANGE: [u8; 4] = [255, 128, 0, 255];
// full-range HSV (85, 255, 255): well outside the orange preset window
const GREEN_BLOB: [u8; 4] = [0, 255, 0, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

/// Actuator that records every command for inspection.
#[derive(Default)]
struct RecordingRobot {
    commands: Vec<SteeringCommand>,
}

impl RobotActuator for RecordingRobot {
    fn drive(&mut self, speed: f32, angle: f32) {
        self.commands.push(SteeringCommand::Drive { speed, angle });
    }
    fn stop(&mut self) {
        self.commands.push(SteeringCommand::Stop);
    }
}

fn tracker() -> Tracker<RecordingRobot> {
    Tracker::new(TrackerParams::default(), RecordingRobot::default())
}

#[test]
fn orange_disc_yields_a_target_near_the_truth() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (cx, cy, radius) = (320.0f32, 240.0f32, 60.0f32);
    let mut frame = disc_frame(640, 480, (cx, cy), radius, ORANGE, BLACK);

    let mut tracker = tracker();
    let report = tracker.process(&mut frame, true);

    assert!(report.found, "expected the disc to be detected");
    let target = report.target.expect("target present when found");
    assert!(
        (target.center.x - cx).abs() <= 8.0,
        "center.x off by too much: {:?}",
        target.center
    );
    assert!(
        (target.center.y - cy).abs() <= 8.0,
        "center.y off by too much: {:?}",
        target.center
    );
    assert!(
        target.radius >= 44.0 && target.radius <= 68.0,
        "radius far from the truth: {}",
        target.radius
    );

    // exactly one actuator call, driving roughly straight ahead
    assert_eq!(tracker.robot_mut().commands.len(), 1);
    match tracker.robot_mut().commands[0] {
        SteeringCommand::Drive { speed, angle } => {
            assert_eq!(speed, 150.0);
            assert!((angle - 180.0).abs() <= 5.0, "angle {angle}");
        }
        SteeringCommand::Stop => panic!("expected a drive command"),
    }
}

#[test]
fn frame_without_matching_color_stops() {
    let mut frame = uniform_frame(640, 480, BLACK);
    let mut tracker = tracker();
    let report = tracker.process(&mut frame, true);

    assert!(!report.found);
    assert!(report.target.is_none());
    assert_eq!(report.command, Some(SteeringCommand::Stop));
    assert_eq!(tracker.robot_mut().commands, vec![SteeringCommand::Stop]);
}

#[test]
fn disabled_following_draws_the_marker_and_stays_silent() {
    let mut frame = uniform_frame(640, 480, BLACK);
    let mut tracker = tracker();
    let report = tracker.process(&mut frame, false);

    assert!(!report.found);
    assert_eq!(report.command, None);
    assert!(
        tracker.robot_mut().commands.is_empty(),
        "no actuator traffic while following is off"
    );

    // region for 640x480 is 40x30 at (280, 270); the displayed marker is the
    // doubled rectangle extending up and right, so the left edge runs
    // through (280, 240)
    let region = tracker.calibration_region().expect("region fixed at stream start");
    assert_eq!((region.x, region.y, region.width, region.height), (280, 270, 40, 30));
    assert_eq!(frame.get(280, 240), [0, 255, 0, 255]);
    // frame center stays untouched
    assert_eq!(frame.get(320, 240), BLACK);
}

#[test]
fn calibration_retargets_the_tracker() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tracker = tracker();

    // a green target is invisible to the orange preset
    let mut green_disc = disc_frame(640, 480, (480.0, 240.0), 50.0, GREEN_BLOB, BLACK);
    let report = tracker.process(&mut green_disc, true);
    assert!(!report.found);

    // calibrate against a uniformly green frame
    let green_frame = uniform_frame(640, 480, GREEN_BLOB);
    let window = tracker.calibrate(&green_frame).expect("region fits");
    assert_eq!(window.lower.x, 60.0);
    assert_eq!(window.upper.x, 110.0);
    assert_eq!(window.upper.y, 305.0, "saturation bound stays unclamped");
    assert_eq!(tracker.threshold_window(), window);

    // the same disc is now followed, steering to the right quadrant
    let report = tracker.process(&mut green_disc, true);
    assert!(report.found, "green disc detected after calibration");
    match report.command {
        Some(SteeringCommand::Drive { angle, .. }) => {
            assert!((angle - 90.0).abs() <= 6.0, "angle {angle}");
        }
        other => panic!("expected a drive command, got {other:?}"),
    }
}

#[test]
fn calibration_region_outside_the_frame_fails() {
    let mut tracker = tracker();
    let mut big = uniform_frame(640, 480, BLACK);
    tracker.process(&mut big, true);

    // the region stays fixed for the stream; a far smaller frame cannot
    // contain it
    let small = RgbaFrame::new(64, 48);
    let err = tracker.calibrate(&small).unwrap_err();
    assert!(matches!(err, CalibrationError::RegionOutOfBounds { .. }));
}

#[test]
fn threshold_handle_swaps_are_seen_on_the_next_frame() {
    use color_tracker::ThresholdWindow;
    use nalgebra::Vector4;

    let mut tracker = tracker();
    let handle = tracker.threshold_handle();

    // external control path swaps in a window matching pure green
    *handle.write().unwrap() = ThresholdWindow::new(
        Vector4::new(60.0, 205.0, 205.0, 0.0),
        Vector4::new(110.0, 305.0, 305.0, 255.0),
    );

    let mut green_disc = disc_frame(640, 480, (320.0, 240.0), 60.0, GREEN_BLOB, BLACK);
    let report = tracker.process(&mut green_disc, true);
    assert!(report.found, "swapped window takes effect on the next frame");
}
