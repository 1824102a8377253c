//! Robot actuator collaborator.
//!
//! The tracker issues fire-and-forget drive/stop commands; the transport
//! behind them (network, serial, simulation) is outside the crate. Delivery
//! failures are the collaborator's concern and are never surfaced to the
//! pipeline.

use crate::steering::SteeringCommand;
use log::debug;

/// Sink for steering commands.
pub trait RobotActuator {
    /// Drive at `speed` towards `angle` degrees.
    fn drive(&mut self, speed: f32, angle: f32);

    /// Halt the vehicle.
    fn stop(&mut self);

    /// Dispatch a mapped command to the matching method.
    fn send(&mut self, command: &SteeringCommand) {
        match *command {
            SteeringCommand::Drive { speed, angle } => self.drive(speed, angle),
            SteeringCommand::Stop => self.stop(),
        }
    }
}

/// Actuator that drops every command; useful for bench runs without a
/// vehicle attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRobot;

impl RobotActuator for NullRobot {
    fn drive(&mut self, _speed: f32, _angle: f32) {}
    fn stop(&mut self) {}
}

/// Actuator that logs every command at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogRobot;

impl RobotActuator for LogRobot {
    fn drive(&mut self, speed: f32, angle: f32) {
        debug!("robot drive speed={speed:.0} angle={angle:.1}");
    }

    fn stop(&mut self) {
        debug!("robot stop");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<SteeringCommand>,
    }

    impl RobotActuator for Recorder {
        fn drive(&mut self, speed: f32, angle: f32) {
            self.calls.push(SteeringCommand::Drive { speed, angle });
        }
        fn stop(&mut self) {
            self.calls.push(SteeringCommand::Stop);
        }
    }

    #[test]
    fn send_dispatches_to_the_matching_method() {
        let mut robot = Recorder::default();
        robot.send(&SteeringCommand::Drive {
            speed: 150.0,
            angle: 90.0,
        });
        robot.send(&SteeringCommand::Stop);
        assert_eq!(
            robot.calls,
            vec![
                SteeringCommand::Drive {
                    speed: 150.0,
                    angle: 90.0
                },
                SteeringCommand::Stop
            ]
        );
    }
}
