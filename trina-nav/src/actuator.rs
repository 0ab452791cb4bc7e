//! Applying a motion command to an agent.
//!
//! The controller never moves the agent itself. It hands the command to a
//! [`MotionActuator`], which may be a physics body, a simulator, or the
//! plain kinematic [`Agent`] below.

use crate::core::{Point3, Pose};
use crate::fuzzy::MotionCommand;

/// Outbound motion interface.
pub trait MotionActuator {
    /// Current pose.
    fn pose(&self) -> Pose;

    /// Rotate about the vertical axis by `delta_yaw` radians (CCW positive).
    fn rotate(&mut self, delta_yaw: f32);

    /// Move along the current heading by `distance` meters.
    fn translate_forward(&mut self, distance: f32);

    /// Remember the command that produced the last motion.
    ///
    /// Default implementation does nothing.
    fn record_command(&mut self, _command: MotionCommand) {}
}

impl<T: MotionActuator + ?Sized> MotionActuator for &mut T {
    fn pose(&self) -> Pose {
        (**self).pose()
    }

    fn rotate(&mut self, delta_yaw: f32) {
        (**self).rotate(delta_yaw)
    }

    fn translate_forward(&mut self, distance: f32) {
        (**self).translate_forward(distance)
    }

    fn record_command(&mut self, command: MotionCommand) {
        (**self).record_command(command)
    }
}

/// Turn first, then move along the new heading.
///
/// `turn_rate` is in deg/s and `speed` in m/s; both are scaled by `dt`.
pub fn apply_command<A: MotionActuator + ?Sized>(actuator: &mut A, command: MotionCommand, dt: f32) {
    actuator.rotate(command.turn_rate.to_radians() * dt);
    actuator.translate_forward(command.speed * dt);
    actuator.record_command(command);
}

/// Kinematic agent: a pose plus the last commanded motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Agent {
    /// Current pose
    pub pose: Pose,
    /// Last commanded forward speed (m/s)
    pub speed: f32,
    /// Last commanded turn rate (deg/s)
    pub turn_rate: f32,
}

impl Agent {
    /// Agent at rest at `pose`.
    pub fn new(pose: Pose) -> Self {
        Self {
            pose,
            speed: 0.0,
            turn_rate: 0.0,
        }
    }

    /// Agent at rest at `position`, facing `yaw` (radians).
    pub fn at(position: Point3, yaw: f32) -> Self {
        Self::new(Pose::new(position, yaw))
    }

    /// Last commanded motion.
    pub fn command(&self) -> MotionCommand {
        MotionCommand::new(self.speed, self.turn_rate)
    }
}

impl MotionActuator for Agent {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn rotate(&mut self, delta_yaw: f32) {
        self.pose = self.pose.rotated(delta_yaw);
    }

    fn translate_forward(&mut self, distance: f32) {
        self.pose = self.pose.advanced(distance);
    }

    fn record_command(&mut self, command: MotionCommand) {
        self.speed = command.speed;
        self.turn_rate = command.turn_rate;
    }
}
