//! Mower body: kinematic pose with collision handling.

use std::f32::consts::FRAC_PI_2;

use trina_nav::{MotionActuator, MotionCommand, Pose};

use crate::config::{CollisionMode, MowerConfig};
use crate::world::Collider;

/// The simulated mower.
///
/// Rotation is never blocked. A forward move that would make the
/// footprint touch the fence or an obstacle is handled per
/// [`CollisionMode`].
#[derive(Clone, Debug)]
pub struct MowerBody {
    pose: Pose,
    command: MotionCommand,
    radius: f32,
    collision_mode: CollisionMode,
    slide_friction: f32,
    collider: Collider,
    collisions: usize,
    travelled: f32,
}

impl MowerBody {
    /// Create a body at `pose`
    pub fn new(pose: Pose, config: &MowerConfig, collider: Collider) -> Self {
        Self {
            pose,
            command: MotionCommand::default(),
            radius: config.radius,
            collision_mode: config.collision_mode,
            slide_friction: config.slide_friction,
            collider,
            collisions: 0,
            travelled: 0.0,
        }
    }

    /// Footprint radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Last applied command
    #[inline]
    pub fn command(&self) -> MotionCommand {
        self.command
    }

    /// Blocked moves so far
    #[inline]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Distance actually moved so far (meters)
    #[inline]
    pub fn travelled(&self) -> f32 {
        self.travelled
    }

    #[inline]
    fn blocked(&self, pose: &Pose) -> bool {
        self.collider
            .collides(pose.position.x, pose.position.y, self.radius)
    }

    /// Try sliding sideways, left first, with friction loss
    fn slide(&self, distance: f32) -> Option<Pose> {
        let magnitude = distance.abs() * (1.0 - self.slide_friction);
        [FRAC_PI_2, -FRAC_PI_2].into_iter().find_map(|offset| {
            let sideways = self.pose.rotated(offset).advanced(magnitude);
            let candidate = Pose::new(sideways.position, self.pose.yaw);
            (!self.blocked(&candidate)).then_some(candidate)
        })
    }
}

impl MotionActuator for MowerBody {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn rotate(&mut self, delta_yaw: f32) {
        self.pose = self.pose.rotated(delta_yaw);
    }

    fn translate_forward(&mut self, distance: f32) {
        let target = self.pose.advanced(distance);

        if self.collision_mode == CollisionMode::Passthrough || !self.blocked(&target) {
            self.travelled += distance.abs();
            self.pose = target;
            return;
        }

        self.collisions += 1;
        if self.collision_mode == CollisionMode::Slide
            && let Some(slid) = self.slide(distance)
        {
            self.travelled += self.pose.position.planar_distance(&slid.position);
            self.pose = slid;
        }
    }

    fn record_command(&mut self, command: MotionCommand) {
        self.command = command;
    }
}
