//! Agent pose: 3D position plus heading.

use serde::{Deserialize, Serialize};

use super::math::normalize_angle;
use super::point::{Point3, Vector3};

/// Agent position and forward orientation.
///
/// Yaw is in radians, counter-clockwise from +X, kept in [-π, π).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in meters
    pub position: Point3,
    /// Heading angle in radians
    pub yaw: f32,
}

impl Pose {
    /// Create a new pose (yaw is normalized).
    #[inline]
    pub fn new(position: Point3, yaw: f32) -> Self {
        Self {
            position,
            yaw: normalize_angle(yaw),
        }
    }

    /// Forward direction (horizontal unit vector).
    #[inline]
    pub fn forward(&self) -> Vector3 {
        Vector3::from_yaw(self.yaw)
    }

    /// Rotate about the vertical axis by `delta_yaw` radians.
    #[inline]
    pub fn rotated(self, delta_yaw: f32) -> Self {
        Self::new(self.position, self.yaw + delta_yaw)
    }

    /// Move along the current heading by `distance` meters.
    #[inline]
    pub fn advanced(self, distance: f32) -> Self {
        Self {
            position: self.position + self.forward() * distance,
            yaw: self.yaw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_rotate_then_advance() {
        let pose = Pose::new(Point3::ZERO, 0.0);
        let moved = pose.rotated(FRAC_PI_2).advanced(1.0);

        assert!(moved.position.x.abs() < 1e-6);
        assert_relative_eq!(moved.position.y, 1.0);
        assert_relative_eq!(moved.yaw, FRAC_PI_2);
    }

    #[test]
    fn test_yaw_wraps() {
        let pose = Pose::new(Point3::ZERO, 0.9 * PI).rotated(0.2 * PI);
        assert!(pose.yaw < 0.0);
        assert_relative_eq!(pose.yaw, -0.9 * PI, epsilon = 1e-5);
    }
}
