//! Core geometric types for the sweep controller.
//!
//! All types follow the ROS REP-103 coordinate convention:
//! - **X-axis**: Forward
//! - **Y-axis**: Left
//! - **Z-axis**: Up
//! - **Yaw**: Counter-clockwise rotation about +Z (radians)
//!
//! The controller works in the horizontal plane; Z only carries the height
//! at which the sensor fan is cast.

mod math;
mod point;
mod pose;

pub use math::{TWO_PI, normalize_angle};
pub use point::{Point3, Vector3};
pub use pose::Pose;
