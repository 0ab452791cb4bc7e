//! Sensor fan configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::ConfigError;

/// Geometry of the probe-ray fan.
///
/// For the bilateral variants `ray_count` is the number of rays per side
/// (the fan casts `2 * ray_count`); for the single-sided variant it is the
/// total number of rays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorFanConfig {
    /// Rays per side (bilateral) or in total (single-sided), at least 2
    #[serde(default = "defaults::ray_count")]
    pub ray_count: usize,

    /// Maximum ray length (meters)
    #[serde(default = "defaults::ray_length")]
    pub ray_length: f32,

    /// Angle between the forward axis and the outermost ray (degrees)
    #[serde(default = "defaults::max_half_angle_deg")]
    pub max_half_angle_deg: f32,

    /// How far below the agent origin the rays are cast (meters)
    #[serde(default = "defaults::vertical_offset")]
    pub vertical_offset: f32,

    /// Report every cast ray to the probe's visualization hook
    #[serde(default)]
    pub visualize_rays: bool,
}

impl Default for SensorFanConfig {
    fn default() -> Self {
        Self {
            ray_count: defaults::ray_count(),
            ray_length: defaults::ray_length(),
            max_half_angle_deg: defaults::max_half_angle_deg(),
            vertical_offset: defaults::vertical_offset(),
            visualize_rays: false,
        }
    }
}

impl SensorFanConfig {
    /// Check ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ray_count < 2 {
            return Err(ConfigError::invalid(
                "sensor.ray_count",
                format!("must be at least 2, got {}", self.ray_count),
            ));
        }
        if !(self.ray_length.is_finite() && self.ray_length > 0.0) {
            return Err(ConfigError::invalid(
                "sensor.ray_length",
                format!("must be positive, got {}", self.ray_length),
            ));
        }
        if !(self.max_half_angle_deg > 0.0 && self.max_half_angle_deg < 180.0) {
            return Err(ConfigError::invalid(
                "sensor.max_half_angle_deg",
                format!("must be in (0, 180), got {}", self.max_half_angle_deg),
            ));
        }
        if !self.vertical_offset.is_finite() {
            return Err(ConfigError::invalid(
                "sensor.vertical_offset",
                "must be finite",
            ));
        }
        Ok(())
    }
}
