//! Speed and turn-rate limits that rule consequents are expressed against.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::ConfigError;

/// Consequent scale.
///
/// Speeds are in meters per second, turn rates in degrees per second
/// (positive = counter-clockwise, toward the left side).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionLimits {
    /// Slowest non-zero forward speed
    #[serde(default = "defaults::min_speed")]
    pub min_speed: f32,

    /// Fastest forward speed
    #[serde(default = "defaults::max_speed")]
    pub max_speed: f32,

    /// Smallest turn-rate magnitude
    #[serde(default)]
    pub min_turn_rate: f32,

    /// Largest turn-rate magnitude
    #[serde(default = "defaults::max_turn_rate")]
    pub max_turn_rate: f32,
}

impl Default for MotionLimits {
    fn default() -> Self {
        Self {
            min_speed: defaults::min_speed(),
            max_speed: defaults::max_speed(),
            min_turn_rate: 0.0,
            max_turn_rate: defaults::max_turn_rate(),
        }
    }
}

impl MotionLimits {
    /// Check `0 <= min <= max` for both speed and turn rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_speed >= 0.0 && self.min_speed <= self.max_speed && self.max_speed.is_finite())
        {
            return Err(ConfigError::invalid(
                "motion.speed",
                format!(
                    "need 0 <= min_speed <= max_speed, got {} / {}",
                    self.min_speed, self.max_speed
                ),
            ));
        }
        if !(self.min_turn_rate >= 0.0
            && self.min_turn_rate <= self.max_turn_rate
            && self.max_turn_rate.is_finite())
        {
            return Err(ConfigError::invalid(
                "motion.turn_rate",
                format!(
                    "need 0 <= min_turn_rate <= max_turn_rate, got {} / {}",
                    self.min_turn_rate, self.max_turn_rate
                ),
            ));
        }
        Ok(())
    }
}
