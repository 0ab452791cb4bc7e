//! Top-level controller configuration and loading.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::fuzzy::{DistanceThresholds, FuzzyConfig};
use super::motion::MotionLimits;
use super::sensor::SensorFanConfig;
use crate::error::ConfigError;

/// Which generation of the controller to run.
///
/// Selects the fan layout and the default rule table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerVariant {
    /// One symmetric fan, coverage level only, no obstacle rules
    SingleSided,
    /// Left and right fans, one nearest-overall obstacle distance
    BilateralUnified,
    /// Left and right fans, nearest obstacle tracked per side
    #[default]
    BilateralPerSide,
}

impl ControllerVariant {
    /// True for the two-fan variants.
    pub fn is_bilateral(self) -> bool {
        !matches!(self, ControllerVariant::SingleSided)
    }
}

impl fmt::Display for ControllerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerVariant::SingleSided => "single-sided",
            ControllerVariant::BilateralUnified => "bilateral-unified",
            ControllerVariant::BilateralPerSide => "bilateral-per-side",
        };
        f.write_str(name)
    }
}

/// Full controller configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Controller generation
    #[serde(default)]
    pub variant: ControllerVariant,

    /// Probe-ray fan geometry
    #[serde(default)]
    pub sensor: SensorFanConfig,

    /// Membership-function breakpoints
    #[serde(default)]
    pub fuzzy: FuzzyConfig,

    /// Speed / turn-rate scale for rule consequents
    #[serde(default)]
    pub motion: MotionLimits,

    /// Multiplier on obstacle-avoidance rule strength
    #[serde(default = "defaults::avoidance_weight")]
    pub avoidance_weight: f32,

    /// Total rule strength below which no command is issued
    #[serde(default = "defaults::zero_strength_tolerance")]
    pub zero_strength_tolerance: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            variant: ControllerVariant::default(),
            sensor: SensorFanConfig::default(),
            fuzzy: FuzzyConfig::default(),
            motion: MotionLimits::default(),
            avoidance_weight: defaults::avoidance_weight(),
            zero_strength_tolerance: defaults::zero_strength_tolerance(),
        }
    }
}

impl ControllerConfig {
    /// The single-sided controller: 100 rays over ±25°, thresholds 1 / 3 / 5.
    pub fn single_sided() -> Self {
        Self {
            variant: ControllerVariant::SingleSided,
            sensor: SensorFanConfig {
                ray_count: 100,
                ..Default::default()
            },
            fuzzy: FuzzyConfig {
                distance: DistanceThresholds::single_sided(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Bilateral fan with a single nearest-overall obstacle distance.
    pub fn bilateral_unified() -> Self {
        Self {
            variant: ControllerVariant::BilateralUnified,
            ..Default::default()
        }
    }

    /// Load configuration from a YAML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: ControllerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject malformed configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sensor.validate()?;
        self.fuzzy.validate()?;
        self.motion.validate()?;

        if !(self.avoidance_weight.is_finite() && self.avoidance_weight >= 0.0) {
            return Err(ConfigError::invalid(
                "avoidance_weight",
                format!("must be finite and >= 0, got {}", self.avoidance_weight),
            ));
        }
        if !(self.zero_strength_tolerance.is_finite() && self.zero_strength_tolerance > 0.0) {
            return Err(ConfigError::invalid(
                "zero_strength_tolerance",
                format!("must be positive, got {}", self.zero_strength_tolerance),
            ));
        }
        Ok(())
    }
}
