//! Controller configuration.
//!
//! Every tunable of the pipeline lives in one immutable [`ControllerConfig`]
//! that is validated once at load time and then shared read-only by every
//! tick.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trina_nav::config::ControllerConfig;
//!
//! // Built-in defaults (bilateral fan, per-side obstacle avoidance)
//! let config = ControllerConfig::default();
//!
//! // Or load from YAML, falling back to defaults for missing fields
//! let config = ControllerConfig::load(Path::new("configs/controller.yaml"))?;
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! variant: bilateral_per_side
//! sensor:
//!   ray_count: 50            # per side
//!   ray_length: 10.0
//!   max_half_angle_deg: 25.0
//!   vertical_offset: 0.5
//! fuzzy:
//!   distance: { close: 1.0, medium: 2.0, far: 5.0 }
//!   coverage: { full: 0.7, partial_peak: 0.5, balanced_width: 0.0 }
//! motion:
//!   min_speed: 1.0
//!   max_speed: 5.0
//!   max_turn_rate: 90.0      # deg/s
//! avoidance_weight: 5.0
//! zero_strength_tolerance: 0.0001
//! ```

mod controller;
mod defaults;
mod fuzzy;
mod motion;
mod sensor;

pub use controller::{ControllerConfig, ControllerVariant};
pub use fuzzy::{CoverageThresholds, DistanceThresholds, FuzzyConfig};
pub use motion::MotionLimits;
pub use sensor::SensorFanConfig;
