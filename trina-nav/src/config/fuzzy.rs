//! Membership-function breakpoints.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::ConfigError;

/// Breakpoints shared by every distance feature (terrain and obstacle).
///
/// ```text
///  1 ┤━━━━━╲     ╱╲     ╱━━━━━
///    │  Close╲  ╱Med╲  ╱ Far
///  0 ┤────────╳──────╳────────
///        close  medium  far
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistanceThresholds {
    /// Below this, `Close` is fully true (meters)
    #[serde(default = "defaults::close")]
    pub close: f32,

    /// Peak of `Medium`; `Close` and `Far` are zero here (meters)
    #[serde(default = "defaults::medium")]
    pub medium: f32,

    /// Above this, `Far` is fully true (meters)
    #[serde(default = "defaults::far")]
    pub far: f32,
}

impl Default for DistanceThresholds {
    fn default() -> Self {
        Self {
            close: defaults::close(),
            medium: defaults::medium(),
            far: defaults::far(),
        }
    }
}

impl DistanceThresholds {
    /// Thresholds of the single-sided controller (1 / 3 / 5).
    pub fn single_sided() -> Self {
        Self {
            close: 1.0,
            medium: 3.0,
            far: 5.0,
        }
    }

    /// Check that the thresholds are strictly increasing and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = self.close >= 0.0 && self.close < self.medium && self.medium < self.far;
        if !ordered || !self.far.is_finite() {
            return Err(ConfigError::invalid(
                "fuzzy.distance",
                format!(
                    "need 0 <= close < medium < far, got {} / {} / {}",
                    self.close, self.medium, self.far
                ),
            ));
        }
        Ok(())
    }
}

/// Breakpoints for the coverage features.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageThresholds {
    /// `Full*` starts ramping up here and saturates at 1
    #[serde(default = "defaults::full_threshold")]
    pub full: f32,

    /// Peak of the `Partial*` triangles
    #[serde(default = "defaults::partial_peak")]
    pub partial_peak: f32,

    /// Single-sided only: coverage at which `None` reaches zero
    #[serde(default = "defaults::none_range")]
    pub none_range: f32,

    /// Half-width of `Balanced` around a zero difference.
    /// Zero keeps it a single-point category.
    #[serde(default)]
    pub balanced_width: f32,
}

impl Default for CoverageThresholds {
    fn default() -> Self {
        Self {
            full: defaults::full_threshold(),
            partial_peak: defaults::partial_peak(),
            none_range: defaults::none_range(),
            balanced_width: 0.0,
        }
    }
}

impl CoverageThresholds {
    /// Check that every breakpoint lies strictly inside (0, 1).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("fuzzy.coverage.full", self.full),
            ("fuzzy.coverage.partial_peak", self.partial_peak),
            ("fuzzy.coverage.none_range", self.none_range),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be in (0, 1), got {}", value),
                ));
            }
        }
        if !(0.0..1.0).contains(&self.balanced_width) {
            return Err(ConfigError::invalid(
                "fuzzy.coverage.balanced_width",
                format!("must be in [0, 1), got {}", self.balanced_width),
            ));
        }
        Ok(())
    }
}

/// Fuzzification settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FuzzyConfig {
    /// Distance breakpoints
    #[serde(default)]
    pub distance: DistanceThresholds,

    /// Coverage breakpoints
    #[serde(default)]
    pub coverage: CoverageThresholds,
}

impl FuzzyConfig {
    /// Validate both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.distance.validate()?;
        self.coverage.validate()
    }
}
