//! Error types for trina-nav.

/// Configuration loading and validation errors.
///
/// Malformed configuration is rejected once, when it is loaded or when a
/// rule base is built from it. Nothing is re-validated per tick.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value is out of range or inconsistent with another value
    #[error("Invalid {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    /// Create an `Invalid` error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::invalid("sensor.ray_count", "must be at least 2, got 1");
        assert_eq!(
            err.to_string(),
            "Invalid sensor.ray_count: must be at least 2, got 1"
        );
    }
}
