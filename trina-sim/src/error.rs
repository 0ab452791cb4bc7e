//! Error types for the lawn simulator

use thiserror::Error;
use trina_nav::ConfigError;

/// Simulator error type
#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Controller configuration error: {0}")]
    Controller(#[from] ConfigError),

    #[error("Invalid world: {0}")]
    World(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
