//! Configuration loading for the lawn simulator
//!
//! The controller section accepts the same fields as the YAML controller
//! configuration, written as TOML:
//!
//! ```toml
//! [world]
//! width = 20.0
//! depth = 20.0
//! grass_spacing = 0.5
//!
//! [[world.obstacles]]
//! x = 4.0
//! y = 14.0
//! radius = 1.0
//!
//! [controller]
//! variant = "bilateral_per_side"
//!
//! [controller.sensor]
//! ray_count = 50
//! ```

use crate::error::{Result, SimError};
use serde::Deserialize;
use std::path::Path;
use trina_nav::ControllerConfig;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub mower: MowerConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub noise: NoiseConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Lawn layout
#[derive(Clone, Debug, Deserialize)]
pub struct WorldConfig {
    /// Ground extent along X in meters (default: 20.0)
    #[serde(default = "default_width")]
    pub width: f32,

    /// Ground extent along Y in meters (default: 20.0)
    #[serde(default = "default_depth")]
    pub depth: f32,

    /// Distance between grass patches (default: 0.5)
    #[serde(default = "default_grass_spacing")]
    pub grass_spacing: f32,

    /// Radius of one grass patch as seen by the rays (default: 0.2)
    #[serde(default = "default_patch_radius")]
    pub patch_radius: f32,

    /// Surround the ground with a fence (default: true)
    #[serde(default = "default_fenced")]
    pub fenced: bool,

    /// Round obstacles placed on the lawn
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>,
}

/// A round obstacle (tree, pond, flower bed)
#[derive(Clone, Debug, Deserialize)]
pub struct ObstacleConfig {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// How the mower body reacts to a blocked move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionMode {
    /// Stay in place, keep the rotation
    Stop,
    /// Try moving sideways along the obstacle
    #[default]
    Slide,
    /// Ignore obstacles (debugging)
    Passthrough,
}

/// Mower body
#[derive(Clone, Debug, Deserialize)]
pub struct MowerConfig {
    /// Footprint radius; grass inside it is cut (default: 0.5)
    #[serde(default = "default_mower_radius")]
    pub radius: f32,

    /// Height of the mower origin above the ground (default: 0.65)
    #[serde(default = "default_spawn_height")]
    pub spawn_height: f32,

    /// Collision handling (default: slide)
    #[serde(default)]
    pub collision_mode: CollisionMode,

    /// Fraction of motion lost when sliding (default: 0.3)
    #[serde(default = "default_slide_friction")]
    pub slide_friction: f32,
}

/// Tick loop
#[derive(Clone, Debug, Deserialize)]
pub struct RunConfig {
    /// Number of control ticks (default: 3000)
    #[serde(default = "default_ticks")]
    pub ticks: usize,

    /// Seconds per tick (default: 0.02)
    #[serde(default = "default_dt")]
    pub dt: f32,

    /// Log progress every N ticks, 0 disables (default: 500)
    #[serde(default = "default_log_interval")]
    pub log_interval: usize,

    /// Stop early once every patch is cut (default: true)
    #[serde(default = "default_stop_when_done")]
    pub stop_when_done: bool,
}

/// Sensor noise
#[derive(Clone, Debug, Deserialize)]
pub struct NoiseConfig {
    /// Apply noise to probe rays (default: false)
    #[serde(default)]
    pub enabled: bool,

    /// RNG seed, 0 = from entropy (default: 42)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Gaussian range noise in meters (default: 0.02)
    #[serde(default = "default_range_stddev")]
    pub range_stddev: f32,

    /// Probability that a ray misses outright (default: 0.0)
    #[serde(default)]
    pub miss_rate: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            depth: default_depth(),
            grass_spacing: default_grass_spacing(),
            patch_radius: default_patch_radius(),
            fenced: default_fenced(),
            obstacles: Vec::new(),
        }
    }
}

impl Default for MowerConfig {
    fn default() -> Self {
        Self {
            radius: default_mower_radius(),
            spawn_height: default_spawn_height(),
            collision_mode: CollisionMode::default(),
            slide_friction: default_slide_friction(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            dt: default_dt(),
            log_interval: default_log_interval(),
            stop_when_done: default_stop_when_done(),
        }
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            seed: default_seed(),
            range_stddev: default_range_stddev(),
            miss_rate: 0.0,
        }
    }
}

// Default value functions
fn default_width() -> f32 {
    20.0
}
fn default_depth() -> f32 {
    20.0
}
fn default_grass_spacing() -> f32 {
    0.5
}
fn default_patch_radius() -> f32 {
    0.2
}
fn default_fenced() -> bool {
    true
}
fn default_mower_radius() -> f32 {
    0.5
}
fn default_spawn_height() -> f32 {
    0.65
} // half body height plus 0.15 clearance over cut grass
fn default_slide_friction() -> f32 {
    0.3
}
fn default_ticks() -> usize {
    3000
}
fn default_dt() -> f32 {
    0.02
}
fn default_log_interval() -> usize {
    500
}
fn default_stop_when_done() -> bool {
    true
}
fn default_seed() -> u64 {
    42
}
fn default_range_stddev() -> f32 {
    0.02
}

impl SimConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse from a TOML string and validate it
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts the simulator cannot run
    pub fn validate(&self) -> Result<()> {
        let w = &self.world;
        if !(w.width > 0.0 && w.depth > 0.0) {
            return Err(SimError::World(format!(
                "ground must have positive size, got {} x {}",
                w.width, w.depth
            )));
        }
        if !(w.grass_spacing > 0.0) {
            return Err(SimError::World(format!(
                "grass_spacing must be positive, got {}",
                w.grass_spacing
            )));
        }
        if !(w.patch_radius > 0.0 && w.patch_radius <= w.grass_spacing) {
            return Err(SimError::World(format!(
                "patch_radius must be in (0, grass_spacing], got {}",
                w.patch_radius
            )));
        }
        if let Some(o) = w.obstacles.iter().find(|o| !(o.radius > 0.0)) {
            return Err(SimError::World(format!(
                "obstacle at ({}, {}) has non-positive radius",
                o.x, o.y
            )));
        }
        if !(self.mower.radius > 0.0) {
            return Err(SimError::World(format!(
                "mower radius must be positive, got {}",
                self.mower.radius
            )));
        }
        if !(0.0..=1.0).contains(&self.mower.slide_friction) {
            return Err(SimError::World(format!(
                "slide_friction must be in [0, 1], got {}",
                self.mower.slide_friction
            )));
        }
        if !(self.run.dt > 0.0) {
            return Err(SimError::World(format!(
                "dt must be positive, got {}",
                self.run.dt
            )));
        }
        if !(0.0..=1.0).contains(&self.noise.miss_rate) || !(self.noise.range_stddev >= 0.0) {
            return Err(SimError::World(format!(
                "noise needs miss_rate in [0, 1] and range_stddev >= 0, got {} / {}",
                self.noise.miss_rate, self.noise.range_stddev
            )));
        }
        self.controller.validate()?;
        Ok(())
    }
}
