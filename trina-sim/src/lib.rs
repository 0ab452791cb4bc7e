//! # Trina-Sim: Headless Lawn World
//!
//! A reference world for the `trina-nav` controller: a fenced lawn covered
//! in grass patches, optional round obstacles, and a mower body that cuts
//! the grass it drives over.
//!
//! - [`world`]: grass lattice, cut state, fence and obstacles, ray casting
//! - [`body`]: mower pose with collision handling
//! - [`noise`]: seeded range noise and ray drop-outs
//! - [`sim`]: tick loop and run summary
//! - [`config`]: TOML configuration

pub mod body;
pub mod config;
pub mod error;
pub mod noise;
pub mod sim;
pub mod world;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use sim::{RunSummary, Simulation};
