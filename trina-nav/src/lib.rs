//! # Trina-Nav: Fuzzy Sweep Controller
//!
//! A per-tick navigation controller for a mowing or sweeping agent. Each
//! control cycle it casts a fan of probe rays, reduces the hits to a few
//! scalar features, runs them through a zero-order fuzzy rule base and
//! turns the weighted-average consequent into a forward speed and a turn
//! rate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trina_nav::{Agent, ControllerConfig, NavigationController};
//!
//! let controller = NavigationController::new(ControllerConfig::default())?;
//! let mut agent = Agent::at(spawn, 0.0);
//!
//! // `world` implements WorldProbe
//! let outcome = controller.tick(&world, &mut agent, 0.02);
//! if let Some(cmd) = outcome.command() {
//!     println!("speed {:.2} m/s, turn {:.1} deg/s", cmd.speed, cmd.turn_rate);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! ROS REP-103: X forward, Y left, Z up, counter-clockwise positive.
//! Positive turn rates steer left.
//!
//! ## Data Flow
//!
//! ```text
//!   WorldProbe ──▶ FanLayout::sweep ──▶ aggregate ──▶ PerceptionSample
//!                                                          │
//!                                                          ▼
//!   MotionActuator ◀── apply_command ◀── defuzzify ◀── RuleBase × Fuzzifier
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Point, vector and pose types
//! - [`sensing`]: Probe-ray fan and feature aggregation
//! - [`fuzzy`]: Membership functions, rule tables, inference
//! - [`actuator`]: Outbound motion interface
//! - [`controller`]: The tick pipeline
//! - [`config`]: Configuration and validation

#![warn(missing_docs)]

pub mod actuator;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod sensing;

pub use actuator::{Agent, MotionActuator, apply_command};
pub use config::{ControllerConfig, ControllerVariant};
pub use controller::{NavigationController, TickOutcome};
pub use crate::core::{Point3, Pose, Vector3};
pub use error::ConfigError;
pub use fuzzy::{Inference, InferenceResult, MotionCommand, RuleBase, RuleDef};
pub use sensing::{HitCategory, PerceptionSample, RayHit, WorldProbe};
