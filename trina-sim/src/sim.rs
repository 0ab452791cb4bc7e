//! Tick loop tying the lawn, the mower body and the controller together.

use std::cell::RefCell;
use std::fmt;

use tracing::{debug, info};
use trina_nav::{
    ControllerConfig, InferenceResult, MotionActuator, NavigationController, Pose, TickOutcome,
};

use crate::body::MowerBody;
use crate::config::{NoiseConfig, RunConfig, SimConfig};
use crate::error::Result;
use crate::noise::{NoiseGenerator, NoisyProbe};
use crate::world::Lawn;

/// Totals for one run
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Ticks executed
    pub ticks: usize,
    /// Ticks on which the controller issued no command
    pub no_command_ticks: usize,
    /// Patches laid out
    pub patches_total: usize,
    /// Patches mowed
    pub patches_cut: usize,
    /// Blocked moves
    pub collisions: usize,
    /// Distance moved (meters)
    pub distance: f32,
}

impl RunSummary {
    /// Percentage of the lawn mowed
    pub fn coverage_percent(&self) -> f32 {
        if self.patches_total == 0 {
            100.0
        } else {
            self.patches_cut as f32 / self.patches_total as f32 * 100.0
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ticks ({} without command), {}/{} patches cut ({:.1}%), {} collisions, {:.1} m travelled",
            self.ticks,
            self.no_command_ticks,
            self.patches_cut,
            self.patches_total,
            self.coverage_percent(),
            self.collisions,
            self.distance
        )
    }
}

/// One mower on one lawn
pub struct Simulation {
    lawn: Lawn,
    body: MowerBody,
    controller: NavigationController,
    noise: Option<RefCell<NoiseGenerator>>,
    noise_config: NoiseConfig,
    run: RunConfig,
    ticks: usize,
    no_command_ticks: usize,
}

impl Simulation {
    /// Lay out the lawn, spawn the mower at its center facing +X, and
    /// mow whatever the mower starts on.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let SimConfig {
            world,
            mower,
            run,
            noise,
            controller,
        } = config;

        let mut lawn = Lawn::new(&world);
        let spawn = Pose::new(lawn.center(mower.spawn_height), 0.0);
        lawn.mow(spawn.position, mower.radius);

        let body = MowerBody::new(spawn, &mower, lawn.collider().clone());
        let controller = NavigationController::new(controller)?;

        info!(
            "Lawn {:.1} x {:.1} m, {} patches, {} obstacles, controller {}",
            world.width,
            world.depth,
            lawn.patch_count(),
            world.obstacles.len(),
            controller.config().variant
        );

        Ok(Self {
            lawn,
            body,
            controller,
            noise: noise
                .enabled
                .then(|| RefCell::new(NoiseGenerator::new(noise.seed))),
            noise_config: noise,
            run,
            ticks: 0,
            no_command_ticks: 0,
        })
    }

    /// Simulation with every setting at its default
    pub fn with_controller(controller: ControllerConfig) -> Result<Self> {
        Self::new(SimConfig {
            controller,
            ..Default::default()
        })
    }

    /// The lawn
    pub fn lawn(&self) -> &Lawn {
        &self.lawn
    }

    /// The mower
    pub fn body(&self) -> &MowerBody {
        &self.body
    }

    /// The controller
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Run one control tick, then mow under the footprint
    pub fn step(&mut self) -> TickOutcome {
        let dt = self.run.dt;
        let outcome = match &self.noise {
            Some(noise) => {
                let probe = NoisyProbe::new(&self.lawn, noise, &self.noise_config);
                self.controller.tick(&probe, &mut self.body, dt)
            }
            None => self.controller.tick(&self.lawn, &mut self.body, dt),
        };

        self.ticks += 1;
        if outcome.result() == InferenceResult::NoCommand {
            self.no_command_ticks += 1;
        }

        let cut = self.lawn.mow(self.body.pose().position, self.body.radius());
        if cut > 0 {
            debug!("Tick {}: cut {} patches", self.ticks, cut);
        }

        outcome
    }

    /// Run the configured number of ticks
    pub fn run(&mut self) -> RunSummary {
        self.run_for(self.run.ticks)
    }

    /// Run up to `ticks` ticks, stopping early when the lawn is done if
    /// configured to
    pub fn run_for(&mut self, ticks: usize) -> RunSummary {
        for _ in 0..ticks {
            if self.run.stop_when_done && self.lawn.is_done() {
                info!("Lawn finished after {} ticks", self.ticks);
                break;
            }

            self.step();

            if self.run.log_interval > 0 && self.ticks % self.run.log_interval == 0 {
                let pose = self.body.pose();
                info!(
                    "Tick {}: pose ({:.2}, {:.2}, {:.0}°), coverage {:.1}%",
                    self.ticks,
                    pose.position.x,
                    pose.position.y,
                    pose.yaw.to_degrees(),
                    self.lawn.coverage() * 100.0
                );
            }
        }

        self.summary()
    }

    /// Totals so far
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.ticks,
            no_command_ticks: self.no_command_ticks,
            patches_total: self.lawn.patch_count(),
            patches_cut: self.lawn.cut_count(),
            collisions: self.body.collisions(),
            distance: self.body.travelled(),
        }
    }
}
