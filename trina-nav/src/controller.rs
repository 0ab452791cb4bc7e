//! Per-tick pipeline: sense → aggregate → infer → actuate.

use log::{debug, trace};

use crate::actuator::{MotionActuator, apply_command};
use crate::config::ControllerConfig;
use crate::core::Pose;
use crate::error::ConfigError;
use crate::fuzzy::{Fuzzifier, Inference, InferenceResult, MotionCommand, RuleBase, RuleDef, infer};
use crate::sensing::{FanLayout, PerceptionSample, WorldProbe, aggregate};

/// Result of one controller tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickOutcome {
    /// Features the decision was made from
    pub sample: PerceptionSample,
    /// Rule strengths and the defuzzified result
    pub inference: Inference,
}

impl TickOutcome {
    /// Defuzzified result.
    pub fn result(&self) -> InferenceResult {
        self.inference.result
    }

    /// The applied command, or `None` if the agent was left untouched.
    pub fn command(&self) -> Option<MotionCommand> {
        self.inference.result.command()
    }
}

/// Fuzzy sweep controller.
///
/// Holds only immutable, pre-resolved configuration: the fan layout, the
/// membership functions, and the rule table. Every tick is a pure function
/// of the agent pose and the probe answers, apart from the final motion
/// handed to the actuator.
///
/// # Example
///
/// ```rust,ignore
/// let controller = NavigationController::new(ControllerConfig::default())?;
/// let mut agent = Agent::at(spawn, 0.0);
/// loop {
///     controller.tick(&world, &mut agent, dt);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct NavigationController {
    config: ControllerConfig,
    layout: FanLayout,
    fuzzifier: Fuzzifier,
    rules: RuleBase,
}

impl NavigationController {
    /// Build a controller with the variant's built-in rule table.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = RuleBase::for_variant(&config);
        Self::assemble(config, rules)
    }

    /// Build a controller with a caller-supplied rule table.
    ///
    /// The variant still selects the fan layout.
    pub fn with_rules(config: ControllerConfig, defs: &[RuleDef]) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = RuleBase::from_defs(defs, &config)?;
        Self::assemble(config, rules)
    }

    fn assemble(config: ControllerConfig, rules: RuleBase) -> Result<Self, ConfigError> {
        debug!(
            "Controller: variant={}, {} rays, {} rules",
            config.variant,
            config.sensor.ray_count,
            rules.len()
        );
        Ok(Self {
            layout: FanLayout::new(&config.sensor, config.variant)?,
            fuzzifier: Fuzzifier::new(&config.fuzzy),
            rules,
            config,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Pre-computed ray angles.
    pub fn layout(&self) -> &FanLayout {
        &self.layout
    }

    /// Resolved membership functions.
    pub fn fuzzifier(&self) -> &Fuzzifier {
        &self.fuzzifier
    }

    /// Resolved rule table.
    pub fn rules(&self) -> &RuleBase {
        &self.rules
    }

    /// Cast the fan from `pose` and reduce the hits to features.
    pub fn perceive<P: WorldProbe + ?Sized>(&self, probe: &P, pose: &Pose) -> PerceptionSample {
        let scan = self.layout.sweep(probe, pose);
        aggregate(&scan)
    }

    /// Run inference on a sample.
    pub fn decide(&self, sample: &PerceptionSample) -> Inference {
        let inference = infer(
            &self.rules,
            &self.fuzzifier,
            sample,
            self.config.zero_strength_tolerance,
        );

        for firing in inference.active() {
            trace!("  rule {:<20} strength={:.4}", firing.label, firing.strength);
        }

        match inference.result {
            InferenceResult::Command(cmd) => debug!(
                "Command: speed={:.3} turn={:.2}deg/s (total strength {:.4})",
                cmd.speed, cmd.turn_rate, inference.total_strength
            ),
            InferenceResult::NoCommand => debug!(
                "No command: total strength {:.2e} below {:.0e}",
                inference.total_strength, self.config.zero_strength_tolerance
            ),
        }

        inference
    }

    /// One control cycle.
    ///
    /// On [`InferenceResult::NoCommand`] the actuator is not touched: the
    /// pose stays where it is and the previous command is kept.
    pub fn tick<P, A>(&self, probe: &P, actuator: &mut A, dt: f32) -> TickOutcome
    where
        P: WorldProbe + ?Sized,
        A: MotionActuator + ?Sized,
    {
        let pose = actuator.pose();
        let sample = self.perceive(probe, &pose);

        debug!(
            "Perception: coverage L={:?} R={:?} all={:?}, terrain dist={:?}, obstacle L={:?} R={:?} nearest={:?}",
            sample.left_coverage,
            sample.right_coverage,
            sample.overall_coverage,
            sample.avg_terrain_distance,
            sample.obstacle_left,
            sample.obstacle_right,
            sample.obstacle_nearest
        );

        let inference = self.decide(&sample);
        if let InferenceResult::Command(command) = inference.result {
            apply_command(actuator, command, dt);
        }

        TickOutcome { sample, inference }
    }
}
