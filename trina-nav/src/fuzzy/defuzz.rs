//! Rule evaluation and weighted-average defuzzification.

use super::fuzzifier::Fuzzifier;
use super::rules::RuleBase;
use crate::sensing::PerceptionSample;

/// A commanded motion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionCommand {
    /// Forward speed (m/s)
    pub speed: f32,
    /// Turn rate (deg/s, positive = counter-clockwise)
    pub turn_rate: f32,
}

impl MotionCommand {
    /// Create a new command
    #[inline]
    pub fn new(speed: f32, turn_rate: f32) -> Self {
        Self { speed, turn_rate }
    }
}

/// Output of one inference step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InferenceResult {
    /// Weighted average of the firing rules
    Command(MotionCommand),
    /// Total strength below tolerance; keep the previous command
    NoCommand,
}

impl InferenceResult {
    /// The command, if any.
    pub fn command(self) -> Option<MotionCommand> {
        match self {
            InferenceResult::Command(cmd) => Some(cmd),
            InferenceResult::NoCommand => None,
        }
    }
}

/// Strength of one rule in one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleFiring {
    /// Rule label
    pub label: String,
    /// Weighted strength
    pub strength: f32,
}

/// Full trace of one inference step, for debug output and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct Inference {
    /// Per-rule strengths in declaration order
    pub firings: Vec<RuleFiring>,
    /// Σ strength
    pub total_strength: f32,
    /// Σ strength × speed
    pub weighted_speed: f32,
    /// Σ strength × turn rate
    pub weighted_turn_rate: f32,
    /// Defuzzified output
    pub result: InferenceResult,
}

impl Inference {
    /// Rules with non-zero strength.
    pub fn active(&self) -> impl Iterator<Item = &RuleFiring> {
        self.firings.iter().filter(|f| f.strength > 0.0)
    }

    /// Strength of the rule labelled `label`.
    pub fn strength_of(&self, label: &str) -> Option<f32> {
        self.firings
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.strength)
    }
}

/// Weighted sums accumulated in a fixed order.
#[derive(Clone, Copy, Debug, Default)]
struct Accumulator {
    total: f32,
    speed: f32,
    turn_rate: f32,
}

impl Accumulator {
    #[inline]
    fn add(&mut self, strength: f32, speed: f32, turn_rate: f32) {
        self.total += strength;
        self.speed += strength * speed;
        self.turn_rate += strength * turn_rate;
    }

    /// Speed and turn share one denominator, so one guard covers both.
    fn finish(self, tolerance: f32) -> InferenceResult {
        if self.total.abs() < tolerance {
            return InferenceResult::NoCommand;
        }
        InferenceResult::Command(MotionCommand::new(
            self.speed / self.total,
            self.turn_rate / self.total,
        ))
    }
}

/// Weighted average of `(strength, speed, turn_rate)` triples.
///
/// Sums are accumulated in iteration order. Returns
/// [`InferenceResult::NoCommand`] when `|Σ strength| < tolerance`.
pub fn defuzzify<I>(weighted: I, tolerance: f32) -> InferenceResult
where
    I: IntoIterator<Item = (f32, f32, f32)>,
{
    let mut acc = Accumulator::default();
    for (strength, speed, turn_rate) in weighted {
        acc.add(strength, speed, turn_rate);
    }
    acc.finish(tolerance)
}

/// Evaluate every rule against `sample` and defuzzify.
pub fn infer(
    rules: &RuleBase,
    fuzzifier: &Fuzzifier,
    sample: &PerceptionSample,
    tolerance: f32,
) -> Inference {
    let mut acc = Accumulator::default();
    let mut firings = Vec::with_capacity(rules.len());

    for rule in rules.rules() {
        let strength = rule.strength(fuzzifier, sample);
        acc.add(strength, rule.speed, rule.turn_rate);
        firings.push(RuleFiring {
            label: rule.label.clone(),
            strength,
        });
    }

    Inference {
        firings,
        total_strength: acc.total,
        weighted_speed: acc.speed,
        weighted_turn_rate: acc.turn_rate,
        result: acc.finish(tolerance),
    }
}
