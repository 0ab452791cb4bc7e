//! Fuzzy inference: membership functions, rule tables, defuzzification.
//!
//! ```text
//!   PerceptionSample ──Fuzzifier──▶ degrees ──RuleBase──▶ strengths ──defuzzify──▶ InferenceResult
//! ```
//!
//! Conjunction is the arithmetic product, consequents are singletons, and
//! the output is the strength-weighted average of the consequents.

mod defuzz;
mod fuzzifier;
mod membership;
pub mod rules;
mod terms;

pub use defuzz::{Inference, InferenceResult, MotionCommand, RuleFiring, defuzzify, infer};
pub use fuzzifier::Fuzzifier;
pub use membership::MembershipFunction;
pub use rules::{Antecedent, Level, Rule, RuleBase, RuleDef, RuleWeight, Steer};
pub use terms::{BalanceTerm, CoverageTerm, DistanceTerm};
