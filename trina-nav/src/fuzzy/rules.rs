//! Declarative rule tables.
//!
//! A rule is a row of data: a conjunction of linguistic antecedents and a
//! singleton `(speed, turn_rate)` consequent. Consequents are written
//! against [`MotionLimits`] (`Level::Max`, `Level::OfMax(0.5)`, ...) and
//! resolved to numbers once, when the [`RuleBase`] is built.
//!
//! Each controller variant ships its own literal table:
//!
//! | Variant | Rules |
//! |---------|-------|
//! | `SingleSided` | 7: search + coverage level × terrain distance |
//! | `BilateralUnified` | 17: search + balance × terrain distance + one obstacle rule |
//! | `BilateralPerSide` | 19: search + balance × terrain distance + one obstacle rule per side + head-on tie-break |
//!
//! Turn sign: positive = counter-clockwise = toward the left side. The
//! coverage difference is `left − right`, so a `Left` turn on a
//! left-dominant difference steers toward the better-covered side.

use std::fmt;

use super::fuzzifier::Fuzzifier;
use super::terms::{BalanceTerm, CoverageTerm, DistanceTerm};
use crate::config::{ControllerConfig, ControllerVariant, MotionLimits};
use crate::error::ConfigError;
use crate::sensing::PerceptionSample;

use Antecedent::{Balance, Coverage, Obstacle, ObstacleLeft, ObstacleRight, TerrainDistance};
use DistanceTerm::{Close, Far, Medium};

/// One linguistic condition on one perception feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Antecedent {
    /// Bilateral coverage difference
    Balance(BalanceTerm),
    /// Single-sided coverage level
    Coverage(CoverageTerm),
    /// Average terrain-hit distance
    TerrainDistance(DistanceTerm),
    /// Nearest obstacle on the left side
    ObstacleLeft(DistanceTerm),
    /// Nearest obstacle on the right side
    ObstacleRight(DistanceTerm),
    /// Nearest obstacle on either side
    Obstacle(DistanceTerm),
}

impl fmt::Display for Antecedent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Antecedent::Balance(term) => write!(f, "balance={}", term),
            Antecedent::Coverage(term) => write!(f, "coverage={}", term),
            Antecedent::TerrainDistance(term) => write!(f, "terrain={}", term),
            Antecedent::ObstacleLeft(term) => write!(f, "obstacle_left={}", term),
            Antecedent::ObstacleRight(term) => write!(f, "obstacle_right={}", term),
            Antecedent::Obstacle(term) => write!(f, "obstacle={}", term),
        }
    }
}

/// Consequent magnitude, relative to the configured limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
    /// 0
    Zero,
    /// The configured minimum
    Min,
    /// The configured maximum
    Max,
    /// A fraction of the configured maximum
    OfMax(f32),
}

impl Level {
    fn resolve(self, min: f32, max: f32) -> f32 {
        match self {
            Level::Zero => 0.0,
            Level::Min => min,
            Level::Max => max,
            Level::OfMax(fraction) => fraction * max,
        }
    }

    fn is_valid(self) -> bool {
        match self {
            Level::OfMax(fraction) => fraction.is_finite() && fraction >= 0.0,
            _ => true,
        }
    }
}

/// Turn consequent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Steer {
    /// No turn
    Straight,
    /// Counter-clockwise turn of the given magnitude
    Left(Level),
    /// Clockwise turn of the given magnitude
    Right(Level),
}

impl Steer {
    /// Signed turn rate (deg/s) under `limits`.
    pub fn turn_rate(self, limits: &MotionLimits) -> f32 {
        match self {
            Steer::Straight => 0.0,
            Steer::Left(level) => level.resolve(limits.min_turn_rate, limits.max_turn_rate),
            Steer::Right(level) => -level.resolve(limits.min_turn_rate, limits.max_turn_rate),
        }
    }

    fn is_valid(self) -> bool {
        match self {
            Steer::Straight => true,
            Steer::Left(level) | Steer::Right(level) => level.is_valid(),
        }
    }
}

/// Multiplier applied to a rule's strength before summation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum RuleWeight {
    /// 1
    #[default]
    Unit,
    /// The configured `avoidance_weight`
    Avoidance,
    /// A fixed multiplier
    Fixed(f32),
}

impl RuleWeight {
    fn resolve(self, avoidance_weight: f32) -> f32 {
        match self {
            RuleWeight::Unit => 1.0,
            RuleWeight::Avoidance => avoidance_weight,
            RuleWeight::Fixed(weight) => weight,
        }
    }
}

/// A rule as written in a table.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleDef {
    /// Name used in debug output
    pub label: String,
    /// Conditions combined by product
    pub when: Vec<Antecedent>,
    /// Speed consequent
    pub speed: Level,
    /// Turn consequent
    pub steer: Steer,
    /// Strength multiplier
    pub weight: RuleWeight,
}

impl RuleDef {
    /// Unit-weight rule.
    pub fn new(label: impl Into<String>, when: Vec<Antecedent>, speed: Level, steer: Steer) -> Self {
        Self {
            label: label.into(),
            when,
            speed,
            steer,
            weight: RuleWeight::Unit,
        }
    }

    /// Same rule with a different strength multiplier.
    pub fn weighted(mut self, weight: RuleWeight) -> Self {
        self.weight = weight;
        self
    }

    fn validate(&self, avoidance_weight: f32) -> Result<(), ConfigError> {
        let field = || format!("rules.{}", self.label);

        if self.when.is_empty() {
            return Err(ConfigError::invalid(field(), "rule has no antecedents"));
        }
        if !self.speed.is_valid() || !self.steer.is_valid() {
            return Err(ConfigError::invalid(
                field(),
                "consequent fraction must be finite and >= 0",
            ));
        }
        let weight = self.weight.resolve(avoidance_weight);
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(ConfigError::invalid(
                field(),
                format!("weight must be finite and >= 0, got {}", weight),
            ));
        }
        Ok(())
    }

    fn resolve(&self, limits: &MotionLimits, avoidance_weight: f32) -> Rule {
        Rule {
            label: self.label.clone(),
            when: self.when.clone(),
            speed: self.speed.resolve(limits.min_speed, limits.max_speed),
            turn_rate: self.steer.turn_rate(limits),
            weight: self.weight.resolve(avoidance_weight),
        }
    }
}

/// A rule with numeric consequents.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// Name used in debug output
    pub label: String,
    /// Conditions combined by product
    pub when: Vec<Antecedent>,
    /// Speed consequent (m/s)
    pub speed: f32,
    /// Turn-rate consequent (deg/s, positive = left)
    pub turn_rate: f32,
    /// Strength multiplier
    pub weight: f32,
}

impl Rule {
    /// `weight × Π degree(antecedent)`, multiplied in declaration order.
    pub fn strength(&self, fuzzifier: &Fuzzifier, sample: &PerceptionSample) -> f32 {
        let product = self
            .when
            .iter()
            .fold(1.0f32, |acc, antecedent| acc * fuzzifier.degree(antecedent, sample));
        self.weight * product
    }
}

/// An ordered, resolved rule table.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// The built-in table for `config.variant`.
    pub fn for_variant(config: &ControllerConfig) -> Self {
        let defs = match config.variant {
            ControllerVariant::SingleSided => single_sided(),
            ControllerVariant::BilateralUnified => bilateral_unified(),
            ControllerVariant::BilateralPerSide => bilateral_per_side(),
        };
        Self::resolve(&defs, &config.motion, config.avoidance_weight)
    }

    /// Build from a caller-supplied table.
    ///
    /// Rejects an empty table, rules without antecedents, and negative or
    /// non-finite weights.
    pub fn from_defs(defs: &[RuleDef], config: &ControllerConfig) -> Result<Self, ConfigError> {
        if defs.is_empty() {
            return Err(ConfigError::invalid("rules", "rule table is empty"));
        }
        for def in defs {
            def.validate(config.avoidance_weight)?;
        }
        Ok(Self::resolve(defs, &config.motion, config.avoidance_weight))
    }

    fn resolve(defs: &[RuleDef], limits: &MotionLimits, avoidance_weight: f32) -> Self {
        Self {
            rules: defs
                .iter()
                .map(|def| def.resolve(limits, avoidance_weight))
                .collect(),
        }
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Smallest and largest speed consequent.
    pub fn speed_range(&self) -> (f32, f32) {
        min_max(self.rules.iter().map(|r| r.speed))
    }

    /// Smallest and largest turn-rate consequent.
    pub fn turn_rate_range(&self) -> (f32, f32) {
        min_max(self.rules.iter().map(|r| r.turn_rate))
    }
}

fn min_max(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Legacy single-sided table: coverage level × terrain distance.
pub fn single_sided() -> Vec<RuleDef> {
    vec![
        RuleDef::new("search", vec![Coverage(CoverageTerm::None)], Level::Zero, Steer::Left(Level::Max)),
        RuleDef::new(
            "far-partial",
            vec![TerrainDistance(Far), Coverage(CoverageTerm::Partial)],
            Level::Max,
            Steer::Left(Level::OfMax(1.0 / 8.0)),
        ),
        RuleDef::new(
            "far-full",
            vec![TerrainDistance(Far), Coverage(CoverageTerm::Full)],
            Level::Max,
            Steer::Left(Level::Min),
        ),
        RuleDef::new(
            "close-partial",
            vec![TerrainDistance(Close), Coverage(CoverageTerm::Partial)],
            Level::Min,
            Steer::Left(Level::OfMax(0.3)),
        ),
        RuleDef::new(
            "medium-partial",
            vec![TerrainDistance(Medium), Coverage(CoverageTerm::Partial)],
            Level::OfMax(0.5),
            Steer::Left(Level::OfMax(0.5)),
        ),
        RuleDef::new(
            "medium-full",
            vec![TerrainDistance(Medium), Coverage(CoverageTerm::Full)],
            Level::OfMax(0.7),
            Steer::Left(Level::Min),
        ),
        RuleDef::new(
            "close-full",
            vec![Coverage(CoverageTerm::Full), TerrainDistance(Close)],
            Level::Min,
            Steer::Left(Level::Min),
        ),
    ]
}

/// Search rule plus balance × terrain distance, shared by both bilateral tables.
fn bilateral_coverage() -> Vec<RuleDef> {
    let mut defs = vec![RuleDef::new(
        "search",
        vec![Balance(BalanceTerm::None)],
        Level::Zero,
        Steer::Left(Level::Max),
    )];

    // Turn per close / medium / far
    let families: [(BalanceTerm, [Steer; 3]); 5] = [
        (BalanceTerm::Balanced, [Steer::Straight; 3]),
        (
            BalanceTerm::PartialLeft,
            [
                Steer::Left(Level::OfMax(0.3)),
                Steer::Left(Level::OfMax(0.5)),
                Steer::Left(Level::OfMax(1.0 / 8.0)),
            ],
        ),
        (
            BalanceTerm::PartialRight,
            [
                Steer::Right(Level::OfMax(0.3)),
                Steer::Right(Level::OfMax(0.5)),
                Steer::Right(Level::OfMax(1.0 / 8.0)),
            ],
        ),
        (BalanceTerm::FullLeft, [Steer::Left(Level::Max); 3]),
        (BalanceTerm::FullRight, [Steer::Right(Level::Max); 3]),
    ];

    for (balance, steers) in families {
        let full = matches!(balance, BalanceTerm::FullLeft | BalanceTerm::FullRight);
        let speeds = [
            Level::Min,
            if full { Level::OfMax(0.7) } else { Level::OfMax(0.5) },
            Level::Max,
        ];
        for ((distance, speed), steer) in DistanceTerm::ALL.into_iter().zip(speeds).zip(steers) {
            defs.push(RuleDef::new(
                format!("{}-{}", balance, distance),
                vec![Balance(balance), TerrainDistance(distance)],
                speed,
                steer,
            ));
        }
    }

    defs
}

/// Bilateral table with one avoidance rule on the nearest obstacle overall.
///
/// The side of that obstacle is unknown, so avoidance always turns left.
pub fn bilateral_unified() -> Vec<RuleDef> {
    let mut defs = bilateral_coverage();
    defs.push(
        RuleDef::new("avoid", vec![Obstacle(Close)], Level::Zero, Steer::Left(Level::Max))
            .weighted(RuleWeight::Avoidance),
    );
    defs
}

/// Bilateral table with per-side avoidance: turn away from the near side.
///
/// An obstacle close on both sides (a wall head-on) makes the two side
/// rules cancel; `avoid-ahead` breaks the tie toward the left, like the
/// search turn.
pub fn bilateral_per_side() -> Vec<RuleDef> {
    let mut defs = bilateral_coverage();
    defs.push(
        RuleDef::new(
            "avoid-left",
            vec![ObstacleLeft(Close)],
            Level::Zero,
            Steer::Right(Level::Max),
        )
        .weighted(RuleWeight::Avoidance),
    );
    defs.push(
        RuleDef::new(
            "avoid-right",
            vec![ObstacleRight(Close)],
            Level::Zero,
            Steer::Left(Level::Max),
        )
        .weighted(RuleWeight::Avoidance),
    );
    defs.push(
        RuleDef::new(
            "avoid-ahead",
            vec![ObstacleLeft(Close), ObstacleRight(Close)],
            Level::Zero,
            Steer::Left(Level::Max),
        )
        .weighted(RuleWeight::Avoidance),
    );
    defs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn find<'a>(base: &'a RuleBase, label: &str) -> &'a Rule {
        base.rules()
            .iter()
            .find(|r| r.label == label)
            .unwrap_or_else(|| panic!("missing rule {}", label))
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(single_sided().len(), 7);
        assert_eq!(bilateral_unified().len(), 17);
        assert_eq!(bilateral_per_side().len(), 19);
    }

    #[test]
    fn test_for_variant_selects_table() {
        let base = RuleBase::for_variant(&ControllerConfig::single_sided());
        assert_eq!(base.len(), 7);
        let base = RuleBase::for_variant(&ControllerConfig::bilateral_unified());
        assert_eq!(base.len(), 17);
        let base = RuleBase::for_variant(&ControllerConfig::default());
        assert_eq!(base.len(), 19);
    }

    #[test]
    fn test_single_sided_consequents() {
        let base = RuleBase::for_variant(&ControllerConfig::single_sided());

        let search = find(&base, "search");
        assert_eq!((search.speed, search.turn_rate), (0.0, 90.0));

        let rule = find(&base, "far-partial");
        assert_eq!(rule.speed, 5.0);
        assert_relative_eq!(rule.turn_rate, 11.25);

        let rule = find(&base, "close-partial");
        assert_eq!(rule.speed, 1.0);
        assert_relative_eq!(rule.turn_rate, 27.0);

        let rule = find(&base, "medium-full");
        assert_relative_eq!(rule.speed, 3.5);
        assert_eq!(rule.turn_rate, 0.0);
    }

    #[test]
    fn test_bilateral_consequents_mirror() {
        let base = RuleBase::for_variant(&ControllerConfig::default());

        for distance in ["close", "medium", "far"] {
            let left = find(&base, &format!("partial-left-{}", distance));
            let right = find(&base, &format!("partial-right-{}", distance));
            assert_eq!(left.speed, right.speed);
            assert_eq!(left.turn_rate, -right.turn_rate);
            assert!(left.turn_rate > 0.0);

            let balanced = find(&base, &format!("balanced-{}", distance));
            assert_eq!(balanced.turn_rate, 0.0);
        }

        assert_eq!(find(&base, "balanced-medium").speed, 2.5);
        assert_eq!(find(&base, "full-left-far").speed, 5.0);
        assert_eq!(find(&base, "full-left-far").turn_rate, 90.0);
        assert_relative_eq!(find(&base, "full-right-medium").speed, 3.5);
    }

    #[test]
    fn test_avoidance_rules_weighted() {
        let base = RuleBase::for_variant(&ControllerConfig::default());

        let left = find(&base, "avoid-left");
        assert_eq!(left.weight, 5.0);
        assert_eq!((left.speed, left.turn_rate), (0.0, -90.0));

        let right = find(&base, "avoid-right");
        assert_eq!((right.speed, right.turn_rate), (0.0, 90.0));

        let ahead = find(&base, "avoid-ahead");
        assert_eq!(ahead.weight, 5.0);
        assert_eq!(ahead.when.len(), 2);
        assert_eq!((ahead.speed, ahead.turn_rate), (0.0, 90.0));

        let base = RuleBase::for_variant(&ControllerConfig::bilateral_unified());
        assert_eq!(find(&base, "avoid").weight, 5.0);
    }

    #[test]
    fn test_consequent_ranges() {
        let base = RuleBase::for_variant(&ControllerConfig::default());
        assert_eq!(base.speed_range(), (0.0, 5.0));
        assert_eq!(base.turn_rate_range(), (-90.0, 90.0));
    }

    #[test]
    fn test_from_defs_rejects_bad_rules() {
        let config = ControllerConfig::default();

        assert!(RuleBase::from_defs(&[], &config).is_err());

        let empty = RuleDef::new("empty", vec![], Level::Max, Steer::Straight);
        let err = RuleBase::from_defs(&[empty], &config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "rules.empty"));

        let negative = RuleDef::new("neg", vec![Obstacle(Close)], Level::Zero, Steer::Straight)
            .weighted(RuleWeight::Fixed(-1.0));
        assert!(RuleBase::from_defs(&[negative], &config).is_err());

        let bad_fraction = RuleDef::new(
            "nan",
            vec![Obstacle(Close)],
            Level::OfMax(f32::NAN),
            Steer::Straight,
        );
        assert!(RuleBase::from_defs(&[bad_fraction], &config).is_err());
    }

    #[test]
    fn test_from_defs_resolves_custom_table() {
        let config = ControllerConfig::default();
        let defs = vec![
            RuleDef::new("cruise", vec![TerrainDistance(Far)], Level::OfMax(0.8), Steer::Straight),
            RuleDef::new("brake", vec![Obstacle(Close)], Level::Zero, Steer::Right(Level::OfMax(0.5)))
                .weighted(RuleWeight::Fixed(2.0)),
        ];
        let base = RuleBase::from_defs(&defs, &config).unwrap();
        assert_eq!(base.len(), 2);
        assert_relative_eq!(base.rules()[0].speed, 4.0);
        assert_eq!(base.rules()[1].turn_rate, -45.0);
        assert_eq!(base.rules()[1].weight, 2.0);
    }

    #[test]
    fn test_antecedent_display() {
        assert_eq!(Balance(BalanceTerm::FullLeft).to_string(), "balance=full-left");
        assert_eq!(ObstacleRight(Close).to_string(), "obstacle_right=close");
    }
}
