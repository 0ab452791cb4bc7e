//! Feature → membership-degree mapping.

use super::membership::MembershipFunction;
use super::rules::Antecedent;
use super::terms::{BalanceTerm, CoverageTerm, DistanceTerm};
use crate::config::FuzzyConfig;
use crate::sensing::PerceptionSample;

/// Membership functions resolved from [`FuzzyConfig`].
///
/// Absence handling lives here, not in the shapes:
/// - distance terms are 0 when the feature is absent
/// - `BalanceTerm::None` is 1 only when the coverage difference is absent
/// - `CoverageTerm::None` is 1 when coverage is absent
#[derive(Clone, Debug, PartialEq)]
pub struct Fuzzifier {
    close: MembershipFunction,
    medium: MembershipFunction,
    far: MembershipFunction,

    full_left: MembershipFunction,
    partial_left: MembershipFunction,
    balanced: MembershipFunction,
    partial_right: MembershipFunction,
    full_right: MembershipFunction,

    coverage_none: MembershipFunction,
    coverage_partial: MembershipFunction,
    coverage_full: MembershipFunction,
}

impl Fuzzifier {
    /// Resolve breakpoints into shapes.
    pub fn new(config: &FuzzyConfig) -> Self {
        let d = &config.distance;
        let c = &config.coverage;

        Self {
            close: MembershipFunction::ramp(d.medium, d.close),
            medium: MembershipFunction::triangle(d.close, d.medium, d.far),
            far: MembershipFunction::ramp(d.medium, d.far),

            full_left: MembershipFunction::ramp(c.full, 1.0),
            partial_left: MembershipFunction::triangle(0.0, c.partial_peak, 1.0),
            balanced: MembershipFunction::point(0.0, c.balanced_width),
            partial_right: MembershipFunction::triangle(-1.0, -c.partial_peak, 0.0),
            full_right: MembershipFunction::ramp(-c.full, -1.0),

            coverage_none: MembershipFunction::ramp(c.none_range, 0.0),
            coverage_partial: MembershipFunction::triangle(0.0, c.partial_peak, 1.0),
            coverage_full: MembershipFunction::ramp(c.full, 1.0),
        }
    }

    /// Shape behind a distance term.
    pub fn distance_function(&self, term: DistanceTerm) -> MembershipFunction {
        match term {
            DistanceTerm::Close => self.close,
            DistanceTerm::Medium => self.medium,
            DistanceTerm::Far => self.far,
        }
    }

    /// Shape behind a balance term. `None` has no shape.
    pub fn balance_function(&self, term: BalanceTerm) -> Option<MembershipFunction> {
        match term {
            BalanceTerm::None => None,
            BalanceTerm::FullLeft => Some(self.full_left),
            BalanceTerm::PartialLeft => Some(self.partial_left),
            BalanceTerm::Balanced => Some(self.balanced),
            BalanceTerm::PartialRight => Some(self.partial_right),
            BalanceTerm::FullRight => Some(self.full_right),
        }
    }

    /// Shape behind a coverage-level term.
    pub fn coverage_function(&self, term: CoverageTerm) -> MembershipFunction {
        match term {
            CoverageTerm::None => self.coverage_none,
            CoverageTerm::Partial => self.coverage_partial,
            CoverageTerm::Full => self.coverage_full,
        }
    }

    /// Degree of a distance term; 0 when nothing was sensed.
    pub fn distance(&self, term: DistanceTerm, value: Option<f32>) -> f32 {
        value.map_or(0.0, |v| self.distance_function(term).degree(v))
    }

    /// Degree of a balance term for a coverage difference.
    pub fn balance(&self, term: BalanceTerm, difference: Option<f32>) -> f32 {
        match (self.balance_function(term), difference) {
            (None, None) => 1.0,
            (None, Some(_)) => 0.0,
            (Some(_), None) => 0.0,
            (Some(mf), Some(d)) => mf.degree(d),
        }
    }

    /// Degree of a coverage-level term.
    pub fn coverage(&self, term: CoverageTerm, level: Option<f32>) -> f32 {
        match (term, level) {
            (CoverageTerm::None, None) => 1.0,
            (_, None) => 0.0,
            (_, Some(c)) => self.coverage_function(term).degree(c),
        }
    }

    /// Evaluate one antecedent against a sample.
    pub fn degree(&self, antecedent: &Antecedent, sample: &PerceptionSample) -> f32 {
        match *antecedent {
            Antecedent::Balance(term) => self.balance(term, sample.coverage_difference()),
            Antecedent::Coverage(term) => self.coverage(term, sample.overall_coverage),
            Antecedent::TerrainDistance(term) => self.distance(term, sample.avg_terrain_distance),
            Antecedent::ObstacleLeft(term) => self.distance(term, sample.obstacle_left),
            Antecedent::ObstacleRight(term) => self.distance(term, sample.obstacle_right),
            Antecedent::Obstacle(term) => self.distance(term, sample.obstacle_nearest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoverageThresholds, DistanceThresholds};
    use approx::assert_relative_eq;

    fn fuzzifier() -> Fuzzifier {
        Fuzzifier::new(&FuzzyConfig::default())
    }

    #[test]
    fn test_distance_terms() {
        let f = fuzzifier();

        assert_eq!(f.distance(DistanceTerm::Close, Some(0.0)), 1.0);
        assert_eq!(f.distance(DistanceTerm::Close, Some(1.0)), 1.0);
        assert_relative_eq!(f.distance(DistanceTerm::Close, Some(1.5)), 0.5);
        assert_relative_eq!(f.distance(DistanceTerm::Medium, Some(1.5)), 0.5);
        assert_eq!(f.distance(DistanceTerm::Medium, Some(2.0)), 1.0);
        assert_eq!(f.distance(DistanceTerm::Far, Some(2.0)), 0.0);
        assert_relative_eq!(f.distance(DistanceTerm::Far, Some(3.5)), 0.5);
        assert_eq!(f.distance(DistanceTerm::Far, Some(6.0)), 1.0);
    }

    #[test]
    fn test_absent_distance_is_zero_everywhere() {
        let f = fuzzifier();
        for term in DistanceTerm::ALL {
            assert_eq!(f.distance(term, None), 0.0);
        }
    }

    #[test]
    fn test_balance_terms() {
        let f = fuzzifier();

        assert_eq!(f.balance(BalanceTerm::None, None), 1.0);
        assert_eq!(f.balance(BalanceTerm::None, Some(0.0)), 0.0);
        assert_eq!(f.balance(BalanceTerm::Balanced, None), 0.0);

        assert_eq!(f.balance(BalanceTerm::Balanced, Some(0.0)), 1.0);
        assert_eq!(f.balance(BalanceTerm::Balanced, Some(0.01)), 0.0);

        assert_eq!(f.balance(BalanceTerm::FullLeft, Some(1.0)), 1.0);
        assert_eq!(f.balance(BalanceTerm::PartialLeft, Some(1.0)), 0.0);
        assert_eq!(f.balance(BalanceTerm::PartialLeft, Some(0.5)), 1.0);
        assert_eq!(f.balance(BalanceTerm::FullRight, Some(-1.0)), 1.0);
        assert_eq!(f.balance(BalanceTerm::PartialRight, Some(-0.5)), 1.0);
        assert_eq!(f.balance(BalanceTerm::FullLeft, Some(-1.0)), 0.0);
        assert_relative_eq!(f.balance(BalanceTerm::FullLeft, Some(0.85)), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_partial_balance_shape() {
        let f = fuzzifier();

        // Zero at an exact balance, so only Balanced fires there
        assert_eq!(f.balance(BalanceTerm::PartialLeft, Some(0.0)), 0.0);
        assert_eq!(f.balance(BalanceTerm::PartialRight, Some(0.0)), 0.0);
        assert_relative_eq!(f.balance(BalanceTerm::PartialLeft, Some(0.25)), 0.5, epsilon = 1e-6);

        // Overlaps Full above the threshold
        assert_relative_eq!(f.balance(BalanceTerm::PartialLeft, Some(0.85)), 0.3, epsilon = 1e-5);
        assert_relative_eq!(f.balance(BalanceTerm::PartialRight, Some(-0.85)), 0.3, epsilon = 1e-5);
        assert_eq!(f.balance(BalanceTerm::PartialRight, Some(0.5)), 0.0);
    }

    #[test]
    fn test_widened_balanced() {
        let f = Fuzzifier::new(&FuzzyConfig {
            coverage: CoverageThresholds {
                balanced_width: 0.1,
                ..Default::default()
            },
            ..Default::default()
        });
        assert_relative_eq!(f.balance(BalanceTerm::Balanced, Some(0.05)), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_coverage_terms() {
        let f = fuzzifier();

        assert_eq!(f.coverage(CoverageTerm::None, None), 1.0);
        assert_eq!(f.coverage(CoverageTerm::Partial, None), 0.0);
        assert_eq!(f.coverage(CoverageTerm::Full, None), 0.0);

        assert_relative_eq!(f.coverage(CoverageTerm::None, Some(0.15)), 0.5, epsilon = 1e-6);
        assert_eq!(f.coverage(CoverageTerm::None, Some(0.3)), 0.0);
        assert_eq!(f.coverage(CoverageTerm::Partial, Some(0.5)), 1.0);
        assert_eq!(f.coverage(CoverageTerm::Full, Some(1.0)), 1.0);
        assert_eq!(f.coverage(CoverageTerm::Partial, Some(1.0)), 0.0);
    }

    #[test]
    fn test_single_sided_thresholds() {
        let f = Fuzzifier::new(&FuzzyConfig {
            distance: DistanceThresholds::single_sided(),
            ..Default::default()
        });
        assert_relative_eq!(f.distance(DistanceTerm::Close, Some(2.0)), 0.5);
        assert_eq!(f.distance(DistanceTerm::Medium, Some(3.0)), 1.0);
    }

    #[test]
    fn test_degree_routes_features() {
        let f = fuzzifier();
        let sample = PerceptionSample {
            left_coverage: Some(1.0),
            obstacle_left: Some(0.5),
            obstacle_right: Some(6.0),
            obstacle_nearest: Some(0.5),
            avg_terrain_distance: Some(2.0),
            ..Default::default()
        };

        assert_eq!(f.degree(&Antecedent::Balance(BalanceTerm::FullLeft), &sample), 1.0);
        assert_eq!(f.degree(&Antecedent::ObstacleLeft(DistanceTerm::Close), &sample), 1.0);
        assert_eq!(f.degree(&Antecedent::ObstacleRight(DistanceTerm::Close), &sample), 0.0);
        assert_eq!(f.degree(&Antecedent::Obstacle(DistanceTerm::Close), &sample), 1.0);
        assert_eq!(f.degree(&Antecedent::TerrainDistance(DistanceTerm::Medium), &sample), 1.0);
        // No overall coverage in this sample
        assert_eq!(f.degree(&Antecedent::Coverage(CoverageTerm::None), &sample), 1.0);
    }
}
