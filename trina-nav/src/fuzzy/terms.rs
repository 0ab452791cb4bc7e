//! Linguistic terms.

use std::fmt;

/// Categories of the bilateral coverage difference `left − right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BalanceTerm {
    /// Nothing sensed on either side
    None,
    /// Left side much better covered (difference ≥ full threshold)
    FullLeft,
    /// Left side somewhat better covered
    PartialLeft,
    /// Both sides equally covered
    Balanced,
    /// Right side somewhat better covered
    PartialRight,
    /// Right side much better covered
    FullRight,
}

impl BalanceTerm {
    /// Every term, left to right.
    pub const ALL: [BalanceTerm; 6] = [
        BalanceTerm::None,
        BalanceTerm::FullLeft,
        BalanceTerm::PartialLeft,
        BalanceTerm::Balanced,
        BalanceTerm::PartialRight,
        BalanceTerm::FullRight,
    ];
}

/// Categories of the single-sided coverage level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoverageTerm {
    /// Little or no terrain in view
    None,
    /// Some terrain in view
    Partial,
    /// Terrain fills the fan
    Full,
}

impl CoverageTerm {
    /// Every term.
    pub const ALL: [CoverageTerm; 3] = [CoverageTerm::None, CoverageTerm::Partial, CoverageTerm::Full];
}

/// Categories shared by every distance feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DistanceTerm {
    /// At or below the close threshold
    Close,
    /// Around the medium threshold
    Medium,
    /// At or beyond the far threshold
    Far,
}

impl DistanceTerm {
    /// Every term, nearest first.
    pub const ALL: [DistanceTerm; 3] = [DistanceTerm::Close, DistanceTerm::Medium, DistanceTerm::Far];
}

impl fmt::Display for BalanceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BalanceTerm::None => "none",
            BalanceTerm::FullLeft => "full-left",
            BalanceTerm::PartialLeft => "partial-left",
            BalanceTerm::Balanced => "balanced",
            BalanceTerm::PartialRight => "partial-right",
            BalanceTerm::FullRight => "full-right",
        };
        f.write_str(name)
    }
}

impl fmt::Display for CoverageTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoverageTerm::None => "none",
            CoverageTerm::Partial => "partial",
            CoverageTerm::Full => "full",
        };
        f.write_str(name)
    }
}

impl fmt::Display for DistanceTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistanceTerm::Close => "close",
            DistanceTerm::Medium => "medium",
            DistanceTerm::Far => "far",
        };
        f.write_str(name)
    }
}
