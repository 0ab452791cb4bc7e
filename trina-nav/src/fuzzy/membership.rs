//! Piecewise-linear membership functions.

/// A scalar → [0, 1] membership shape.
///
/// Shapes are pure and cheap to copy; the fuzzifier resolves them once
/// from configuration and evaluates them every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MembershipFunction {
    /// One-sided ramp: 0 at or beyond `zero_at`, 1 at or beyond `one_at`,
    /// linear in between. Rising when `zero_at < one_at`, falling otherwise.
    Ramp {
        /// Input at which the degree reaches 0
        zero_at: f32,
        /// Input at which the degree reaches 1
        one_at: f32,
    },

    /// Triangle: 0 outside `(left, right)`, 1 at `peak`.
    Triangle {
        /// Left foot
        left: f32,
        /// Apex
        peak: f32,
        /// Right foot
        right: f32,
    },

    /// Narrow peak around `at`. With `half_width == 0` this is a single-point
    /// category: 1 exactly at `at`, 0 everywhere else.
    Point {
        /// Center of the category
        at: f32,
        /// Distance from `at` at which the degree falls to 0
        half_width: f32,
    },
}

impl MembershipFunction {
    /// Rising or falling ramp.
    pub fn ramp(zero_at: f32, one_at: f32) -> Self {
        Self::Ramp { zero_at, one_at }
    }

    /// Triangle with feet at `left` / `right` and apex at `peak`.
    pub fn triangle(left: f32, peak: f32, right: f32) -> Self {
        Self::Triangle { left, peak, right }
    }

    /// Point category, optionally widened to a narrow triangle.
    pub fn point(at: f32, half_width: f32) -> Self {
        Self::Point { at, half_width }
    }

    /// Degree of membership of `x`, always in [0, 1].
    pub fn degree(&self, x: f32) -> f32 {
        if x.is_nan() {
            return 0.0;
        }

        let degree = match *self {
            Self::Ramp { zero_at, one_at } => {
                let span = one_at - zero_at;
                if span == 0.0 {
                    if x == one_at { 1.0 } else { 0.0 }
                } else {
                    (x - zero_at) / span
                }
            }
            Self::Triangle { left, peak, right } => {
                if x <= left || x >= right {
                    0.0
                } else if x < peak {
                    (x - left) / (peak - left)
                } else if x > peak {
                    (right - x) / (right - peak)
                } else {
                    1.0
                }
            }
            Self::Point { at, half_width } => {
                if half_width <= 0.0 {
                    if x == at { 1.0 } else { 0.0 }
                } else {
                    1.0 - (x - at).abs() / half_width
                }
            }
        };

        degree.clamp(0.0, 1.0)
    }

    /// Inputs at which the shape changes slope.
    pub fn breakpoints(&self) -> Vec<f32> {
        match *self {
            Self::Ramp { zero_at, one_at } => vec![zero_at, one_at],
            Self::Triangle { left, peak, right } => vec![left, peak, right],
            Self::Point { at, half_width } if half_width > 0.0 => {
                vec![at - half_width, at, at + half_width]
            }
            Self::Point { at, .. } => vec![at],
        }
    }

    /// True for shapes without jumps.
    ///
    /// Only a zero-width point category is discontinuous.
    pub fn is_continuous(&self) -> bool {
        match *self {
            Self::Ramp { zero_at, one_at } => zero_at != one_at,
            Self::Triangle { .. } => true,
            Self::Point { half_width, .. } => half_width > 0.0,
        }
    }
}
