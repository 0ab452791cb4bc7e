//! Angle utilities.

use std::f32::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f32 = 2.0 * PI;

/// Normalize angle to [-π, π).
///
/// # Example
/// ```
/// use trina_nav::core::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-6);
/// assert!(normalize_angle(2.0 * PI).abs() < 1e-6);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TWO_PI;
    if a >= PI {
        a -= TWO_PI;
    } else if a < -PI {
        a += TWO_PI;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(0.0) - 0.0).abs() < 1e-6);
        assert!((normalize_angle(PI).abs() - PI).abs() < 1e-6);
        assert!(normalize_angle(TWO_PI).abs() < 1e-6);
        assert!((normalize_angle(5.0 * PI / 4.0) + 3.0 * PI / 4.0).abs() < 1e-6);
        assert!((normalize_angle(-PI / 4.0) + PI / 4.0).abs() < 1e-6);
    }
}
