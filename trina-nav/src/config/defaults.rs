//! Default value functions for serde deserialization.

pub fn ray_count() -> usize {
    50
}

pub fn ray_length() -> f32 {
    10.0
}

pub fn max_half_angle_deg() -> f32 {
    25.0
}

pub fn vertical_offset() -> f32 {
    0.5
}

pub fn close() -> f32 {
    1.0
}

pub fn medium() -> f32 {
    2.0
}

pub fn far() -> f32 {
    5.0
}

pub fn full_threshold() -> f32 {
    0.7
}

pub fn partial_peak() -> f32 {
    0.5
}

pub fn none_range() -> f32 {
    0.3
}

pub fn min_speed() -> f32 {
    1.0
}

pub fn max_speed() -> f32 {
    5.0
}

pub fn max_turn_rate() -> f32 {
    90.0
}

pub fn avoidance_weight() -> f32 {
    5.0
}

pub fn zero_strength_tolerance() -> f32 {
    1e-4
}
