//! Reduction of a fan scan into per-tick scalar features.

use super::fan::{FanScan, Side};
use super::probe::HitCategory;

/// Per-tick perception features.
///
/// `None` means "nothing sensed". It is never folded into zero: a distance
/// of `Some(0.0)` is a valid, very close reading, while `None` contributes
/// no membership to any distance category.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerceptionSample {
    /// Fraction of left-side rays that hit terrain, in (0, 1]
    pub left_coverage: Option<f32>,
    /// Fraction of right-side rays that hit terrain, in (0, 1]
    pub right_coverage: Option<f32>,
    /// Fraction of all rays that hit terrain, in (0, 1]
    pub overall_coverage: Option<f32>,
    /// Mean distance over all terrain hits
    pub avg_terrain_distance: Option<f32>,
    /// Nearest obstacle hit by a left-side ray
    pub obstacle_left: Option<f32>,
    /// Nearest obstacle hit by a right-side ray
    pub obstacle_right: Option<f32>,
    /// Nearest obstacle hit by any ray
    pub obstacle_nearest: Option<f32>,
}

impl PerceptionSample {
    /// Sample with every feature absent.
    pub const ABSENT: PerceptionSample = PerceptionSample {
        left_coverage: None,
        right_coverage: None,
        overall_coverage: None,
        avg_terrain_distance: None,
        obstacle_left: None,
        obstacle_right: None,
        obstacle_nearest: None,
    };

    /// `left - right` coverage.
    ///
    /// A missing side counts as zero only when the other side is present;
    /// with both sides missing the difference itself is absent.
    pub fn coverage_difference(&self) -> Option<f32> {
        match (self.left_coverage, self.right_coverage) {
            (Some(left), Some(right)) => Some(left - right),
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(-right),
            (None, None) => None,
        }
    }

    /// True if no ray hit terrain or an obstacle.
    pub fn is_empty(&self) -> bool {
        self.overall_coverage.is_none() && self.obstacle_nearest.is_none()
    }
}

/// Keep the smaller of the tracked minimum and a new reading.
#[inline]
fn track_nearest(slot: &mut Option<f32>, distance: f32) {
    if slot.is_none_or(|current| distance < current) {
        *slot = Some(distance);
    }
}

#[inline]
fn fraction(hits: usize, rays: usize) -> Option<f32> {
    if hits > 0 && rays > 0 {
        Some(hits as f32 / rays as f32)
    } else {
        None
    }
}

/// Reduce a fan scan to a [`PerceptionSample`].
///
/// - Side coverage: terrain hits on that side divided by rays per side.
/// - Average terrain distance: over terrain hits on both sides.
/// - Obstacles: the nearest hit per side and overall.
///
/// Averages are only taken over at least one contributing hit. A hit with a
/// non-finite distance is treated as a miss.
pub fn aggregate(scan: &FanScan) -> PerceptionSample {
    let mut left_hits = 0usize;
    let mut right_hits = 0usize;
    let mut terrain_hits = 0usize;
    let mut terrain_distance_sum = 0.0f32;
    let mut sample = PerceptionSample::ABSENT;

    for reading in &scan.readings {
        let Some(hit) = reading.hit.filter(|h| h.distance.is_finite()) else {
            continue;
        };

        match hit.category {
            HitCategory::Terrain => {
                terrain_hits += 1;
                terrain_distance_sum += hit.distance;
                match reading.ray.side {
                    Side::Left => left_hits += 1,
                    Side::Right => right_hits += 1,
                    Side::Center => {}
                }
            }
            HitCategory::Obstacle => {
                match reading.ray.side {
                    Side::Left => track_nearest(&mut sample.obstacle_left, hit.distance),
                    Side::Right => track_nearest(&mut sample.obstacle_right, hit.distance),
                    Side::Center => {}
                }
                track_nearest(&mut sample.obstacle_nearest, hit.distance);
            }
            HitCategory::Other => {}
        }
    }

    sample.left_coverage = fraction(left_hits, scan.rays_per_side);
    sample.right_coverage = fraction(right_hits, scan.rays_per_side);
    sample.overall_coverage = fraction(terrain_hits, scan.len());
    if terrain_hits > 0 {
        sample.avg_terrain_distance = Some(terrain_distance_sum / terrain_hits as f32);
    }

    sample
}
