//! Seeded sensor noise for probe rays
//!
//! Provides Gaussian range noise and random ray drop-outs with
//! deterministic seeding support.

use std::cell::RefCell;

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, StandardNormal, Uniform};
use trina_nav::{Point3, RayHit, Vector3, WorldProbe};

use crate::config::NoiseConfig;

/// Noise generator with configurable seed for reproducibility
#[derive(Clone)]
pub struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Generate Gaussian noise with given standard deviation
    #[inline]
    pub fn gaussian(&mut self, stddev: f32) -> f32 {
        if stddev == 0.0 {
            return 0.0;
        }
        let n: f32 = self.rng.sample(StandardNormal);
        n * stddev
    }

    /// Generate uniform random in [0, 1)
    #[inline]
    pub fn uniform(&mut self) -> f32 {
        Uniform::new(0.0f32, 1.0).sample(&mut self.rng)
    }

    /// Returns true with given probability
    #[inline]
    pub fn chance(&mut self, probability: f32) -> bool {
        self.uniform() < probability
    }
}

/// Wraps a probe and perturbs its answers.
///
/// Dropped rays report no hit. Range noise is clamped to `[0, max_length]`;
/// the hit category is never changed.
pub struct NoisyProbe<'a, P: ?Sized> {
    inner: &'a P,
    noise: &'a RefCell<NoiseGenerator>,
    range_stddev: f32,
    miss_rate: f32,
}

impl<'a, P: WorldProbe + ?Sized> NoisyProbe<'a, P> {
    pub fn new(inner: &'a P, noise: &'a RefCell<NoiseGenerator>, config: &NoiseConfig) -> Self {
        Self {
            inner,
            noise,
            range_stddev: config.range_stddev,
            miss_rate: config.miss_rate,
        }
    }
}

impl<P: WorldProbe + ?Sized> WorldProbe for NoisyProbe<'_, P> {
    fn cast_ray(&self, origin: Point3, direction: Vector3, max_length: f32) -> Option<RayHit> {
        let hit = self.inner.cast_ray(origin, direction, max_length)?;
        let mut noise = self.noise.borrow_mut();

        if self.miss_rate > 0.0 && noise.chance(self.miss_rate) {
            return None;
        }
        let distance = (hit.distance + noise.gaussian(self.range_stddev)).clamp(0.0, max_length);
        Some(RayHit::new(hit.category, distance))
    }

    fn visualize_ray(&self, origin: Point3, direction: Vector3, length: f32) {
        self.inner.visualize_ray(origin, direction, length)
    }
}
