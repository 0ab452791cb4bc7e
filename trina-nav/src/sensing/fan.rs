//! Probe-ray fan layout and sweep.
//!
//! ## Bilateral layout
//!
//! Each side casts `N` rays. Ray `i` of a side sits at `max - step * i`
//! from the forward axis, `step = max / (N - 1)`, so ray 0 is the outermost
//! flank ray and ray `N - 1` points straight ahead. Both sides carry their
//! own forward ray.
//!
//! ```text
//!        left 0   left 1   left N-1 / right N-1   right 1   right 0
//!           ╲        ╲            │                  ╱         ╱
//!            ╲        ╲           │                 ╱         ╱
//!             ╲        ╲          │                ╱         ╱
//!                             [ agent ]
//! ```
//!
//! ## Single-sided layout
//!
//! One pass of `N` rays from `-max` to `+max`, `step = 2 * max / (N - 1)`.

use crate::config::{ControllerVariant, SensorFanConfig};
use crate::core::{Point3, Pose, Vector3};
use crate::error::ConfigError;

use super::probe::{RayHit, WorldProbe};

/// Which half of the fan a ray belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Positive yaw offsets
    Left,
    /// Negative yaw offsets
    Right,
    /// Single-sided fan (no side split)
    Center,
}

/// One ray of the fan, relative to the agent heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanRay {
    /// Fan half the ray belongs to
    pub side: Side,
    /// Index within its side (0 = outermost for bilateral fans)
    pub index: usize,
    /// Yaw offset from the agent heading (radians, CCW positive)
    pub yaw_offset: f32,
}

/// Ray and whatever it hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayReading {
    /// The ray that was cast
    pub ray: FanRay,
    /// First hit, if any
    pub hit: Option<RayHit>,
}

/// All readings of one sweep.
#[derive(Clone, Debug, Default)]
pub struct FanScan {
    /// Readings in fan order (left side first for bilateral fans)
    pub readings: Vec<RayReading>,
    /// Rays per side (bilateral) or in total (single-sided)
    pub rays_per_side: usize,
}

impl FanScan {
    /// Total number of cast rays.
    #[inline]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True if no rays were cast.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Pre-computed fan geometry.
///
/// Built once from configuration; sweeping does not allocate anything but
/// the returned readings.
#[derive(Clone, Debug)]
pub struct FanLayout {
    rays: Vec<FanRay>,
    rays_per_side: usize,
    ray_length: f32,
    vertical_offset: f32,
    visualize: bool,
}

impl FanLayout {
    /// Build the layout for a controller variant.
    ///
    /// Fails if `config` does not validate; the angle step needs at least
    /// two rays.
    pub fn new(config: &SensorFanConfig, variant: ControllerVariant) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(if variant.is_bilateral() {
            Self::bilateral(config)
        } else {
            Self::single_sided(config)
        })
    }

    /// Two mirrored fans of `ray_count` rays each. Requires `ray_count >= 2`.
    pub(crate) fn bilateral(config: &SensorFanConfig) -> Self {
        let n = config.ray_count;
        let max = config.max_half_angle_deg;
        let step = max / (n - 1) as f32;

        let mut rays = Vec::with_capacity(2 * n);
        for (side, sign) in [(Side::Left, 1.0f32), (Side::Right, -1.0f32)] {
            for i in 0..n {
                let offset_deg = max - step * i as f32;
                rays.push(FanRay {
                    side,
                    index: i,
                    yaw_offset: (sign * offset_deg).to_radians(),
                });
            }
        }

        Self::with_rays(config, rays)
    }

    /// One symmetric fan of `ray_count` rays. Requires `ray_count >= 2`.
    pub(crate) fn single_sided(config: &SensorFanConfig) -> Self {
        let n = config.ray_count;
        let max = config.max_half_angle_deg;
        let step = max * 2.0 / (n - 1) as f32;

        let rays = (0..n)
            .map(|i| FanRay {
                side: Side::Center,
                index: i,
                yaw_offset: (-max + step * i as f32).to_radians(),
            })
            .collect();

        Self::with_rays(config, rays)
    }

    fn with_rays(config: &SensorFanConfig, rays: Vec<FanRay>) -> Self {
        Self {
            rays,
            rays_per_side: config.ray_count,
            ray_length: config.ray_length,
            vertical_offset: config.vertical_offset,
            visualize: config.visualize_rays,
        }
    }

    /// Ray geometry in fan order.
    #[inline]
    pub fn rays(&self) -> &[FanRay] {
        &self.rays
    }

    /// Rays per side (bilateral) or in total (single-sided).
    #[inline]
    pub fn rays_per_side(&self) -> usize {
        self.rays_per_side
    }

    /// Origin all rays are cast from for a given pose.
    #[inline]
    pub fn origin(&self, pose: &Pose) -> Point3 {
        pose.position - Vector3::UP * self.vertical_offset
    }

    /// Cast every ray of the fan from `pose`.
    ///
    /// Rays are independent; a ray that hits nothing contributes a reading
    /// with `hit: None`.
    pub fn sweep<P: WorldProbe + ?Sized>(&self, probe: &P, pose: &Pose) -> FanScan {
        let origin = self.origin(pose);

        let readings = self
            .rays
            .iter()
            .map(|ray| {
                let direction = Vector3::from_yaw(pose.yaw + ray.yaw_offset);
                let hit = probe.cast_ray(origin, direction, self.ray_length);
                if self.visualize {
                    probe.visualize_ray(origin, direction, self.ray_length);
                }
                RayReading { ray: *ray, hit }
            })
            .collect();

        FanScan {
            readings,
            rays_per_side: self.rays_per_side,
        }
    }
}
