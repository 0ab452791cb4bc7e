//! Ray-intersection boundary.

use crate::core::{Point3, Vector3};

/// What a probe ray struck first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitCategory {
    /// Terrain still to be swept
    Terrain,
    /// Something to steer around
    Obstacle,
    /// Anything else (already-swept terrain, scenery)
    Other,
}

/// Result of a single probe ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Category of the first thing hit
    pub category: HitCategory,
    /// Distance from the ray origin (meters, non-negative)
    pub distance: f32,
}

impl RayHit {
    /// Create a new hit
    #[inline]
    pub fn new(category: HitCategory, distance: f32) -> Self {
        Self { category, distance }
    }

    /// Terrain hit at `distance`
    #[inline]
    pub fn terrain(distance: f32) -> Self {
        Self::new(HitCategory::Terrain, distance)
    }

    /// Obstacle hit at `distance`
    #[inline]
    pub fn obstacle(distance: f32) -> Self {
        Self::new(HitCategory::Obstacle, distance)
    }
}

/// Trait for answering ray queries against the world.
///
/// Implement this for a physics engine, a simulated world, or a scripted
/// test fixture.
///
/// # Example
///
/// ```ignore
/// struct OpenField;
///
/// impl WorldProbe for OpenField {
///     fn cast_ray(&self, _origin: Point3, _direction: Vector3, _max: f32) -> Option<RayHit> {
///         None
///     }
/// }
/// ```
pub trait WorldProbe {
    /// Cast a ray from `origin` along the unit vector `direction`.
    ///
    /// Returns the first thing hit within `max_length`, or `None` when the
    /// ray hits nothing. A miss is not an error.
    fn cast_ray(&self, origin: Point3, direction: Vector3, max_length: f32) -> Option<RayHit>;

    /// Debug hook called for every cast ray when ray visualization is
    /// enabled. Has no effect on the decision.
    ///
    /// Default implementation does nothing.
    fn visualize_ray(&self, _origin: Point3, _direction: Vector3, _length: f32) {}
}

impl<T: WorldProbe + ?Sized> WorldProbe for &T {
    fn cast_ray(&self, origin: Point3, direction: Vector3, max_length: f32) -> Option<RayHit> {
        (**self).cast_ray(origin, direction, max_length)
    }

    fn visualize_ray(&self, origin: Point3, direction: Vector3, length: f32) {
        (**self).visualize_ray(origin, direction, length)
    }
}
