//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::Cell;

use trina_nav::{Point3, RayHit, Vector3, WorldProbe};

/// Probe that answers rays in fan order from a fixed script.
///
/// The fan casts left rays `0..N` and then right rays `0..N`; the cursor
/// wraps after every sweep so one probe can serve many ticks.
pub struct ScriptedProbe {
    pub left: Vec<Option<RayHit>>,
    pub right: Vec<Option<RayHit>>,
    cursor: Cell<usize>,
}

impl ScriptedProbe {
    /// Same answer for every ray of a side.
    pub fn uniform(rays_per_side: usize, left: Option<RayHit>, right: Option<RayHit>) -> Self {
        Self {
            left: vec![left; rays_per_side],
            right: vec![right; rays_per_side],
            cursor: Cell::new(0),
        }
    }

    /// Nothing anywhere.
    pub fn empty(rays_per_side: usize) -> Self {
        Self::uniform(rays_per_side, None, None)
    }

    /// Override one left ray.
    pub fn with_left(mut self, index: usize, hit: Option<RayHit>) -> Self {
        self.left[index] = hit;
        self
    }

    /// Override one right ray.
    pub fn with_right(mut self, index: usize, hit: Option<RayHit>) -> Self {
        self.right[index] = hit;
        self
    }

    fn total(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

impl WorldProbe for ScriptedProbe {
    fn cast_ray(&self, _origin: Point3, _direction: Vector3, _max_length: f32) -> Option<RayHit> {
        let i = self.cursor.get();
        self.cursor.set((i + 1) % self.total());

        if i < self.left.len() {
            self.left[i]
        } else {
            self.right[i - self.left.len()]
        }
    }
}

/// Single-sided fans cast one pass; reuse the left script for it.
pub struct SingleFanProbe(pub ScriptedProbe);

impl SingleFanProbe {
    pub fn uniform(rays: usize, hit: Option<RayHit>) -> Self {
        Self(ScriptedProbe {
            left: vec![hit; rays],
            right: Vec::new(),
            cursor: Cell::new(0),
        })
    }
}

impl WorldProbe for SingleFanProbe {
    fn cast_ray(&self, origin: Point3, direction: Vector3, max_length: f32) -> Option<RayHit> {
        self.0.cast_ray(origin, direction, max_length)
    }
}
