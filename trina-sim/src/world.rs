//! Lawn world: grass lattice, fence, obstacles, and the ray primitive.
//!
//! The ground spans `[0, width] × [0, depth]` in the XY plane. Grass patches
//! sit on a square lattice with `grass_spacing` pitch. An uncut patch stands
//! tall enough to stop a probe ray; once cut it is short enough for rays to
//! pass over it, so it disappears from the mower's view.

use tracing::trace;
use trina_nav::{HitCategory, Point3, RayHit, Vector3, WorldProbe};

use crate::config::WorldConfig;

/// State of one grass patch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchState {
    /// Still to be mowed; blocks probe rays
    Uncut,
    /// Mowed; rays pass over it
    Cut,
}

/// Round obstacle footprint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    #[inline]
    fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Solid geometry: the fence around the ground plus obstacles
#[derive(Clone, Debug)]
pub struct Collider {
    width: f32,
    depth: f32,
    fenced: bool,
    obstacles: Vec<Circle>,
}

impl Collider {
    /// True if the point is inside an obstacle or beyond the fence
    pub fn is_occupied(&self, x: f32, y: f32) -> bool {
        if self.fenced && (x < 0.0 || y < 0.0 || x > self.width || y > self.depth) {
            return true;
        }
        self.obstacles.iter().any(|o| o.contains(x, y))
    }

    /// True if a disc of `radius` at (x, y) touches anything solid
    pub fn collides(&self, x: f32, y: f32, radius: f32) -> bool {
        // Check points around the circumference
        let num_checks = 8;
        for i in 0..num_checks {
            let angle = (i as f32 / num_checks as f32) * std::f32::consts::TAU;
            if self.is_occupied(x + radius * angle.cos(), y + radius * angle.sin()) {
                return true;
            }
        }
        // Also check center
        self.is_occupied(x, y)
    }
}

/// The lawn
#[derive(Clone, Debug)]
pub struct Lawn {
    spacing: f32,
    patch_radius: f32,
    cols: usize,
    rows: usize,
    /// Row-major; `None` where an obstacle removed the patch
    patches: Vec<Option<PatchState>>,
    collider: Collider,
    total: usize,
    cut: usize,
}

impl Lawn {
    /// Lay out grass and obstacles.
    ///
    /// Patches whose center falls inside an obstacle are removed.
    pub fn new(config: &WorldConfig) -> Self {
        let spacing = config.grass_spacing;
        // Lattice includes both edges when they fall on a multiple of the spacing
        let cols = (config.width / spacing + 1e-4).floor() as usize + 1;
        let rows = (config.depth / spacing + 1e-4).floor() as usize + 1;

        let collider = Collider {
            width: config.width,
            depth: config.depth,
            fenced: config.fenced,
            obstacles: config
                .obstacles
                .iter()
                .map(|o| Circle {
                    x: o.x,
                    y: o.y,
                    radius: o.radius,
                })
                .collect(),
        };

        let mut patches = Vec::with_capacity(cols * rows);
        for j in 0..rows {
            for i in 0..cols {
                let (x, y) = (i as f32 * spacing, j as f32 * spacing);
                let blocked = collider.obstacles.iter().any(|o| o.contains(x, y));
                patches.push(if blocked { None } else { Some(PatchState::Uncut) });
            }
        }
        let total = patches.iter().filter(|p| p.is_some()).count();

        Self {
            spacing,
            patch_radius: config.patch_radius,
            cols,
            rows,
            patches,
            collider,
            total,
            cut: 0,
        }
    }

    /// Center of the ground at `height` above it
    pub fn center(&self, height: f32) -> Point3 {
        Point3::new(self.collider.width / 2.0, self.collider.depth / 2.0, height)
    }

    /// Solid geometry, shared with the mower body
    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    /// Patches laid out
    pub fn patch_count(&self) -> usize {
        self.total
    }

    /// Patches mowed so far
    pub fn cut_count(&self) -> usize {
        self.cut
    }

    /// Fraction of patches mowed, in [0, 1]
    pub fn coverage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.cut as f32 / self.total as f32
        }
    }

    /// True once every patch is cut
    pub fn is_done(&self) -> bool {
        self.cut == self.total
    }

    /// State of the patch nearest to (x, y), if within the lawn
    pub fn patch_near(&self, x: f32, y: f32) -> Option<PatchState> {
        let index = self.nearest_index(x, y)?;
        self.patches[index]
    }

    /// Cut every uncut patch whose stalk the footprint overlaps.
    ///
    /// Patches on the fence line sit `radius` away from the closest
    /// reachable mower center, so the stalk radius has to count.
    /// Returns how many patches changed state.
    pub fn mow(&mut self, position: Point3, radius: f32) -> usize {
        let cut_radius = radius + self.patch_radius;
        let reach = (cut_radius / self.spacing).ceil() as isize;
        let ci = (position.x / self.spacing).round() as isize;
        let cj = (position.y / self.spacing).round() as isize;

        let mut newly_cut = 0;
        for j in (cj - reach)..=(cj + reach) {
            for i in (ci - reach)..=(ci + reach) {
                let Some(index) = self.index(i, j) else {
                    continue;
                };
                let (x, y) = (i as f32 * self.spacing, j as f32 * self.spacing);
                let dx = x - position.x;
                let dy = y - position.y;
                if dx * dx + dy * dy > cut_radius * cut_radius {
                    continue;
                }
                if let Some(state) = self.patches[index].as_mut()
                    && *state == PatchState::Uncut
                {
                    *state = PatchState::Cut;
                    newly_cut += 1;
                }
            }
        }

        self.cut += newly_cut;
        newly_cut
    }

    #[inline]
    fn index(&self, i: isize, j: isize) -> Option<usize> {
        if i < 0 || j < 0 || i as usize >= self.cols || j as usize >= self.rows {
            return None;
        }
        Some(j as usize * self.cols + i as usize)
    }

    #[inline]
    fn nearest_index(&self, x: f32, y: f32) -> Option<usize> {
        let i = (x / self.spacing).round() as isize;
        let j = (y / self.spacing).round() as isize;
        self.index(i, j)
    }

    /// True if (x, y) is inside the stalk of an uncut patch
    fn in_uncut_patch(&self, x: f32, y: f32) -> bool {
        let i = (x / self.spacing).round();
        let j = (y / self.spacing).round();
        let dx = x - i * self.spacing;
        let dy = y - j * self.spacing;
        if dx * dx + dy * dy > self.patch_radius * self.patch_radius {
            return false;
        }
        matches!(
            self.index(i as isize, j as isize).and_then(|k| self.patches[k]),
            Some(PatchState::Uncut)
        )
    }

    /// March a horizontal ray until it meets something solid or tall grass.
    fn ray_cast(&self, origin: Point3, direction: Vector3, max_range: f32) -> Option<RayHit> {
        // Step size: half the patch radius so no stalk is skipped
        let step = self.patch_radius * 0.5;
        let dx = direction.x * step;
        let dy = direction.y * step;

        let mut x = origin.x;
        let mut y = origin.y;
        let mut distance = 0.0;

        while distance + step <= max_range {
            x += dx;
            y += dy;
            distance += step;

            if self.collider.is_occupied(x, y) {
                return Some(RayHit::new(HitCategory::Obstacle, distance));
            }
            if self.in_uncut_patch(x, y) {
                return Some(RayHit::terrain(distance));
            }
        }

        None
    }
}

impl WorldProbe for Lawn {
    fn cast_ray(&self, origin: Point3, direction: Vector3, max_length: f32) -> Option<RayHit> {
        self.ray_cast(origin, direction, max_length)
    }

    fn visualize_ray(&self, origin: Point3, direction: Vector3, length: f32) {
        let end = origin + direction * length;
        trace!(
            "ray ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            origin.x, origin.y, end.x, end.y
        );
    }
}
