//! Perception: the probe-ray fan and its reduction to scalar features.
//!
//! ```text
//!   WorldProbe ──cast_ray──▶ FanLayout::sweep ──▶ FanScan ──aggregate──▶ PerceptionSample
//! ```
//!
//! The world is reached only through [`WorldProbe`], so a batched or
//! parallel ray backend can replace the default one without touching the
//! fuzzy layers.

mod aggregate;
mod fan;
mod probe;

pub use aggregate::{PerceptionSample, aggregate};
pub use fan::{FanLayout, FanRay, FanScan, RayReading, Side};
pub use probe::{HitCategory, RayHit, WorldProbe};
