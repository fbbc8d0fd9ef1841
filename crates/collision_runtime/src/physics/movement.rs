//! Move-and-slide resolution
//!
//! When the full displacement is blocked, each axis is retried on its own
//! from the original position so the entity can slide along a surface.
//! Both probes start from the original position and are decided
//! independently; there is no fallback beyond them, so a diagonal push into
//! a concave corner can end with no movement at all.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{clamp_lenient, Vec2};
use crate::physics::collision::Obstacle;
use crate::physics::query;

/// Playable area anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Width of the playable area
    pub width: f32,
    /// Height of the playable area
    pub height: f32,
}

impl Bounds {
    /// Creates bounds of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a circle center so the circle stays inside the bounds
    ///
    /// An axis narrower than the circle resolves to `extent - radius`.
    pub fn clamp(&self, position: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            clamp_lenient(position.x, radius, self.width - radius),
            clamp_lenient(position.y, radius, self.height - radius),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Resolve a requested displacement against an obstacle slice
///
/// Never fails: on total blockage the original position comes back, clamped
/// to `bounds`.
pub fn resolve_move(
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    radius: f32,
    bounds: &Bounds,
    obstacles: &[Obstacle],
) -> Vec2 {
    resolve_move_with(x, y, dx, dy, radius, bounds, |px, py| {
        query::is_blocked(px, py, radius, obstacles)
    })
}

/// Resolve a requested displacement against any blocking predicate
///
/// `blocked(x, y)` must answer for a circle of `radius` centered at `(x, y)`.
pub fn resolve_move_with<F>(
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    radius: f32,
    bounds: &Bounds,
    blocked: F,
) -> Vec2
where
    F: Fn(f32, f32) -> bool,
{
    let target = bounds.clamp(Vec2::new(x + dx, y + dy), radius);
    if !blocked(target.x, target.y) {
        log::trace!("move ({x}, {y}) -> ({}, {}) accepted", target.x, target.y);
        return target;
    }

    // Single-axis probes use the raw displacement, not the clamped target
    let x_free = !blocked(x + dx, y);
    let y_free = !blocked(x, y + dy);
    log::trace!("move ({x}, {y}) by ({dx}, {dy}) blocked; x free: {x_free}, y free: {y_free}");

    let slid = Vec2::new(
        if x_free { x + dx } else { x },
        if y_free { y + dy } else { y },
    );
    bounds.clamp(slid, radius)
}
