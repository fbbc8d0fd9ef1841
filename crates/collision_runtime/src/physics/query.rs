//! Aggregate overlap query across every obstacle in a snapshot

use crate::foundation::math::Vec2;
use crate::physics::collision::Obstacle;

/// Is a circle of `radius` at `(x, y)` overlapping any obstacle?
///
/// Obstacles are tested in slice order and the scan stops at the first hit.
/// Safe to call at any position, including speculative probes.
pub fn is_blocked(x: f32, y: f32, radius: f32, obstacles: &[Obstacle]) -> bool {
    first_blocking(x, y, radius, obstacles).is_some()
}

/// Index of the first obstacle overlapping a circle of `radius` at `(x, y)`
pub fn first_blocking(x: f32, y: f32, radius: f32, obstacles: &[Obstacle]) -> Option<usize> {
    let center = Vec2::new(x, y);
    obstacles
        .iter()
        .position(|obstacle| obstacle.overlaps_circle(center, radius))
}
