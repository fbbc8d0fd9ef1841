//! Collision world: a snapshot bound to a broad-phase index
//!
//! Queries narrow candidates through the [`SpatialQuery`] and then run the
//! per-shape tests in snapshot order, so answers are identical to the
//! exhaustive scan in [`crate::physics::query`].

use crate::config::{BroadPhaseKind, RuntimeConfig};
use crate::foundation::math::Vec2;
use crate::physics::movement::{resolve_move_with, Bounds};
use crate::physics::snapshot::ObstacleSnapshot;
use crate::spatial::{GridConfig, LinearScan, SpatialQuery, UniformGrid};

/// Read-only collision queries over one published snapshot
pub struct CollisionWorld {
    snapshot: ObstacleSnapshot,
    spatial_query: Box<dyn SpatialQuery>,
}

impl CollisionWorld {
    /// Create a world over `snapshot`, indexing it with `spatial_query`
    pub fn new(snapshot: ObstacleSnapshot, mut spatial_query: Box<dyn SpatialQuery>) -> Self {
        spatial_query.rebuild(snapshot.obstacles());
        log::debug!(
            "Collision world ready: {} obstacles, {} broad phase",
            snapshot.len(),
            spatial_query.name()
        );
        Self { snapshot, spatial_query }
    }

    /// Create a world that tests every obstacle on every query
    pub fn with_linear_scan(snapshot: ObstacleSnapshot) -> Self {
        Self::new(snapshot, Box::new(LinearScan::new()))
    }

    /// Create a world whose broad phase is picked by `config`
    pub fn from_config(snapshot: ObstacleSnapshot, config: &RuntimeConfig) -> Self {
        let spatial_query: Box<dyn SpatialQuery> = match config.broad_phase.kind {
            BroadPhaseKind::Linear => Box::new(LinearScan::new()),
            BroadPhaseKind::Grid => Box::new(UniformGrid::new(GridConfig {
                cell_size: config.broad_phase.cell_size,
                ..GridConfig::default()
            })),
        };
        Self::new(snapshot, spatial_query)
    }

    /// The snapshot currently answered against
    pub fn snapshot(&self) -> &ObstacleSnapshot {
        &self.snapshot
    }

    /// The broad phase in use
    pub fn spatial_query(&self) -> &dyn SpatialQuery {
        self.spatial_query.as_ref()
    }

    /// Swap in a newly published snapshot and re-index it
    pub fn replace_snapshot(&mut self, snapshot: ObstacleSnapshot) {
        self.spatial_query.rebuild(snapshot.obstacles());
        log::debug!("Collision world snapshot replaced: {} obstacles", snapshot.len());
        self.snapshot = snapshot;
    }

    /// Index of the first obstacle overlapping a circle of `radius` at `(x, y)`
    pub fn first_blocking(&self, x: f32, y: f32, radius: f32) -> Option<usize> {
        let center = Vec2::new(x, y);
        let obstacles = self.snapshot.obstacles();
        self.spatial_query
            .query_circle(center, radius)
            .into_iter()
            .find(|&index| {
                obstacles
                    .get(index)
                    .is_some_and(|obstacle| obstacle.overlaps_circle(center, radius))
            })
    }

    /// Is a circle of `radius` at `(x, y)` overlapping any obstacle?
    pub fn is_blocked(&self, x: f32, y: f32, radius: f32) -> bool {
        self.first_blocking(x, y, radius).is_some()
    }

    /// Move-and-slide a circle of `radius` from `(x, y)` by `(dx, dy)`
    pub fn resolve_move(&self, x: f32, y: f32, dx: f32, dy: f32, radius: f32, bounds: &Bounds) -> Vec2 {
        resolve_move_with(x, y, dx, dy, radius, bounds, |px, py| self.is_blocked(px, py, radius))
    }
}

impl std::fmt::Debug for CollisionWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionWorld")
            .field("obstacles", &self.snapshot.len())
            .field("broad_phase", &self.spatial_query.name())
            .finish()
    }
}
