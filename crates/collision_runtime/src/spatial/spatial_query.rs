//! Abstract spatial query interface for obstacle candidate narrowing
//!
//! This abstraction allows swapping partitioning schemes (linear scan,
//! uniform grid, ...) without changing the collision world or the per-shape
//! tests it runs on the candidates.

use std::any::Any;

use crate::foundation::math::Vec2;
use crate::physics::collision::Obstacle;

/// Abstract interface for narrowing obstacle candidates
pub trait SpatialQuery: Send + Sync {
    /// Index a snapshot, replacing anything indexed before
    fn rebuild(&mut self, obstacles: &[Obstacle]);

    /// Indices of obstacles that might overlap a circle at `center` with `radius`
    ///
    /// Results are ascending and free of duplicates, so testing them in
    /// order matches the exhaustive scan order.
    fn query_circle(&self, center: Vec2, radius: f32) -> Vec<usize>;

    /// Number of indexed obstacles
    fn len(&self) -> usize;

    /// Whether nothing is indexed
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name for log output
    fn name(&self) -> &'static str;

    /// Downcast to Any for type-specific access (e.g., UniformGrid)
    fn as_any(&self) -> &dyn Any;
}

/// Every obstacle is a candidate for every query
#[derive(Debug, Default, Clone)]
pub struct LinearScan {
    count: usize,
}

impl LinearScan {
    /// Create an empty linear scan
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpatialQuery for LinearScan {
    fn rebuild(&mut self, obstacles: &[Obstacle]) {
        self.count = obstacles.len();
    }

    fn query_circle(&self, _center: Vec2, _radius: f32) -> Vec<usize> {
        (0..self.count).collect()
    }

    fn len(&self) -> usize {
        self.count
    }

    fn name(&self) -> &'static str {
        "linear"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
