//! Immutable obstacle snapshots
//!
//! A snapshot is what the runtime reads during a tick. Authoring code edits
//! its own data and publishes a fresh snapshot; a published snapshot is never
//! mutated, so clones can be handed to other threads freely.

use std::sync::Arc;

use crate::foundation::math::Vec2;
use crate::physics::collision::{Obstacle, Polygon, Rectangle, Segment};
use crate::physics::movement::{self, Bounds};
use crate::physics::query;

/// Read-only, cheaply clonable obstacle collection
#[derive(Debug, Clone)]
pub struct ObstacleSnapshot {
    obstacles: Arc<[Obstacle]>,
}

impl ObstacleSnapshot {
    /// Build a snapshot ordered rectangles, then segments, then polygons
    pub fn new<R, S, P>(rectangles: R, segments: S, polygons: P) -> Self
    where
        R: IntoIterator<Item = Rectangle>,
        S: IntoIterator<Item = Segment>,
        P: IntoIterator<Item = Polygon>,
    {
        rectangles
            .into_iter()
            .map(Obstacle::from)
            .chain(segments.into_iter().map(Obstacle::from))
            .chain(polygons.into_iter().map(Obstacle::from))
            .collect()
    }

    /// Build a snapshot that keeps the given order
    pub fn from_obstacles(obstacles: Vec<Obstacle>) -> Self {
        log::debug!("Publishing obstacle snapshot with {} obstacles", obstacles.len());
        Self { obstacles: obstacles.into() }
    }

    /// All obstacles in query order
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Obstacle at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    /// Number of obstacles
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether the snapshot holds no obstacles
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Do two handles share the same published data?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.obstacles, &other.obstacles)
    }

    /// Exhaustive overlap query, see [`query::is_blocked`]
    pub fn is_blocked(&self, x: f32, y: f32, radius: f32) -> bool {
        query::is_blocked(x, y, radius, &self.obstacles)
    }

    /// Exhaustive move-and-slide, see [`movement::resolve_move`]
    pub fn resolve_move(&self, x: f32, y: f32, dx: f32, dy: f32, radius: f32, bounds: &Bounds) -> Vec2 {
        movement::resolve_move(x, y, dx, dy, radius, bounds, &self.obstacles)
    }
}

impl Default for ObstacleSnapshot {
    fn default() -> Self {
        Self { obstacles: Arc::from(Vec::new()) }
    }
}

impl FromIterator<Obstacle> for ObstacleSnapshot {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        Self::from_obstacles(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::{ObstacleKind, Vertex};

    #[test]
    fn test_snapshot_orders_by_kind() {
        let snapshot = ObstacleSnapshot::new(
            [Rectangle::new(0.0, 0.0, 1.0, 1.0)],
            [Segment::new(Vec2::zeros(), Vec2::new(1.0, 0.0), 1.0)],
            [Polygon::new([Vertex::new(0.0, 0.0), Vertex::new(1.0, 0.0), Vertex::new(0.0, 1.0)])],
        );
        let kinds: Vec<_> = snapshot.obstacles().iter().map(Obstacle::kind).collect();
        assert_eq!(kinds, vec![ObstacleKind::Rectangle, ObstacleKind::Segment, ObstacleKind::Polygon]);
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = ObstacleSnapshot::default();
        assert!(snapshot.is_empty());
        assert!(!snapshot.is_blocked(10.0, 10.0, 5.0));
    }

    #[test]
    fn test_clones_share_data() {
        let snapshot: ObstacleSnapshot = [Obstacle::from(Rectangle::new(0.0, 0.0, 4.0, 4.0))]
            .into_iter()
            .collect();
        let clone = snapshot.clone();
        assert!(snapshot.ptr_eq(&clone));
        assert_eq!(clone.len(), 1);
        assert!(clone.get(1).is_none());
    }

    #[test]
    fn test_snapshot_can_cross_threads() {
        let snapshot = ObstacleSnapshot::new(
            [Rectangle::new(100.0, 100.0, 50.0, 50.0)],
            Vec::new(),
            Vec::new(),
        );
        let worker = snapshot.clone();
        let hit = std::thread::spawn(move || worker.is_blocked(90.0, 125.0, 10.0))
            .join()
            .unwrap();
        assert!(hit);
        assert!(!snapshot.is_blocked(80.0, 125.0, 10.0));
    }
}
