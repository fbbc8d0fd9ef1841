//! Uniform grid spatial index
//!
//! Each bounded obstacle is bucketed into every cell its bounding box
//! touches. Obstacles that can block anywhere (inverted polygons), or whose
//! box is too large or not finite, go into a list returned by every query.

use std::any::Any;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use crate::physics::collision::{Aabb, Extent, Obstacle};
use super::spatial_query::SpatialQuery;

type CellCoord = (i32, i32);

/// Configuration for grid behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of a square cell in world units
    pub cell_size: f32,

    /// Obstacles spanning more cells than this are treated as global
    pub max_cells_per_obstacle: usize,
}

impl GridConfig {
    /// Cell size used when the configured one is unusable
    pub const DEFAULT_CELL_SIZE: f32 = 64.0;

    fn sanitized(mut self) -> Self {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            log::warn!(
                "Grid cell size {} is not usable, falling back to {}",
                self.cell_size,
                Self::DEFAULT_CELL_SIZE
            );
            self.cell_size = Self::DEFAULT_CELL_SIZE;
        }
        self
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: Self::DEFAULT_CELL_SIZE,
            max_cells_per_obstacle: 4096,
        }
    }
}

/// Hash-bucketed uniform grid over obstacle bounding boxes
#[derive(Debug, Clone)]
pub struct UniformGrid {
    config: GridConfig,
    cells: HashMap<CellCoord, Vec<usize>>,
    /// Candidates for every query
    global: Vec<usize>,
    /// Inclusive cell range holding at least one bucket
    occupied: Option<(CellCoord, CellCoord)>,
    count: usize,
}

impl UniformGrid {
    /// Create an empty grid
    pub fn new(config: GridConfig) -> Self {
        Self {
            config: config.sanitized(),
            cells: HashMap::new(),
            global: Vec::new(),
            occupied: None,
            count: 0,
        }
    }

    /// Create an empty grid with the given cell size and default limits
    pub fn with_cell_size(cell_size: f32) -> Self {
        Self::new(GridConfig { cell_size, ..GridConfig::default() })
    }

    /// Effective cell size
    pub fn cell_size(&self) -> f32 {
        self.config.cell_size
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of obstacles returned by every query
    pub fn global_count(&self) -> usize {
        self.global.len()
    }

    fn cell_of(&self, point: Vec2) -> CellCoord {
        // Float-to-int casts saturate
        (
            (point.x / self.config.cell_size).floor() as i32,
            (point.y / self.config.cell_size).floor() as i32,
        )
    }

    fn cell_range(&self, aabb: &Aabb) -> (CellCoord, CellCoord) {
        (self.cell_of(aabb.min), self.cell_of(aabb.max))
    }

    fn span(lo: CellCoord, hi: CellCoord) -> i64 {
        let width = i64::from(hi.0) - i64::from(lo.0) + 1;
        let height = i64::from(hi.1) - i64::from(lo.1) + 1;
        width.max(0) * height.max(0)
    }

    fn insert_bounded(&mut self, index: usize, aabb: &Aabb) {
        let (lo, hi) = self.cell_range(aabb);
        let limit = i64::try_from(self.config.max_cells_per_obstacle).unwrap_or(i64::MAX);
        if Self::span(lo, hi) > limit {
            self.global.push(index);
            return;
        }

        for cx in lo.0..=hi.0 {
            for cy in lo.1..=hi.1 {
                self.cells.entry((cx, cy)).or_default().push(index);
            }
        }

        self.occupied = Some(match self.occupied {
            None => (lo, hi),
            Some((min, max)) => (
                (min.0.min(lo.0), min.1.min(lo.1)),
                (max.0.max(hi.0), max.1.max(hi.1)),
            ),
        });
    }
}

impl Default for UniformGrid {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl SpatialQuery for UniformGrid {
    fn rebuild(&mut self, obstacles: &[Obstacle]) {
        self.cells.clear();
        self.global.clear();
        self.occupied = None;
        self.count = obstacles.len();

        for (index, obstacle) in obstacles.iter().enumerate() {
            match obstacle.extent() {
                Extent::Empty => {}
                Extent::Unbounded => self.global.push(index),
                Extent::Bounded(aabb) if !aabb.is_finite() => self.global.push(index),
                Extent::Bounded(aabb) => self.insert_bounded(index, &aabb),
            }
        }

        log::debug!(
            "Grid rebuilt: {} obstacles, {} cells of size {}, {} global",
            self.count,
            self.cells.len(),
            self.config.cell_size,
            self.global.len()
        );
    }

    fn query_circle(&self, center: Vec2, radius: f32) -> Vec<usize> {
        let query = Aabb::from_circle(center, radius);
        if !query.is_finite() {
            return (0..self.count).collect();
        }

        let mut candidates = self.global.clone();
        if let Some((occupied_min, occupied_max)) = self.occupied {
            let (lo, hi) = self.cell_range(&query);
            let lo = (lo.0.max(occupied_min.0), lo.1.max(occupied_min.1));
            let hi = (hi.0.min(occupied_max.0), hi.1.min(occupied_max.1));
            let span = Self::span(lo, hi);

            if span > 0 && usize::try_from(span).map_or(true, |s| s > self.cells.len()) {
                // Cheaper to walk the buckets than the cell range
                for (&(cx, cy), bucket) in &self.cells {
                    if cx >= lo.0 && cx <= hi.0 && cy >= lo.1 && cy <= hi.1 {
                        candidates.extend_from_slice(bucket);
                    }
                }
            } else if span > 0 {
                for cx in lo.0..=hi.0 {
                    for cy in lo.1..=hi.1 {
                        if let Some(bucket) = self.cells.get(&(cx, cy)) {
                            candidates.extend_from_slice(bucket);
                        }
                    }
                }
            }
        }

        candidates.sort_unstable();
        candidates.dedup();
        candidates
    }

    fn len(&self) -> usize {
        self.count
    }

    fn name(&self) -> &'static str {
        "grid"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
