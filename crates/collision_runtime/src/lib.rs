//! # Collision Runtime
//!
//! Geometric collision queries for top-down 2D games: a circular entity
//! against static rotated rectangles, thick segments and polygons (plain or
//! inverted).
//!
//! ## Features
//!
//! - **Overlap Queries**: Per-shape circle tests and an aggregate query
//! - **Move-and-Slide**: Axis-separated sliding when a move is blocked
//! - **Snapshots**: Immutable, shareable obstacle collections
//! - **Broad Phase**: Pluggable candidate narrowing (linear scan, uniform grid)
//! - **Level Data**: The editor's JSON level contract
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_runtime::prelude::*;
//!
//! let level = Level::from_json_str(r#"{
//!     "blocks": [{"x": 100, "y": 100, "width": 50, "height": 50, "rotation": 0}]
//! }"#)?;
//! let world = CollisionWorld::with_linear_scan(level.snapshot());
//!
//! assert!(world.is_blocked(90.0, 125.0, 10.0));
//!
//! let next = world.resolve_move(50.0, 125.0, 20.0, 0.0, 10.0, &Bounds::new(800.0, 600.0));
//! assert_eq!(next, Vec2::new(70.0, 125.0));
//! # Ok::<(), LevelError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod level;
pub mod physics;
pub mod spatial;

/// Common imports for runtime users
pub mod prelude {
    pub use crate::{
        config::{BroadPhaseConfig, BroadPhaseKind, Config, ConfigError, RuntimeConfig},
        foundation::math::Vec2,
        level::{Level, LevelError, PlayerStart},
        physics::{
            Bounds, CollisionWorld, Obstacle, ObstacleSnapshot, Polygon, Rectangle, Segment,
            Vertex,
        },
        spatial::{LinearScan, SpatialQuery, UniformGrid},
    };
}
