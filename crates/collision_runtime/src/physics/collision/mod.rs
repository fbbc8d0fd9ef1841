//! Narrow-phase collision geometry
//!
//! # Module Organization
//!
//! - [`primitives`] - Distance math, point-in-polygon, bounding boxes
//! - [`shape`] - Obstacle payloads and per-shape circle overlap tests
//!
//! # Key Types
//!
//! - [`Obstacle`] - Tagged union of every obstacle kind
//! - [`Rectangle`], [`Segment`], [`Polygon`] - Obstacle payloads as stored in level data
//! - [`Aabb`] - Bounding box used by the broad phase

pub mod primitives;
pub mod shape;

// Re-export commonly used types
pub use primitives::{closest_point_on_segment, distance_point_to_segment, point_in_polygon, Aabb};
pub use shape::{Extent, Obstacle, ObstacleKind, Polygon, Rectangle, Segment, Vertex};
