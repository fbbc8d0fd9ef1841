//! Spatial partitioning for obstacle queries
//!
//! Narrows the set of obstacles a circle query has to test. Every index is a
//! pure optimization: it may return extra candidates but never drops one
//! the exhaustive scan would report.

pub mod spatial_query;
mod grid;

pub use grid::{GridConfig, UniformGrid};
pub use spatial_query::{LinearScan, SpatialQuery};
