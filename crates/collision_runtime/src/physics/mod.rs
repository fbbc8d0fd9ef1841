//! Physics module for collision queries and movement resolution
//!
//! Everything here is pure: queries read an obstacle snapshot and never
//! mutate it, so the same inputs always give the same answer.

pub mod collision;
pub mod collision_world;
pub mod movement;
pub mod query;
pub mod snapshot;

pub use collision::{
    Aabb,
    Extent,
    Obstacle,
    ObstacleKind,
    Polygon,
    Rectangle,
    Segment,
    Vertex,
};
pub use collision_world::CollisionWorld;
pub use movement::{resolve_move, resolve_move_with, Bounds};
pub use query::{first_blocking, is_blocked};
pub use snapshot::ObstacleSnapshot;
