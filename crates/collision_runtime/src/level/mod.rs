//! Level data contract
//!
//! A level is what the editor exports: rectangles (`blocks`), thick segments
//! (`walls`), polygons and the player start. Missing arrays default to empty.
//! Loading does not validate geometry; degenerate shapes are accepted and
//! only reported through [`Level::warn_on_degenerate`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use crate::physics::collision::{Obstacle, Polygon, Rectangle, Segment};
use crate::physics::snapshot::ObstacleSnapshot;

/// Level loading errors
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed level JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the player spawns
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerStart {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl From<PlayerStart> for Vec2 {
    fn from(start: PlayerStart) -> Self {
        Vec2::new(start.x, start.y)
    }
}

/// Authoring-side level data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Rectangle obstacles
    #[serde(default)]
    pub blocks: Vec<Rectangle>,
    /// Thick segment obstacles
    #[serde(default)]
    pub walls: Vec<Segment>,
    /// Polygon obstacles
    #[serde(default)]
    pub polygons: Vec<Polygon>,
    /// Player spawn point
    #[serde(default)]
    pub player_start: PlayerStart,
}

impl Level {
    /// Parse a level from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a level from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let level = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        log::debug!(
            "Loaded level {}: {} blocks, {} walls, {} polygons",
            path.display(),
            level.blocks.len(),
            level.walls.len(),
            level.polygons.len()
        );
        Ok(level)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the level as JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LevelError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// All obstacles in query order: blocks, then walls, then polygons
    pub fn obstacles(&self) -> impl Iterator<Item = Obstacle> + '_ {
        self.blocks
            .iter()
            .copied()
            .map(Obstacle::from)
            .chain(self.walls.iter().copied().map(Obstacle::from))
            .chain(self.polygons.iter().cloned().map(Obstacle::from))
    }

    /// Publish an immutable snapshot of the current obstacles
    pub fn snapshot(&self) -> ObstacleSnapshot {
        self.obstacles().collect()
    }

    /// Log every degenerate obstacle, returning how many were found
    pub fn warn_on_degenerate(&self) -> usize {
        self.obstacles()
            .enumerate()
            .filter_map(|(index, obstacle)| obstacle.degenerate_reason().map(|reason| (index, reason)))
            .inspect(|(index, reason)| log::warn!("Obstacle {index}: {reason}"))
            .count()
    }
}
