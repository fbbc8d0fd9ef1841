//! Configuration system
//!
//! Runtime settings load from TOML or RON, picked by file extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

use crate::physics::movement::Bounds;
use crate::spatial::GridConfig;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Which broad phase a collision world uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadPhaseKind {
    /// Test every obstacle on every query
    #[default]
    Linear,
    /// Uniform grid over obstacle bounding boxes
    Grid,
}

/// Broad-phase settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadPhaseConfig {
    /// Partitioning scheme
    pub kind: BroadPhaseKind,
    /// Grid cell size, ignored by the linear scan
    pub cell_size: f32,
}

impl Default for BroadPhaseConfig {
    fn default() -> Self {
        Self {
            kind: BroadPhaseKind::Linear,
            cell_size: GridConfig::DEFAULT_CELL_SIZE,
        }
    }
}

/// Settings a host needs to drive the collision runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Radius of the moving entity
    pub entity_radius: f32,
    /// Playable area the entity is clamped into
    pub bounds: Bounds,
    /// Candidate narrowing for queries
    pub broad_phase: BroadPhaseConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            entity_radius: 10.0,
            bounds: Bounds::default(),
            broad_phase: BroadPhaseConfig::default(),
        }
    }
}

impl Config for RuntimeConfig {}
