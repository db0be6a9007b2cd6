//! Configuration loading for GridScout.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ScoutError};
use crate::strategy::StrategyKind;

/// Main configuration structure.
#[derive(Clone, Debug, Deserialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Grid layout settings.
#[derive(Clone, Debug, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells (default: 10)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Grid height in cells (default: 10)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Number of obstacles to scatter (default: 8)
    #[serde(default = "default_obstacle_count")]
    pub obstacle_count: usize,
}

/// Simulation run settings.
#[derive(Clone, Debug, Deserialize)]
pub struct SimulationConfig {
    /// Exploration strategy (default: deterministic-frontier)
    #[serde(default = "default_strategy")]
    pub strategy: StrategyKind,

    /// Tick budget before a run is aborted (default: 10000)
    #[serde(default = "default_max_ticks")]
    pub max_ticks: usize,

    /// RNG seed for reproducible runs; unset draws from the OS
    #[serde(default)]
    pub seed: Option<u64>,

    /// Render an ASCII frame after every tick (default: true)
    #[serde(default = "default_render")]
    pub render: bool,
}

// Default value functions
fn default_width() -> i32 {
    10
}
fn default_height() -> i32 {
    10
}
fn default_obstacle_count() -> usize {
    8
}
fn default_strategy() -> StrategyKind {
    StrategyKind::DeterministicFrontier
}
fn default_max_ticks() -> usize {
    10_000
}
fn default_render() -> bool {
    true
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            obstacle_count: default_obstacle_count(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            max_ticks: default_max_ticks(),
            seed: None,
            render: default_render(),
        }
    }
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl ScoutConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScoutError::Config(format!("Failed to read config file: {}", e)))?;
        let config: ScoutConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the configuration before a world is built.
    ///
    /// The exploration core assumes a valid, static grid shape; these
    /// are its preconditions.
    pub fn validate(&self) -> Result<()> {
        if self.grid.width < 1 {
            return Err(ScoutError::Config("Grid width is too small".into()));
        }
        if self.grid.height < 1 {
            return Err(ScoutError::Config("Grid height is too small".into()));
        }
        if self.grid.obstacle_count < 1 {
            return Err(ScoutError::Config("Obstacle amount is too small".into()));
        }
        let cells = self.grid.width as usize * self.grid.height as usize;
        if self.grid.obstacle_count >= cells {
            return Err(ScoutError::Config("Obstacle amount is too big".into()));
        }
        Ok(())
    }
}
