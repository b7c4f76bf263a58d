use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use super::food::FoodPolicy;

/// An RGB color triple
pub type Rgb = [u8; 3];

/// Colors used to draw the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub snake: Rgb,
    pub snake_head: Rgb,
    pub food: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            border: [93, 216, 228],
            snake: [0, 255, 0],
            snake_head: [144, 255, 144],
            food: [255, 0, 0],
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Terminal columns used to draw one cell
    pub cell_size: u16,
    /// Game ticks per second
    pub tick_rate: u32,
    pub food_policy: FoodPolicy,
    pub palette: Palette,
    /// Fixed seed for food placement; random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 2,
            tick_rate: 20,
            food_policy: FoodPolicy::AvoidSnake,
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_width > 0, "grid_width must be positive");
        ensure!(self.grid_height > 0, "grid_height must be positive");
        ensure!(
            self.grid_width <= i32::MAX as usize && self.grid_height <= i32::MAX as usize,
            "grid dimensions are too large"
        );
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(self.tick_rate > 0, "tick_rate must be positive");
        Ok(())
    }
}
