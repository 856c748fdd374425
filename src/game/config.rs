use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::Grid;

/// Tick speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 150ms per tick
    Easy,
    /// 100ms per tick
    #[default]
    Medium,
    /// 70ms per tick
    Hard,
}

impl Difficulty {
    /// Get the tick period for this difficulty
    pub fn tick_interval(&self) -> Duration {
        match self {
            Self::Easy => Duration::from_millis(150),
            Self::Medium => Duration::from_millis(100),
            Self::Hard => Duration::from_millis(70),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the drawing surface in surface units
    pub surface_width: u32,
    /// Height of the drawing surface in surface units
    pub surface_height: u32,
    /// Side length of one grid cell in surface units
    pub cell_size: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Score awarded for each food eaten
    pub points_per_food: u32,
    /// Tick speed at startup
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: 400,
            surface_height: 400,
            cell_size: 20,
            initial_snake_length: 3,
            points_per_food: 10,
            difficulty: Difficulty::Medium,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom surface size
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            surface_width,
            surface_height,
            ..Default::default()
        }
    }

    /// Create a configuration whose grid is `columns` x `rows` cells
    pub fn with_grid(columns: u32, rows: u32) -> Self {
        let defaults = Self::default();
        Self::new(columns * defaults.cell_size, rows * defaults.cell_size)
    }

    /// Read a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        serde_json::from_str(&json).with_context(|| format!("Invalid config in {:?}", path))
    }

    /// The cell lattice derived from the surface size
    pub fn grid(&self) -> Grid {
        Grid::from_surface(self.surface_width, self.surface_height, self.cell_size)
    }

    /// Validate configuration parameters
    ///
    /// Returns `Err` with a message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be at least 1".to_string());
        }

        if self.surface_width < self.cell_size || self.surface_height < self.cell_size {
            return Err(format!(
                "surface {}x{} is smaller than one cell of size {}",
                self.surface_width, self.surface_height, self.cell_size
            ));
        }

        if self.initial_snake_length < 3 {
            return Err(format!(
                "initial_snake_length must be at least 3, got {}",
                self.initial_snake_length
            ));
        }

        // The snake starts centred with its head at column width / 2,
        // trailing to the left.
        let grid = self.grid();
        if grid.width() / 2 + 1 < self.initial_snake_length {
            return Err(format!(
                "grid width {} is too narrow for a snake of length {}",
                grid.width(),
                self.initial_snake_length
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.points_per_food, 10);
        assert_eq!(config.grid().width(), 20);
        assert_eq!(config.grid().height(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_grid() {
        let config = GameConfig::with_grid(15, 12);
        assert_eq!(config.surface_width, 300);
        assert_eq!(config.surface_height, 240);
        assert_eq!(config.grid().width(), 15);
        assert_eq!(config.grid().height(), 12);
    }

    #[test]
    fn test_difficulty_periods() {
        assert_eq!(Difficulty::Easy.tick_interval(), Duration::from_millis(150));
        assert_eq!(Difficulty::Medium.tick_interval(), Duration::from_millis(100));
        assert_eq!(Difficulty::Hard.tick_interval(), Duration::from_millis(70));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.cell_size = 0;
        assert!(config.validate().is_err());

        let config = GameConfig::new(10, 400);
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.initial_snake_length = 2;
        assert!(config.validate().is_err());

        // 4 columns fit a length-3 snake (head at 2, tail at 0), 3 do not
        assert!(GameConfig::with_grid(4, 4).validate().is_ok());
        assert!(GameConfig::with_grid(3, 4).validate().is_err());
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "surface_width": 600, "difficulty": "hard" }"#).unwrap();

        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.surface_width, 600);
        assert_eq!(config.surface_height, 400);
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(GameConfig::from_file(&temp_dir.path().join("nope.json")).is_err());
    }
}
