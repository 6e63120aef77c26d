//! Game settings
//!
//! Explicit configuration structs handed into each component's
//! constructor. Deserialized from a JSON string passed over the wasm
//! boundary; every field is defaulted so `{}` is a playable game.

use serde::Deserialize;

use crate::core::GameError;
use crate::domain::direction::Direction;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Game manager settings.
    pub gm: LoopSettings,
    /// Game board settings.
    pub board: BoardSettings,
    /// Snake settings.
    pub snake: SnakeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoopSettings {
    /// Target frames per second for the host loop driver.
    pub fps: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Grid slots along the x axis.
    pub columns: u32,
    /// Grid slots along the y axis.
    pub rows: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    /// Slot movements per second.
    pub speed: f64,
    pub start_length: u32,
    pub start_col: u32,
    pub start_row: u32,
    /// "left", "right", "up" or "down".
    pub start_direction: String,
    /// Stroke width in pixels.
    pub width: f64,
    /// Stroke color (any canvas color string).
    pub color: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            gm: LoopSettings::default(),
            board: BoardSettings::default(),
            snake: SnakeSettings::default(),
        }
    }
}

impl Default for LoopSettings {
    fn default() -> Self {
        LoopSettings { fps: 60.0 }
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        BoardSettings {
            columns: 32,
            rows: 24,
        }
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        SnakeSettings {
            speed: 8.0,
            start_length: 15,
            start_col: 15,
            start_row: 16,
            start_direction: "right".to_string(),
            width: 16.0,
            color: "#000000".to_string(),
        }
    }
}

impl GameSettings {
    pub fn from_json(json: &str) -> Result<GameSettings, GameError> {
        let settings: GameSettings = serde_json::from_str(json)
            .map_err(|e| GameError::Config(format!("bad settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks construction-time contracts that serde cannot express.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.gm.fps <= 0.0 || !self.gm.fps.is_finite() {
            return Err(GameError::Config(format!("fps must be positive, got {}", self.gm.fps)));
        }
        // A 1-wide or 1-tall board has no perpendicular escape from a wall.
        if self.board.columns < 2 || self.board.rows < 2 {
            return Err(GameError::Config(format!(
                "board must be at least 2x2, got {}x{}",
                self.board.columns, self.board.rows
            )));
        }
        if self.snake.speed <= 0.0 || !self.snake.speed.is_finite() {
            return Err(GameError::Config(format!(
                "snake speed must be positive, got {}",
                self.snake.speed
            )));
        }
        if self.snake.start_length == 0 {
            return Err(GameError::Config("snake start_length must be at least 1".into()));
        }
        if self.snake.start_col >= self.board.columns || self.snake.start_row >= self.board.rows {
            return Err(GameError::Config(format!(
                "snake start ({}, {}) is outside the {}x{} board",
                self.snake.start_col, self.snake.start_row, self.board.columns, self.board.rows
            )));
        }
        if self.snake.width <= 0.0 || !self.snake.width.is_finite() {
            return Err(GameError::Config(format!(
                "snake width must be positive, got {}",
                self.snake.width
            )));
        }
        Direction::parse(&self.snake.start_direction)?;
        Ok(())
    }
}
