//! Game core: orchestration only
//!
//! Wires board, snake and input together and drives the fixed-tempo
//! update. Pure Rust, no browser types; the wasm facade in `api` wraps
//! it for the host. Simulation advances only on step boundaries while
//! callers repaint on every update.

mod render;

pub use render::{extract_path, RenderPath};

use crate::board::{Board, Location};
use crate::core::GameError;
use crate::domain::{Direction, GameSettings};
use crate::input::InputManager;
use crate::snake::Snake;

const DEFAULT_SEED: u32 = 12345;

pub struct GameCore {
    board: Board,
    snake: Snake,
    input: InputManager,
    settings: GameSettings,
    /// Completed simulation steps since init.
    frame: u64,
    rng_state: u32,
}

impl GameCore {
    /// Builds the full game from canvas pixel dimensions and settings.
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        settings: GameSettings,
    ) -> Result<GameCore, GameError> {
        Self::with_seed(canvas_width, canvas_height, settings, DEFAULT_SEED)
    }

    /// Same as `new` with an explicit RNG seed (deterministic escape
    /// turns under test).
    pub fn with_seed(
        canvas_width: f64,
        canvas_height: f64,
        settings: GameSettings,
        seed: u32,
    ) -> Result<GameCore, GameError> {
        settings.validate()?;
        let mut board = Board::new(canvas_width, canvas_height, &settings.board)?;
        let mut snake = Snake::new(&settings.snake, &board)?;
        snake.init(&mut board)?;

        Ok(GameCore {
            board,
            snake,
            input: InputManager::new(),
            settings,
            frame: 0,
            rng_state: if seed == 0 { DEFAULT_SEED } else { seed },
        })
    }

    /// One loop update: drains queued direction commands into the
    /// snake, then advances elapsed time. Returns whether a grid step
    /// occurred; callers repaint either way.
    pub fn update(&mut self, delta_ms: f64) -> Result<bool, GameError> {
        for direction in self.input.drain_directions() {
            self.snake.set_direction(direction);
        }
        let stepped = self
            .snake
            .advance(delta_ms, &mut self.board, &mut self.rng_state)?;
        if stepped {
            self.frame += 1;
        }
        Ok(stepped)
    }

    /// Rebuilds the snake chain from the start configuration.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.frame = 0;
        self.snake.init(&mut self.board)
    }

    pub fn render_path(&self) -> RenderPath {
        extract_path(&self.snake, &self.board)
    }

    pub fn key_down(&mut self, code: &str) -> bool {
        self.input.key_down(code)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.input.key_up(code)
    }

    /// Direct direction change by token, bypassing the key queue.
    pub fn set_direction(&mut self, token: &str) -> Result<bool, GameError> {
        Ok(self.snake.set_direction(Direction::parse(token)?))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.board.columns()
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.board.rows()
    }

    #[inline]
    pub fn snake_length(&self) -> u32 {
        self.snake.len()
    }

    pub fn head_location(&self) -> Option<Location> {
        self.snake.head_location()
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Milliseconds per host frame from the configured fps.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.settings.gm.fps
    }
}
