//! jSnake Engine - Snake movement core for a browser canvas game
//!
//! Architecture:
//! - core/    - Error type and RNG
//! - domain/  - Direction and settings value types
//! - board/   - Grid of slots with precomputed pixel centers
//! - snake/   - Joint chain and per-step movement
//! - input/   - Logical input mapping and direction queue
//! - game/    - Orchestration core and render-path extraction
//! - api/     - Public WASM API
//!
//! Everything below `api` is pure Rust and tests natively; the facade
//! binds it to a canvas and the host's event loop.

pub mod core;
pub mod domain;
pub mod board;
pub mod snake;
pub mod input;
pub mod game;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"jSnake WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::api::wasm::Game;
pub use crate::board::{Board, Edge, Location, Slot};
pub use crate::core::GameError;
pub use crate::domain::{Axis, Direction, GameSettings};
pub use crate::game::{GameCore, RenderPath};
pub use crate::input::{InputKey, InputManager};
pub use crate::snake::{Joint, JointId, Snake};
