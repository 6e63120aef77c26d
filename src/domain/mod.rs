//! Domain value types: headings and configuration.

pub mod direction;
pub mod settings;

pub use direction::{Axis, Direction};
pub use settings::{BoardSettings, GameSettings, LoopSettings, SnakeSettings};
