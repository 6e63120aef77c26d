//! Input mapping
//!
//! Maps raw key codes to logical inputs, tracks per-input on/off state
//! and queues direction commands for the game core. Key events arrive
//! from the host between ticks; queuing instead of mutating the snake
//! directly keeps heading changes serialized with the simulation step.

use std::collections::VecDeque;

use crate::domain::Direction;

/// Logical inputs recognized by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    /// Spacebar / mouse placeholder; tracked but unused by the core.
    Action,
}

impl InputKey {
    /// Maps a `KeyboardEvent.code` value to a logical input. WASD and
    /// the arrow keys are equivalent.
    pub fn from_code(code: &str) -> Option<InputKey> {
        match code {
            "KeyW" | "ArrowUp" => Some(InputKey::Up),
            "KeyS" | "ArrowDown" => Some(InputKey::Down),
            "KeyA" | "ArrowLeft" => Some(InputKey::Left),
            "KeyD" | "ArrowRight" => Some(InputKey::Right),
            "Space" => Some(InputKey::Action),
            _ => None,
        }
    }

    fn direction(self) -> Option<Direction> {
        match self {
            InputKey::Up => Some(Direction::UP),
            InputKey::Down => Some(Direction::DOWN),
            InputKey::Left => Some(Direction::LEFT),
            InputKey::Right => Some(Direction::RIGHT),
            InputKey::Action => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Bound on queued direction commands between ticks; older commands win,
/// excess presses are dropped.
const QUEUE_LIMIT: usize = 8;

pub struct InputManager {
    /// Pressed state per logical input, indexed by `InputKey`.
    states: [bool; 5],
    /// Direction commands awaiting the next update, oldest first.
    pending: VecDeque<Direction>,
}

impl InputManager {
    pub fn new() -> Self {
        InputManager {
            states: [false; 5],
            pending: VecDeque::with_capacity(QUEUE_LIMIT),
        }
    }

    /// Handles a key-down event. Edge-triggered: a held (auto-repeating)
    /// key does not refire. Returns whether the code mapped to a known
    /// input.
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(key) = InputKey::from_code(code) else {
            return false;
        };
        if self.states[key.index()] {
            return true;
        }
        self.states[key.index()] = true;
        if let Some(direction) = key.direction() {
            if self.pending.len() < QUEUE_LIMIT {
                self.pending.push_back(direction);
            }
        }
        true
    }

    /// Handles a key-up event.
    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(key) = InputKey::from_code(code) else {
            return false;
        };
        self.states[key.index()] = false;
        true
    }

    #[inline]
    pub fn is_pressed(&self, key: InputKey) -> bool {
        self.states[key.index()]
    }

    /// Drains the queued direction commands, oldest first.
    pub fn drain_directions(&mut self) -> impl Iterator<Item = Direction> + '_ {
        self.pending.drain(..)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        InputManager::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_map_to_the_same_inputs() {
        assert_eq!(InputKey::from_code("KeyW"), Some(InputKey::Up));
        assert_eq!(InputKey::from_code("ArrowUp"), Some(InputKey::Up));
        assert_eq!(InputKey::from_code("KeyD"), Some(InputKey::Right));
        assert_eq!(InputKey::from_code("ArrowLeft"), Some(InputKey::Left));
        assert_eq!(InputKey::from_code("Space"), Some(InputKey::Action));
        assert_eq!(InputKey::from_code("KeyQ"), None);
    }

    #[test]
    fn key_down_queues_one_direction_per_press() {
        let mut input = InputManager::new();
        assert!(input.key_down("KeyW"));
        // Auto-repeat while held does not refire.
        assert!(input.key_down("KeyW"));
        input.key_up("KeyW");
        input.key_down("KeyW");

        let queued: Vec<Direction> = input.drain_directions().collect();
        assert_eq!(queued, vec![Direction::UP, Direction::UP]);
    }

    #[test]
    fn pressed_state_tracks_down_and_up() {
        let mut input = InputManager::new();
        input.key_down("ArrowRight");
        assert!(input.is_pressed(InputKey::Right));
        input.key_up("ArrowRight");
        assert!(!input.is_pressed(InputKey::Right));
    }

    #[test]
    fn action_key_is_tracked_but_queues_nothing() {
        let mut input = InputManager::new();
        input.key_down("Space");
        assert!(input.is_pressed(InputKey::Action));
        assert_eq!(input.drain_directions().count(), 0);
    }

    #[test]
    fn unknown_codes_are_ignored() {
        let mut input = InputManager::new();
        assert!(!input.key_down("Escape"));
        assert!(!input.key_up("Escape"));
        assert_eq!(input.drain_directions().count(), 0);
    }

    #[test]
    fn queue_is_bounded() {
        let mut input = InputManager::new();
        for _ in 0..QUEUE_LIMIT + 4 {
            input.key_down("KeyW");
            input.key_up("KeyW");
        }
        assert_eq!(input.drain_directions().count(), QUEUE_LIMIT);
    }
}
