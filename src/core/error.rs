//! Game error type
//!
//! One error enum for the whole engine. Construction-time contract
//! violations and bad lookups fail immediately; nothing retries and
//! nothing silently defaults.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Invalid configuration detected at construction time.
    Config(String),
    /// Slot lookup outside the board grid.
    OutOfRange { col: i32, row: i32 },
    /// Unrecognized direction token.
    InvalidDirection(String),
    /// Unrecognized neighbor edge name.
    InvalidEdge(String),
    /// Joint chain linkage invariant violated. Fatal to the run.
    BrokenChain(&'static str),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            GameError::OutOfRange { col, row } => {
                write!(f, "slot ({}, {}) is outside the board", col, row)
            }
            GameError::InvalidDirection(token) => write!(
                f,
                "invalid direction '{}' (expected 'left', 'right', 'up' or 'down')",
                token
            ),
            GameError::InvalidEdge(edge) => write!(
                f,
                "invalid edge '{}' (expected 'left', 'right', 'top' or 'bottom')",
                edge
            ),
            GameError::BrokenChain(msg) => write!(f, "broken joint chain: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_values() {
        let err = GameError::OutOfRange { col: 40, row: -1 };
        assert_eq!(err.to_string(), "slot (40, -1) is outside the board");

        let err = GameError::InvalidDirection("diagonal".into());
        assert!(err.to_string().contains("'diagonal'"));
    }
}
