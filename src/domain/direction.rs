//! Travel direction value type
//!
//! A heading is an axis plus a unit increment. Canonical mapping:
//! left = (x, -1), right = (x, +1), up = (y, -1), down = (y, +1);
//! positive x runs toward higher columns, positive y toward higher rows.
//!
//! `Direction::parse` is the single shared parser for direction tokens;
//! every component that accepts a token goes through it.

use crate::core::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub axis: Axis,
    pub incr: i8,
}

impl Direction {
    pub const LEFT: Direction = Direction { axis: Axis::X, incr: -1 };
    pub const RIGHT: Direction = Direction { axis: Axis::X, incr: 1 };
    pub const UP: Direction = Direction { axis: Axis::Y, incr: -1 };
    pub const DOWN: Direction = Direction { axis: Axis::Y, incr: 1 };

    /// Parses a direction token. Invalid tokens fail, never default.
    pub fn parse(token: &str) -> Result<Direction, GameError> {
        match token.to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::LEFT),
            "right" => Ok(Direction::RIGHT),
            "up" => Ok(Direction::UP),
            "down" => Ok(Direction::DOWN),
            _ => Err(GameError::InvalidDirection(token.to_string())),
        }
    }

    /// Canonical token for this heading. Round-trips with `parse`.
    pub fn name(&self) -> &'static str {
        match (self.axis, self.incr) {
            (Axis::X, i) if i < 0 => "left",
            (Axis::X, _) => "right",
            (Axis::Y, i) if i < 0 => "up",
            (Axis::Y, _) => "down",
        }
    }

    /// Column/row delta for one grid step along this heading.
    #[inline]
    pub fn offset(&self) -> (i32, i32) {
        match self.axis {
            Axis::X => (self.incr as i32, 0),
            Axis::Y => (0, self.incr as i32),
        }
    }

    /// Headings on different axes are perpendicular.
    #[inline]
    pub fn is_perpendicular_to(&self, other: Direction) -> bool {
        self.axis != other.axis
    }

    #[inline]
    pub fn reversed(&self) -> Direction {
        Direction {
            axis: self.axis,
            incr: -self.incr,
        }
    }

    /// The two headings perpendicular to this one.
    pub fn perpendiculars(&self) -> [Direction; 2] {
        match self.axis {
            Axis::X => [Direction::UP, Direction::DOWN],
            Axis::Y => [Direction::LEFT, Direction::RIGHT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_round_trip() {
        for token in ["left", "right", "up", "down"] {
            let dir = Direction::parse(token).unwrap();
            assert_eq!(dir.name(), token);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Direction::parse("RIGHT").unwrap(), Direction::RIGHT);
        assert_eq!(Direction::parse("Up").unwrap(), Direction::UP);
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert!(matches!(
            Direction::parse("north"),
            Err(GameError::InvalidDirection(_))
        ));
        assert!(Direction::parse("").is_err());
    }

    #[test]
    fn canonical_sign_convention() {
        assert_eq!(Direction::RIGHT.offset(), (1, 0));
        assert_eq!(Direction::LEFT.offset(), (-1, 0));
        assert_eq!(Direction::DOWN.offset(), (0, 1));
        assert_eq!(Direction::UP.offset(), (0, -1));
    }

    #[test]
    fn perpendicularity() {
        assert!(Direction::RIGHT.is_perpendicular_to(Direction::UP));
        assert!(!Direction::RIGHT.is_perpendicular_to(Direction::LEFT));
        assert!(!Direction::RIGHT.is_perpendicular_to(Direction::RIGHT));
        assert_eq!(Direction::UP.perpendiculars(), [Direction::LEFT, Direction::RIGHT]);
    }

    #[test]
    fn reversal() {
        assert_eq!(Direction::LEFT.reversed(), Direction::RIGHT);
        assert_eq!(Direction::DOWN.reversed(), Direction::UP);
    }
}
