//! Move directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A direction to slide the whole board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in index order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Stable index (0..4) matching [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

/// Accepts direction names, browser arrow-key names, and vi keys,
/// case-insensitively. Anything else is a caller bug.
impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "arrowleft" | "l" | "h" => Ok(Direction::Left),
            "right" | "arrowright" | "r" => Ok(Direction::Right),
            "up" | "arrowup" | "u" | "k" => Ok(Direction::Up),
            "down" | "arrowdown" | "d" | "j" => Ok(Direction::Down),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| EngineError::InvalidDirection(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("ArrowRight".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!(" UP ".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("j".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("h".parse::<Direction>().unwrap(), Direction::Left);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidDirection(ref s) if s == "diagonal"));
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_index_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::try_from(dir.index()).unwrap(), dir);
        }
        assert!(Direction::try_from(4).is_err());
    }

    #[test]
    fn test_opposite() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_display_parses_back() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
    }
}
