//! Move directions.
//!
//! Directions are a closed set. Textual input (command tokens or the
//! classic `w`/`a`/`s`/`d` keys) is parsed at the boundary, so the engine
//! itself never sees an invalid direction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// The wall a move compacts tiles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a keypress to a direction (`w` up, `a` left, `s` down, `d` right).
    pub fn from_key(key: char) -> Result<Self, EngineError> {
        match key.to_ascii_lowercase() {
            'w' => Ok(Direction::Up),
            'a' => Ok(Direction::Left),
            's' => Ok(Direction::Down),
            'd' => Ok(Direction::Right),
            other => Err(EngineError::InvalidDirection(other.to_string())),
        }
    }

    /// Lowercase name of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

}

impl FromStr for Direction {
    type Err = EngineError;

    /// Parse a direction token. Full names are matched case-insensitively;
    /// a single character is treated as a key (see [`Direction::from_key`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            return Direction::from_key(key).map_err(|_| EngineError::InvalidDirection(token.to_string()));
        }

        Direction::ALL
            .into_iter()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| EngineError::InvalidDirection(token.to_string()))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
