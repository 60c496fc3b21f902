//! The two competitors of a game.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of exactly two players.
///
/// # Example
///
/// ```rust
/// use deuce::core::Player;
///
/// let player: Player = "1".parse().unwrap();
/// assert_eq!(player, Player::One);
/// assert_eq!(player.other(), Player::Two);
/// assert!("3".parse::<Player>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in display order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Seat number as typed on the console.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Signal that does not name a player.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized point winner '{input}', expected '1' or '2'")]
pub struct ParsePlayerError {
    pub input: String,
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            other => Err(ParsePlayerError {
                input: other.to_string(),
            }),
        }
    }
}
