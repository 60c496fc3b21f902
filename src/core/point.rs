//! Point counts below forty.

use super::player::Player;
use serde::{Deserialize, Serialize};

/// A player's count while neither side holds forty.
///
/// There is no `Forty` variant: reaching forty moves the game
/// out of [`GameState::InPlay`](super::GameState::InPlay) instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PointValue {
    Love,
    Fifteen,
    Thirty,
}

impl PointValue {
    pub const ALL: [PointValue; 3] = [PointValue::Love, PointValue::Fifteen, PointValue::Thirty];

    /// The following count, or `None` once the next point would be forty.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Love => Some(Self::Fifteen),
            Self::Fifteen => Some(Self::Thirty),
            Self::Thirty => None,
        }
    }

    /// The umpire's call for this count.
    pub fn label(self) -> &'static str {
        match self {
            Self::Love => "0",
            Self::Fifteen => "15",
            Self::Thirty => "30",
        }
    }
}

/// Both players' counts, indexed by player.
///
/// # Example
///
/// ```rust
/// use deuce::core::{Player, PointValue, Points};
///
/// let points = Points::default();
/// let points = points.with(Player::Two, PointValue::Fifteen);
/// assert_eq!(points.get(Player::One), PointValue::Love);
/// assert_eq!(points.get(Player::Two), PointValue::Fifteen);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Points {
    pub one: PointValue,
    pub two: PointValue,
}

impl Default for Points {
    fn default() -> Self {
        Self::new(PointValue::Love, PointValue::Love)
    }
}

impl Points {
    pub fn new(one: PointValue, two: PointValue) -> Self {
        Self { one, two }
    }

    pub fn get(&self, player: Player) -> PointValue {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// Returns a copy with `player`'s count replaced.
    pub fn with(self, player: Player, value: PointValue) -> Self {
        match player {
            Player::One => Self { one: value, ..self },
            Player::Two => Self { two: value, ..self },
        }
    }
}
