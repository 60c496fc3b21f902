//! The game state.
//!
//! Every legal score is one variant of [`GameState`]. Scores that cannot occur
//! in a real game (a player "at 45", or a win straight out of deuce) have no
//! representation at all.

use super::player::Player;
use super::point::{PointValue, Points};
use serde::{Deserialize, Serialize};

/// Position of a single game.
///
/// All methods are pure. States are small `Copy` values; a transition always
/// produces a new one.
///
/// # Example
///
/// ```rust
/// use deuce::core::{GameState, Player};
///
/// let state = GameState::new();
/// assert_eq!(state.name(), "InPlay");
/// assert!(!state.is_final());
///
/// let done = GameState::Concluded { winner: Player::Two };
/// assert!(done.is_final());
/// assert_eq!(done.winner(), Some(Player::Two));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameState {
    /// Both players below forty.
    InPlay { points: Points },

    /// `leader` holds forty, the other player holds `trailing`.
    Forty { leader: Player, trailing: PointValue },

    /// Both players at forty (deuce).
    Tied,

    /// One point past a tie.
    Advantage { ahead: Player },

    /// Terminal.
    Concluded { winner: Player },
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The single entry point: love-all.
    pub fn new() -> Self {
        Self::InPlay {
            points: Points::default(),
        }
    }

    /// Tag name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InPlay { .. } => "InPlay",
            Self::Forty { .. } => "Forty",
            Self::Tied => "Tied",
            Self::Advantage { .. } => "Advantage",
            Self::Concluded { .. } => "Concluded",
        }
    }

    /// Check if the game is over.
    ///
    /// No transition leaves a final state.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Concluded { .. })
    }

    /// The winner, once concluded.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Concluded { winner } => Some(*winner),
            _ => None,
        }
    }
}
