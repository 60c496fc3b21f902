//! Point-by-point history of a game.
//!
//! Provides immutable tracking of every point played, following the same
//! value semantics as [`GameState`] itself.

use super::player::Player;
use super::state::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// The state before the point
    pub from: GameState,
    /// Who won the point
    pub winner: Player,
    /// The state after the point
    pub to: GameState,
    /// When the point was recorded
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of points.
///
/// History is immutable - `record` returns a new history with the point added.
///
/// # Example
///
/// ```rust
/// use deuce::core::{GameState, Player, PointRecord, ScoreHistory};
/// use deuce::engine::advance;
/// use chrono::Utc;
///
/// let start = GameState::new();
/// let next = advance(start, Player::One);
///
/// let history = ScoreHistory::new().record(PointRecord {
///     from: start,
///     winner: Player::One,
///     to: next,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![start, next]);
/// assert_eq!(history.points_won(Player::One), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistory {
    points: Vec<PointRecord>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Record a point, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, point: PointRecord) -> Self {
        let mut points = self.points.clone();
        points.push(point);
        Self { points }
    }

    /// States visited, starting with the state before the first point.
    pub fn path(&self) -> Vec<GameState> {
        let mut path = Vec::with_capacity(self.points.len() + 1);
        if let Some(first) = self.points.first() {
            path.push(first.from);
        }
        path.extend(self.points.iter().map(|p| p.to));
        path
    }

    /// Number of recorded points won by `player`.
    pub fn points_won(&self, player: Player) -> usize {
        self.points.iter().filter(|p| p.winner == player).count()
    }

    /// Elapsed time between the first and last recorded points.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.points.first()?, self.points.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
