//! Core scoring types.
//!
//! This module contains the value types of the game:
//! - The two players and their point counts
//! - The closed set of game states
//! - Immutable point history
//!
//! Nothing in this module performs I/O.

mod history;
mod player;
mod point;
mod state;

pub use history::{PointRecord, ScoreHistory};
pub use player::{ParsePlayerError, Player};
pub use point::{PointValue, Points};
pub use state::GameState;
