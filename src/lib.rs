//! Deuce: a pure finite-state scoring engine for a single tennis-style game
//!
//! Deuce follows the "pure core, imperative shell" philosophy. The scoring
//! rules are one total function over a closed set of states; rendering is a
//! pure function of a state; only the session driver touches I/O.
//!
//! # Core Concepts
//!
//! - **State**: [`GameState`], where illegal scores are unrepresentable
//! - **Engine**: [`advance`], the transition function
//! - **Rendering**: [`render`], a one-line score summary
//! - **Session**: [`Session`], the input loop that drives a game to its end
//!
//! # Example
//!
//! ```rust
//! use deuce::{advance, render, GameState, Player};
//!
//! let mut state = GameState::new();
//! for winner in [Player::One, Player::One, Player::Two] {
//!     state = advance(state, winner);
//! }
//!
//! assert_eq!(render(&state), "30 - 15");
//! ```

pub mod core;
pub mod engine;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use self::core::{GameState, Player, PointValue, ScoreHistory};
pub use engine::{advance, replay};
pub use render::render;
pub use session::{ConsoleSource, MatchSummary, PointSource, Session, SessionError};
