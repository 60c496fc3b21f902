//! Session error types.

use crate::core::GameState;
use thiserror::Error;

/// Errors that can end a session before the game concludes.
///
/// Unparseable point signals are not errors; the session re-prompts.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing the score failed
    #[error("Session I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The point history could not be encoded
    #[error("History serialization failed: {0}")]
    History(#[from] serde_json::Error),

    /// The input source ran dry mid-game
    #[error("Input closed before the game concluded (score: {state})")]
    InputClosed { state: GameState },
}
