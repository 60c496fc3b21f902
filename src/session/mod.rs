//! The session driver.
//!
//! This module is the imperative shell around the pure engine: it reads
//! point-winner signals, feeds them to [`advance`], records the history and
//! writes one score line per turn. It contains no scoring rules.
//!
//! # Example
//!
//! ```rust
//! use deuce::core::Player;
//! use deuce::session::{ScriptedSource, Session};
//!
//! let mut out = Vec::new();
//! let source = ScriptedSource::new(["1", "oops", "1", "1", "1"]);
//!
//! let summary = Session::new(source, &mut out).run().unwrap();
//!
//! assert_eq!(summary.winner, Player::One);
//! assert_eq!(summary.points_played, 4);
//! assert_eq!(summary.rejected_signals, 1);
//! ```

mod error;
mod source;

pub use error::SessionError;
pub use source::{ConsoleSource, PointSource, ScriptedSource};

use crate::core::{GameState, Player, PointRecord, ScoreHistory};
use crate::engine::advance;
use crate::render::render_line;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Result of a single driver iteration.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// A point was played
    Scored(GameState),

    /// The signal did not name a player; state unchanged
    Rejected { signal: String },

    /// The game is over
    Concluded { winner: Player },
}

/// Outcome of a completed session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub match_id: Uuid,
    pub winner: Player,
    pub points_played: usize,
    pub rejected_signals: usize,
    pub history: ScoreHistory,
}

/// Drives one game from love-all to its conclusion.
pub struct Session<S: PointSource, W: Write> {
    match_id: Uuid,
    state: GameState,
    history: ScoreHistory,
    rejected: usize,
    source: S,
    out: W,
}

impl<S: PointSource, W: Write> Session<S, W> {
    /// Start a fresh game at love-all.
    pub fn new(source: S, out: W) -> Self {
        Self {
            match_id: Uuid::new_v4(),
            state: GameState::new(),
            history: ScoreHistory::new(),
            rejected: 0,
            source,
            out,
        }
    }

    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Run one iteration of the loop.
    ///
    /// Writes the current score, then either reports the conclusion or
    /// solicits and applies one signal.
    pub fn step(&mut self) -> Result<StepResult, SessionError> {
        writeln!(self.out, "{}", render_line(&self.state, self.history.len() + 1))?;

        if let GameState::Concluded { winner } = self.state {
            return Ok(StepResult::Concluded { winner });
        }

        let Some(signal) = self.source.next_signal()? else {
            return Err(SessionError::InputClosed { state: self.state });
        };

        match signal.parse::<Player>() {
            Ok(winner) => {
                let next = advance(self.state, winner);
                self.history = self.history.record(PointRecord {
                    from: self.state,
                    winner,
                    to: next,
                    timestamp: Utc::now(),
                });
                debug!(%winner, from = self.state.name(), to = next.name(), "point applied");
                self.state = next;
                Ok(StepResult::Scored(next))
            }
            Err(err) => {
                self.rejected += 1;
                debug!(%err, "ignoring point signal");
                Ok(StepResult::Rejected { signal })
            }
        }
    }

    /// Loop until the game concludes.
    #[instrument(skip(self), fields(match_id = %self.match_id))]
    pub fn run(mut self) -> Result<MatchSummary, SessionError> {
        info!("game started");
        loop {
            if let StepResult::Concluded { winner } = self.step()? {
                self.out.flush()?;
                info!(
                    %winner,
                    points = self.history.len(),
                    elapsed = ?self.history.duration(),
                    "game concluded"
                );
                return Ok(MatchSummary {
                    match_id: self.match_id,
                    winner,
                    points_played: self.history.len(),
                    rejected_signals: self.rejected,
                    history: self.history,
                });
            }
        }
    }
}

/// Play one game over line-oriented I/O.
///
/// Score lines go to `out`; prompts go to `prompts`, so `out` carries exactly
/// one line per turn even when input is piped.
pub fn play_console<R, O, P>(input: R, out: O, prompts: P) -> Result<MatchSummary, SessionError>
where
    R: BufRead,
    O: Write,
    P: Write,
{
    Session::new(ConsoleSource::new(input, prompts), out).run()
}
