//! Human-readable rendering of a game state.
//!
//! Rendering is pure and injective: distinct states always produce
//! distinct strings.

use crate::core::{GameState, Player};
use std::fmt;

const FORTY: &str = "40";

/// Render a state as a one-line score summary.
///
/// Scores are listed Player 1 first.
///
/// # Example
///
/// ```rust
/// use deuce::core::{GameState, Player, PointValue};
/// use deuce::render::render;
///
/// assert_eq!(render(&GameState::new()), "0 - 0");
///
/// let state = GameState::Forty { leader: Player::Two, trailing: PointValue::Fifteen };
/// assert_eq!(render(&state), "15 - 40");
///
/// assert_eq!(render(&GameState::Tied), "Deuce");
/// ```
pub fn render(state: &GameState) -> String {
    match state {
        GameState::InPlay { points } => {
            format!("{} - {}", points.one.label(), points.two.label())
        }
        GameState::Forty { leader, trailing } => match leader {
            Player::One => format!("{FORTY} - {}", trailing.label()),
            Player::Two => format!("{} - {FORTY}", trailing.label()),
        },
        GameState::Tied => "Deuce".to_string(),
        GameState::Advantage { ahead } => format!("Advantage {ahead}"),
        GameState::Concluded { winner } => format!("Game, {winner} wins"),
    }
}

/// Render a numbered turn line, as written by the session driver.
pub fn render_line(state: &GameState, point_no: usize) -> String {
    if state.is_final() {
        render(state)
    } else {
        format!("[point {point_no}] {}", render(state))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PointValue, Points};
    use std::collections::HashSet;

    fn every_state() -> Vec<GameState> {
        let mut states = Vec::new();
        for one in PointValue::ALL {
            for two in PointValue::ALL {
                states.push(GameState::InPlay {
                    points: Points::new(one, two),
                });
            }
        }
        for leader in Player::ALL {
            for trailing in PointValue::ALL {
                states.push(GameState::Forty { leader, trailing });
            }
            states.push(GameState::Advantage { ahead: leader });
            states.push(GameState::Concluded { winner: leader });
        }
        states.push(GameState::Tied);
        states
    }

    #[test]
    fn in_play_uses_literal_labels() {
        let state = GameState::InPlay {
            points: Points::new(PointValue::Thirty, PointValue::Fifteen),
        };
        assert_eq!(render(&state), "30 - 15");
    }

    #[test]
    fn forty_is_shown_on_the_leader_side() {
        let state = GameState::Forty {
            leader: Player::One,
            trailing: PointValue::Love,
        };
        assert_eq!(render(&state), "40 - 0");
    }

    #[test]
    fn advantage_and_win_name_the_player() {
        assert_eq!(
            render(&GameState::Advantage { ahead: Player::Two }),
            "Advantage Player 2"
        );
        assert_eq!(
            render(&GameState::Concluded { winner: Player::One }),
            "Game, Player 1 wins"
        );
    }

    #[test]
    fn rendering_is_injective() {
        let states = every_state();
        assert_eq!(states.len(), 20);

        let rendered: HashSet<String> = states.iter().map(render).collect();
        assert_eq!(rendered.len(), states.len());
    }

    #[test]
    fn display_matches_render() {
        for state in every_state() {
            assert_eq!(state.to_string(), render(&state));
        }
    }

    #[test]
    fn render_line_numbers_live_states_only() {
        assert_eq!(render_line(&GameState::Tied, 7), "[point 7] Deuce");
        assert_eq!(
            render_line(&GameState::Concluded { winner: Player::Two }, 9),
            "Game, Player 2 wins"
        );
    }
}
