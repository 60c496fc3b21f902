//! The scoring engine.
//!
//! A single pure transition function over [`GameState`]. It is total: every
//! `(state, winner)` pair has a defined successor, and the match over the
//! state tags is exhaustive, so adding a variant fails to compile until it is
//! handled here.

use crate::core::{GameState, Player};
use tracing::trace;

/// Award a point to `winner` and return the resulting state.
///
/// # Example
///
/// ```rust
/// use deuce::core::{GameState, Player};
/// use deuce::engine::advance;
///
/// let state = advance(GameState::Tied, Player::Two);
/// assert_eq!(state, GameState::Advantage { ahead: Player::Two });
///
/// let state = advance(state, Player::One);
/// assert_eq!(state, GameState::Tied);
/// ```
pub fn advance(current: GameState, winner: Player) -> GameState {
    let next = match current {
        GameState::InPlay { points } => match points.get(winner).next() {
            Some(value) => GameState::InPlay {
                points: points.with(winner, value),
            },
            None => GameState::Forty {
                leader: winner,
                trailing: points.get(winner.other()),
            },
        },
        GameState::Forty { leader, .. } if leader == winner => GameState::Concluded { winner },
        GameState::Forty { leader, trailing } => match trailing.next() {
            Some(trailing) => GameState::Forty { leader, trailing },
            None => GameState::Tied,
        },
        GameState::Tied => GameState::Advantage { ahead: winner },
        GameState::Advantage { ahead } if ahead == winner => GameState::Concluded { winner },
        GameState::Advantage { .. } => GameState::Tied,
        GameState::Concluded { .. } => current,
    };
    trace!(from = current.name(), to = next.name(), %winner, "point scored");
    next
}

/// Fold [`advance`] over a sequence of point winners.
///
/// Points after the game concludes are absorbed.
///
/// # Example
///
/// ```rust
/// use deuce::core::{GameState, Player};
/// use deuce::engine::replay;
///
/// let state = replay(GameState::new(), [Player::One; 4]);
/// assert_eq!(state, GameState::Concluded { winner: Player::One });
/// ```
pub fn replay<I>(start: GameState, winners: I) -> GameState
where
    I: IntoIterator<Item = Player>,
{
    winners.into_iter().fold(start, advance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PointValue, Points};
    use PointValue::{Fifteen, Love, Thirty};

    fn in_play(one: PointValue, two: PointValue) -> GameState {
        GameState::InPlay {
            points: Points::new(one, two),
        }
    }

    #[test]
    fn in_play_steps_the_winner_only() {
        assert_eq!(advance(in_play(Love, Love), Player::One), in_play(Fifteen, Love));
        assert_eq!(advance(in_play(Fifteen, Love), Player::One), in_play(Thirty, Love));
        assert_eq!(advance(in_play(Thirty, Fifteen), Player::Two), in_play(Thirty, Thirty));
    }

    #[test]
    fn thirty_moves_to_forty_not_to_a_win() {
        assert_eq!(
            advance(in_play(Thirty, Fifteen), Player::One),
            GameState::Forty {
                leader: Player::One,
                trailing: Fifteen
            }
        );
        assert_eq!(
            advance(in_play(Love, Thirty), Player::Two),
            GameState::Forty {
                leader: Player::Two,
                trailing: Love
            }
        );
    }

    #[test]
    fn forty_leader_wins_outright() {
        for trailing in PointValue::ALL {
            let state = GameState::Forty {
                leader: Player::Two,
                trailing,
            };
            assert_eq!(
                advance(state, Player::Two),
                GameState::Concluded { winner: Player::Two }
            );
        }
    }

    #[test]
    fn forty_trailer_catches_up() {
        let state = GameState::Forty {
            leader: Player::One,
            trailing: Love,
        };

        let state = advance(state, Player::Two);
        assert_eq!(
            state,
            GameState::Forty {
                leader: Player::One,
                trailing: Fifteen
            }
        );

        let state = advance(state, Player::Two);
        assert_eq!(
            state,
            GameState::Forty {
                leader: Player::One,
                trailing: Thirty
            }
        );

        assert_eq!(advance(state, Player::Two), GameState::Tied);
    }

    #[test]
    fn tied_only_gives_advantage() {
        for player in Player::ALL {
            assert_eq!(
                advance(GameState::Tied, player),
                GameState::Advantage { ahead: player }
            );
        }
    }

    #[test]
    fn advantage_wins_or_returns_to_tied() {
        let state = GameState::Advantage { ahead: Player::One };
        assert_eq!(
            advance(state, Player::One),
            GameState::Concluded { winner: Player::One }
        );
        assert_eq!(advance(state, Player::Two), GameState::Tied);
    }

    #[test]
    fn concluded_absorbs_further_points() {
        let state = GameState::Concluded { winner: Player::Two };
        for player in Player::ALL {
            assert_eq!(advance(state, player), state);
        }
    }

    #[test]
    fn full_trace_through_deuce() {
        use Player::{One, Two};

        let mut state = replay(GameState::new(), [One, One]);
        assert_eq!(state, in_play(Thirty, Love));

        state = advance(state, One);
        assert_eq!(
            state,
            GameState::Forty {
                leader: One,
                trailing: Love
            }
        );

        state = replay(state, [Two, Two, Two]);
        assert_eq!(state, GameState::Tied);

        state = advance(state, One);
        assert_eq!(state, GameState::Advantage { ahead: One });

        state = advance(state, Two);
        assert_eq!(state, GameState::Tied);

        state = advance(state, One);
        assert_eq!(state, GameState::Advantage { ahead: One });

        state = advance(state, One);
        assert_eq!(state, GameState::Concluded { winner: One });
    }

    #[test]
    fn replay_of_nothing_is_identity() {
        assert_eq!(replay(GameState::Tied, std::iter::empty()), GameState::Tied);
    }
}
