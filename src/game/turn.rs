//! Turn Resolution
//!
//! The rules: one die roll for the current player in, the next game state
//! and a description of what happened out. Pure and synchronous; the caller
//! commits the returned state.

use thiserror::Error;

use crate::game::board::{destination_of, Square, FINAL_SQUARE};
use crate::game::die::{DieFace, DIE_FACES};
use crate::game::events::{Movement, TurnEvent, TurnResult};
use crate::game::rotation::{last_standing, next_active_player};
use crate::game::state::{GameState, GameStatus, PlayerIndex};

/// Reasons a turn cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game is already over.
    #[error("game has already ended")]
    GameEnded,

    /// No such seat.
    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerIndex),

    /// Someone other than the current player tried to roll.
    #[error("it is {expected}'s turn, not {got}'s")]
    NotPlayersTurn {
        /// Whose turn it is.
        expected: PlayerIndex,
        /// Who tried to roll.
        got: PlayerIndex,
    },

    /// The player already reached the final square.
    #[error("{0} has already finished")]
    PlayerFinished(PlayerIndex),

    /// Roll outside 1..=6.
    #[error("invalid die roll {0}")]
    InvalidRoll(DieFace),

    /// Game is in progress but nobody is left to roll.
    ///
    /// Means finish bookkeeping and per-player flags disagree. Fatal.
    #[error("no active player left while the game is in progress")]
    NoActivePlayer,
}

/// Work out where a roll from `from` takes a token.
///
/// Rolls that would pass the final square are rejected outright; the token
/// stays where it is. Landing exactly on the final square is always legal.
pub fn apply_roll(from: Square, roll: DieFace) -> Movement {
    let landed = from.saturating_add(roll);
    if landed > FINAL_SQUARE {
        return Movement::Overshot { at: from };
    }

    match destination_of(landed) {
        Some(to) if to > landed => Movement::Climbed { from: landed, to },
        Some(to) => Movement::Bitten { from: landed, to },
        None => Movement::Moved { to: landed },
    }
}

/// Resolve one roll for `player`.
///
/// # Preconditions
///
/// The game is in progress, `player` is the current player and has not
/// finished, and `roll` is a die face. Violations are reported as errors
/// and `state` is left untouched either way.
///
/// # Order of resolution
///
/// 1. Overshoot check
/// 2. Ladder / snake lookup on the landing square
/// 3. Finish check, then game-over check
/// 4. Next player, skipping anyone who has finished
pub fn resolve_turn(
    state: &GameState,
    player: PlayerIndex,
    roll: DieFace,
) -> Result<(GameState, TurnResult), TurnError> {
    check_preconditions(state, player, roll)?;

    let mut next = state.clone();
    let from = next.player(player).map(|p| p.position).ok_or(TurnError::UnknownPlayer(player))?;

    // 1-2. Move the token
    let movement = apply_roll(from, roll);
    let to = movement.final_square();
    if let Some(p) = next.player_mut(player) {
        p.position = to;
    }

    let mut event = TurnEvent::from_movement(player, roll, movement);

    // 3. Finish and game-over checks
    if to == FINAL_SQUARE {
        let rank = record_finish(&mut next, player);
        event = TurnEvent::Finished { player, rank };

        if next.finish_order.len() + 1 == next.player_count() {
            let loser = last_standing(&next.players).ok_or(TurnError::NoActivePlayer)?;
            next.status = GameStatus::Ended;
            event = TurnEvent::GameOver { loser };
        }
    }

    // 4. Hand over the die
    let next_player = match next.status {
        GameStatus::Ended => None,
        GameStatus::InProgress => {
            let following = next_active_player(&next.players, player).ok_or(TurnError::NoActivePlayer)?;
            next.current_player = following;
            Some(following)
        }
    };

    next.turn += 1;
    next.last_roll = Some(roll);
    next.last_event = Some(event);

    let result = TurnResult {
        player,
        roll,
        from,
        movement,
        event,
        next_player,
    };

    Ok((next, result))
}

fn check_preconditions(state: &GameState, player: PlayerIndex, roll: DieFace) -> Result<(), TurnError> {
    if state.is_ended() {
        return Err(TurnError::GameEnded);
    }
    let seat = state.player(player).ok_or(TurnError::UnknownPlayer(player))?;
    if player != state.current_player {
        return Err(TurnError::NotPlayersTurn {
            expected: state.current_player,
            got: player,
        });
    }
    if seat.finished {
        return Err(TurnError::PlayerFinished(player));
    }
    if !(1..=DIE_FACES).contains(&roll) {
        return Err(TurnError::InvalidRoll(roll));
    }
    Ok(())
}

/// Mark `player` finished and return their 1-based rank.
fn record_finish(state: &mut GameState, player: PlayerIndex) -> u32 {
    let rank = state.finish_order.len() as u32 + 1;
    if let Some(p) = state.player_mut(player) {
        p.finished = true;
        p.finish_rank = Some(rank);
    }
    state.finish_order.push(player);
    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    /// State with `player` to move from `position`.
    fn at(player_count: usize, player: usize, position: Square) -> GameState {
        let mut state = GameState::new(player_count);
        state.players[player].position = position;
        state.current_player = PlayerIndex(player);
        state
    }

    #[test]
    fn test_plain_move() {
        let state = at(2, 0, 0);
        let (next, result) = resolve_turn(&state, PlayerIndex(0), 3).unwrap();

        assert_eq!(next.players[0].position, 3);
        assert_eq!(result.event, TurnEvent::Moved { player: PlayerIndex(0), to: 3 });
        assert_eq!(result.next_player, Some(PlayerIndex(1)));
        assert_eq!(next.current_player, PlayerIndex(1));
        assert_eq!(next.turn, 1);
        assert_eq!(next.last_roll, Some(3));
        assert_eq!(next.last_event, Some(result.event));
    }

    #[test]
    fn test_ladder_from_start() {
        let state = at(2, 0, 0);
        let (next, result) = resolve_turn(&state, PlayerIndex(0), 4).unwrap();

        assert_eq!(result.event, TurnEvent::Climbed { player: PlayerIndex(0), from: 4, to: 14 });
        assert_eq!(next.players[0].position, 14);
    }

    #[test]
    fn test_snake_bite() {
        let state = at(2, 0, 13);
        let (next, result) = resolve_turn(&state, PlayerIndex(0), 4).unwrap();

        assert_eq!(result.event, TurnEvent::Bitten { player: PlayerIndex(0), from: 17, to: 7 });
        assert_eq!(next.players[0].position, 7);
    }

    #[test]
    fn test_overshoot_keeps_position() {
        let state = at(2, 0, 97);
        let (next, result) = resolve_turn(&state, PlayerIndex(0), 5).unwrap();

        assert_eq!(result.event, TurnEvent::Overshot { player: PlayerIndex(0), at: 97, roll: 5 });
        assert_eq!(result.movement, Movement::Overshot { at: 97 });
        assert_eq!(next.players[0].position, 97);
        // Turn still passes on
        assert_eq!(next.current_player, PlayerIndex(1));
    }

    #[test]
    fn test_exact_finish() {
        let state = at(3, 0, 95);
        let (next, result) = resolve_turn(&state, PlayerIndex(0), 5).unwrap();

        assert_eq!(result.movement, Movement::Moved { to: 100 });
        assert_eq!(result.event, TurnEvent::Finished { player: PlayerIndex(0), rank: 1 });
        assert!(next.players[0].finished);
        assert_eq!(next.players[0].finish_rank, Some(1));
        assert_eq!(next.finish_order, vec![PlayerIndex(0)]);
        assert_eq!(next.status, GameStatus::InProgress);
        assert!(next.is_consistent());
    }

    #[test]
    fn test_finished_player_is_skipped() {
        let state = at(3, 1, 98);
        let (next, result) = resolve_turn(&state, PlayerIndex(1), 2).unwrap();
        assert_eq!(result.next_player, Some(PlayerIndex(2)));

        // Player 2 rolls; rotation goes 2 -> 0, then 0 -> 2, never 1
        let (next, result) = resolve_turn(&next, PlayerIndex(2), 1).unwrap();
        assert_eq!(result.next_player, Some(PlayerIndex(0)));
        let (_, result) = resolve_turn(&next, PlayerIndex(0), 1).unwrap();
        assert_eq!(result.next_player, Some(PlayerIndex(2)));
    }

    #[test]
    fn test_game_over_names_loser() {
        let mut state = at(3, 2, 96);
        // Player 1 already finished first
        state.players[1].position = FINAL_SQUARE;
        state.players[1].finished = true;
        state.players[1].finish_rank = Some(1);
        state.finish_order.push(PlayerIndex(1));

        let (next, result) = resolve_turn(&state, PlayerIndex(2), 4).unwrap();

        assert_eq!(result.event, TurnEvent::GameOver { loser: PlayerIndex(0) });
        assert_eq!(result.next_player, None);
        assert_eq!(next.status, GameStatus::Ended);
        assert_eq!(next.finish_order, vec![PlayerIndex(1), PlayerIndex(2)]);
        assert_eq!(next.players[2].finish_rank, Some(2));
        assert_eq!(next.loser(), Some(PlayerIndex(0)));
        assert!(next.is_consistent());
    }

    #[test]
    fn test_two_player_game_ends_on_first_finish() {
        let state = at(2, 1, 94);
        let (next, result) = resolve_turn(&state, PlayerIndex(1), 6).unwrap();

        assert_eq!(result.event, TurnEvent::GameOver { loser: PlayerIndex(0) });
        assert!(next.is_ended());
    }

    #[test]
    fn test_rejects_after_game_over() {
        let mut state = at(2, 0, 10);
        state.status = GameStatus::Ended;
        assert_eq!(resolve_turn(&state, PlayerIndex(0), 3), Err(TurnError::GameEnded));
    }

    #[test]
    fn test_rejects_wrong_player() {
        let state = at(3, 0, 10);
        assert_eq!(
            resolve_turn(&state, PlayerIndex(2), 3),
            Err(TurnError::NotPlayersTurn { expected: PlayerIndex(0), got: PlayerIndex(2) })
        );
        assert_eq!(
            resolve_turn(&state, PlayerIndex(7), 3),
            Err(TurnError::UnknownPlayer(PlayerIndex(7)))
        );
    }

    #[test]
    fn test_rejects_finished_player() {
        let mut state = at(3, 0, FINAL_SQUARE);
        state.players[0].finished = true;
        assert_eq!(
            resolve_turn(&state, PlayerIndex(0), 3),
            Err(TurnError::PlayerFinished(PlayerIndex(0)))
        );
    }

    #[test]
    fn test_rejects_bad_roll() {
        let state = at(2, 0, 0);
        assert_eq!(resolve_turn(&state, PlayerIndex(0), 0), Err(TurnError::InvalidRoll(0)));
        assert_eq!(resolve_turn(&state, PlayerIndex(0), 7), Err(TurnError::InvalidRoll(7)));
    }

    #[test]
    fn test_input_state_untouched() {
        let state = at(2, 0, 13);
        let before = state.clone();
        let _ = resolve_turn(&state, PlayerIndex(0), 4).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_roll_every_square() {
        for from in 0..FINAL_SQUARE {
            for roll in 1..=DIE_FACES {
                let movement = apply_roll(from, roll);
                assert!(movement.final_square() <= FINAL_SQUARE);
                if from + roll > FINAL_SQUARE {
                    assert_eq!(movement, Movement::Overshot { at: from });
                }
            }
        }
    }
}
