//! Property-based tests for turn resolution.
//!
//! Drives whole games from arbitrary roll sequences and checks the state
//! invariants after every turn.

use proptest::prelude::*;

use snakes_ladders::game::board::{destination_of, FINAL_SQUARE, SPECIAL_SQUARES};
use snakes_ladders::game::turn::apply_roll;
use snakes_ladders::{resolve_turn, GameState, GameStatus, Movement, TurnEvent};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// A single roll never carries a token past the final square.
    #[test]
    fn prop_roll_never_passes_final(from in 0u8..FINAL_SQUARE, roll in 1u8..=6) {
        let movement = apply_roll(from, roll);
        prop_assert!(movement.final_square() <= FINAL_SQUARE);

        if from + roll > FINAL_SQUARE {
            prop_assert_eq!(movement, Movement::Overshot { at: from });
        } else {
            // Landing square resolves in one jump at most
            prop_assert_eq!(destination_of(movement.final_square()), None);
        }
    }

    /// Whole games keep every invariant after every turn.
    #[test]
    fn prop_games_stay_consistent(
        player_count in 2usize..7,
        rolls in prop::collection::vec(1u8..=6, 0..600),
    ) {
        let mut state = GameState::new(player_count);

        for roll in rolls {
            if state.is_ended() {
                // Further rolls are refused and change nothing
                let before = state.clone();
                prop_assert!(resolve_turn(&state, state.current_player, roll).is_err());
                prop_assert_eq!(&state, &before);
                continue;
            }

            let player = state.current_player;
            let finished_before = state.finish_order.clone();
            let (next, result) = resolve_turn(&state, player, roll).unwrap();

            prop_assert!(next.players.iter().all(|p| p.position <= FINAL_SQUARE));
            prop_assert!(next.is_consistent());
            prop_assert!(next.finish_order.starts_with(&finished_before));

            // Finished players never move again
            for idx in &finished_before {
                prop_assert_eq!(next.players[idx.get()].position, FINAL_SQUARE);
            }

            match next.status {
                GameStatus::InProgress => {
                    prop_assert!(next.players[next.current_player.get()].is_active());
                    prop_assert_eq!(result.next_player, Some(next.current_player));
                }
                GameStatus::Ended => {
                    prop_assert_eq!(next.finish_order.len(), player_count - 1);
                    let loser = next.loser().unwrap();
                    prop_assert_eq!(result.event, TurnEvent::GameOver { loser });
                    prop_assert!(!next.finish_order.contains(&loser));
                }
            }

            state = next;
        }
    }
}

#[test]
fn test_table_has_no_chains() {
    for (from, to) in SPECIAL_SQUARES {
        assert_ne!(from, to);
        assert_eq!(destination_of(to), None, "{from} -> {to} chains");
    }
}
