//! Turn Events
//!
//! Plain-data description of what a roll did, for the presentation layer
//! to render and animate.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::game::board::{Square, FINAL_SQUARE};
use crate::game::die::DieFace;
use crate::game::state::PlayerIndex;

/// What the board did to the rolling player's token.
///
/// Kept alongside the headline [`TurnEvent`] so an animation can still play
/// the ladder climb that ended in a finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Movement {
    /// Walked to a plain square
    Moved {
        /// Square landed on.
        to: Square,
    },
    /// Roll would pass the final square; token stays put
    Overshot {
        /// Square the token stays on.
        at: Square,
    },
    /// Landed on a ladder foot and climbed
    Climbed {
        /// Ladder foot.
        from: Square,
        /// Ladder top.
        to: Square,
    },
    /// Landed on a snake head and slid down
    Bitten {
        /// Snake head.
        from: Square,
        /// Snake tail.
        to: Square,
    },
}

impl Movement {
    /// Square the token ends on.
    pub fn final_square(self) -> Square {
        match self {
            Movement::Moved { to } => to,
            Movement::Overshot { at } => at,
            Movement::Climbed { to, .. } => to,
            Movement::Bitten { to, .. } => to,
        }
    }
}

/// Headline outcome of one roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnEvent {
    /// Player walked to a plain square
    Moved {
        /// Who rolled.
        player: PlayerIndex,
        /// Square landed on.
        to: Square,
    },

    /// Roll would pass the final square, no movement
    Overshot {
        /// Who rolled.
        player: PlayerIndex,
        /// Square the token stays on.
        at: Square,
        /// The wasted roll.
        roll: DieFace,
    },

    /// Player climbed a ladder
    Climbed {
        /// Who rolled.
        player: PlayerIndex,
        /// Ladder foot.
        from: Square,
        /// Ladder top.
        to: Square,
    },

    /// Player was bitten by a snake
    Bitten {
        /// Who rolled.
        player: PlayerIndex,
        /// Snake head.
        from: Square,
        /// Snake tail.
        to: Square,
    },

    /// Player reached the final square
    Finished {
        /// Who finished.
        player: PlayerIndex,
        /// Finishing place, 1 for the winner.
        rank: u32,
    },

    /// Only one player is left; they lose
    GameOver {
        /// The player left on the board.
        loser: PlayerIndex,
    },
}

impl TurnEvent {
    /// Headline event for a movement that did not finish the player.
    pub fn from_movement(player: PlayerIndex, roll: DieFace, movement: Movement) -> Self {
        match movement {
            Movement::Moved { to } => TurnEvent::Moved { player, to },
            Movement::Overshot { at } => TurnEvent::Overshot { player, at, roll },
            Movement::Climbed { from, to } => TurnEvent::Climbed { player, from, to },
            Movement::Bitten { from, to } => TurnEvent::Bitten { player, from, to },
        }
    }

    /// Player the event is about.
    pub fn player(&self) -> PlayerIndex {
        match *self {
            TurnEvent::Moved { player, .. }
            | TurnEvent::Overshot { player, .. }
            | TurnEvent::Climbed { player, .. }
            | TurnEvent::Bitten { player, .. }
            | TurnEvent::Finished { player, .. } => player,
            TurnEvent::GameOver { loser } => loser,
        }
    }

    /// Does this event end the game?
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnEvent::GameOver { .. })
    }
}

impl fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEvent::Moved { player, to } => {
                write!(f, "{player} moved to position {to}")
            }
            TurnEvent::Overshot { player, .. } => {
                write!(f, "{player} needs an exact number to reach {FINAL_SQUARE}. Try again!")
            }
            TurnEvent::Climbed { player, from, to } => {
                write!(f, "{player} climbed a ladder from {from} to {to}!")
            }
            TurnEvent::Bitten { player, from, to } => {
                write!(f, "{player} was bitten by a snake and moved from {from} to {to}!")
            }
            TurnEvent::Finished { player, rank: 1 } => {
                write!(f, "{player} wins the game!")
            }
            TurnEvent::Finished { player, rank } => {
                write!(f, "{player} finished in place {rank}!")
            }
            TurnEvent::GameOver { loser } => {
                write!(f, "Game over! {loser} is the last one on the board.")
            }
        }
    }
}

/// Everything one resolved roll produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Who rolled
    pub player: PlayerIndex,
    /// Face rolled
    pub roll: DieFace,
    /// Square before the roll
    pub from: Square,
    /// What the board did
    pub movement: Movement,
    /// Headline event (also stored as the state's `last_event`)
    pub event: TurnEvent,
    /// Whose turn is next, `None` once the game has ended
    pub next_player: Option<PlayerIndex>,
}

impl TurnResult {
    /// Square the rolling player ends on.
    pub fn to(&self) -> Square {
        self.movement.final_square()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let p = PlayerIndex(0);
        assert_eq!(
            TurnEvent::Moved { player: p, to: 12 }.to_string(),
            "Player 1 moved to position 12"
        );
        assert_eq!(
            TurnEvent::Climbed { player: p, from: 4, to: 14 }.to_string(),
            "Player 1 climbed a ladder from 4 to 14!"
        );
        assert_eq!(
            TurnEvent::Bitten { player: PlayerIndex(1), from: 17, to: 7 }.to_string(),
            "Player 2 was bitten by a snake and moved from 17 to 7!"
        );
        assert_eq!(
            TurnEvent::Overshot { player: p, at: 97, roll: 5 }.to_string(),
            "Player 1 needs an exact number to reach 100. Try again!"
        );
        assert_eq!(
            TurnEvent::Finished { player: PlayerIndex(2), rank: 1 }.to_string(),
            "Player 3 wins the game!"
        );
        assert_eq!(
            TurnEvent::Finished { player: PlayerIndex(2), rank: 2 }.to_string(),
            "Player 3 finished in place 2!"
        );
    }

    #[test]
    fn test_from_movement() {
        let p = PlayerIndex(1);
        assert_eq!(
            TurnEvent::from_movement(p, 4, Movement::Climbed { from: 4, to: 14 }),
            TurnEvent::Climbed { player: p, from: 4, to: 14 }
        );
        assert_eq!(
            TurnEvent::from_movement(p, 5, Movement::Overshot { at: 97 }),
            TurnEvent::Overshot { player: p, at: 97, roll: 5 }
        );
    }

    #[test]
    fn test_event_player() {
        assert_eq!(TurnEvent::GameOver { loser: PlayerIndex(2) }.player(), PlayerIndex(2));
        assert!(TurnEvent::GameOver { loser: PlayerIndex(2) }.is_game_over());
        assert!(!TurnEvent::Finished { player: PlayerIndex(0), rank: 1 }.is_game_over());
    }

    #[test]
    fn test_event_json_shape() {
        let event = TurnEvent::Climbed { player: PlayerIndex(0), from: 4, to: 14 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"climbed","player":0,"from":4,"to":14}"#);
    }
}
