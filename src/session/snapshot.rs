//! Render Snapshots
//!
//! Read-only view of a session handed to the presentation layer after each
//! roll. Serialized as JSON so a non-Rust front-end can consume it.

use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::board::{cell_coords, Square};
use crate::game::die::DieFace;
use crate::game::events::TurnEvent;
use crate::game::rotation::{standings, Standing};
use crate::game::state::{GameState, GameStatus, PlayerIndex, PlayerState};

/// Message shown before anyone has rolled.
pub const OPENING_MESSAGE: &str = "Roll the dice to start!";

/// One player's token as the board should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Seat number.
    pub index: PlayerIndex,
    /// Square the token is on.
    pub position: Square,
    /// Grid cell `(row, col)`, `None` while off the board.
    pub cell: Option<(u8, u8)>,
    /// Reached the final square.
    pub finished: bool,
    /// Finishing place.
    pub finish_rank: Option<u32>,
}

impl From<&PlayerState> for PlayerView {
    fn from(player: &PlayerState) -> Self {
        Self {
            index: player.index,
            position: player.position,
            cell: cell_coords(player.position),
            finished: player.finished,
            finish_rank: player.finish_rank,
        }
    }
}

/// Committed game state plus display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session this snapshot belongs to.
    pub session_id: Uuid,
    /// Rolls resolved so far.
    pub turn: u32,
    /// In progress or ended.
    pub status: GameStatus,
    /// Who rolls next, `None` once the game is over.
    pub current_player: Option<PlayerIndex>,
    /// Every token.
    pub players: Vec<PlayerView>,
    /// Players in the order they finished.
    pub finish_order: Vec<PlayerIndex>,
    /// Standings table.
    pub standings: Vec<Standing>,
    /// Face shown on the die.
    pub last_roll: Option<DieFace>,
    /// Headline of the last roll.
    pub last_event: Option<TurnEvent>,
    /// Display text for the last roll.
    pub message: String,
    /// Hex-encoded state hash.
    pub state_hash: String,
}

impl Snapshot {
    /// Build a snapshot of `state`.
    pub fn capture(session_id: Uuid, state: &GameState) -> Self {
        let current_player = match state.status {
            GameStatus::InProgress => Some(state.current_player),
            GameStatus::Ended => None,
        };

        Self {
            session_id,
            turn: state.turn,
            status: state.status,
            current_player,
            players: state.players.iter().map(PlayerView::from).collect(),
            finish_order: state.finish_order.clone(),
            standings: standings(state),
            last_roll: state.last_roll,
            last_event: state.last_event,
            message: message_for(state.last_event.as_ref()),
            state_hash: hex::encode(state.compute_hash()),
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Display text for the most recent event.
pub fn message_for(event: Option<&TurnEvent>) -> String {
    match event {
        Some(event) => event.to_string(),
        None => OPENING_MESSAGE.to_string(),
    }
}
