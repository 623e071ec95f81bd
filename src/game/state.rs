//! Game State Definitions
//!
//! Everything the engine reads and writes for one playthrough.

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::hash::{StateHash, StateHasher};
use crate::game::board::{Square, FINAL_SQUARE, START_SQUARE};
use crate::game::die::DieFace;
use crate::game::events::TurnEvent;

/// Fewest players a game can have.
pub const MIN_PLAYERS: usize = 2;

// =============================================================================
// PLAYER INDEX
// =============================================================================

/// Zero-based seat number at the shared device.
///
/// Displays one-based ("Player 1") the way the game screen shows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerIndex(pub usize);

impl PlayerIndex {
    /// Raw zero-based index.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Seat after this one, wrapping at `player_count`.
    #[inline]
    pub fn next(self, player_count: usize) -> Self {
        Self((self.0 + 1) % player_count)
    }
}

impl fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

// =============================================================================
// PLAYER STATE
// =============================================================================

/// State of a single player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Seat number
    pub index: PlayerIndex,

    /// Current square (0 = not started, 100 = finished)
    pub position: Square,

    /// Has this player reached the final square?
    pub finished: bool,

    /// 1-based finishing place, set on reaching the final square
    pub finish_rank: Option<u32>,
}

impl PlayerState {
    /// Create a player waiting off the board.
    pub fn new(index: PlayerIndex) -> Self {
        Self {
            index,
            position: START_SQUARE,
            finished: false,
            finish_rank: None,
        }
    }

    /// Is this player still taking turns?
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.finished
    }
}

// =============================================================================
// GAME STATUS
// =============================================================================

/// Whether rolls are still accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Players are still rolling
    #[default]
    InProgress,
    /// Everyone but one player has finished
    Ended,
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All players, in seat order
    pub players: Vec<PlayerState>,

    /// Whose turn it is
    pub current_player: PlayerIndex,

    /// Players in the order they reached the final square
    pub finish_order: Vec<PlayerIndex>,

    /// In progress or ended
    pub status: GameStatus,

    /// Headline outcome of the most recent roll
    pub last_event: Option<TurnEvent>,

    /// Face shown by the most recent roll
    pub last_roll: Option<DieFace>,

    /// Number of rolls resolved so far
    pub turn: u32,
}

impl GameState {
    /// Create a fresh game. Callers validate `player_count >= MIN_PLAYERS`.
    pub fn new(player_count: usize) -> Self {
        Self {
            players: (0..player_count).map(|i| PlayerState::new(PlayerIndex(i))).collect(),
            current_player: PlayerIndex(0),
            finish_order: Vec::new(),
            status: GameStatus::InProgress,
            last_event: None,
            last_roll: None,
            turn: 0,
        }
    }

    /// Number of seats.
    #[inline]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by index.
    pub fn player(&self, index: PlayerIndex) -> Option<&PlayerState> {
        self.players.get(index.get())
    }

    /// Get a player mutably by index.
    pub fn player_mut(&mut self, index: PlayerIndex) -> Option<&mut PlayerState> {
        self.players.get_mut(index.get())
    }

    /// Current position of every player, in seat order.
    pub fn positions(&self) -> Vec<Square> {
        self.players.iter().map(|p| p.position).collect()
    }

    /// Players standing on `square`, for drawing tokens.
    pub fn players_on(&self, square: Square) -> Vec<PlayerIndex> {
        self.players
            .iter()
            .filter(|p| p.position == square)
            .map(|p| p.index)
            .collect()
    }

    /// Check if the game has ended.
    #[inline]
    pub fn is_ended(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Count of players who have not finished.
    pub fn active_player_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// The player left on the board once the game has ended.
    pub fn loser(&self) -> Option<PlayerIndex> {
        if !self.is_ended() {
            return None;
        }
        crate::game::rotation::last_standing(&self.players)
    }

    /// Check the finish-order invariants.
    ///
    /// Every listed player is finished on the final square with the matching
    /// rank, no one is listed twice, and `Ended` holds exactly when all but
    /// one player has finished.
    pub fn is_consistent(&self) -> bool {
        let listed_ok = self.finish_order.iter().enumerate().all(|(i, idx)| {
            self.player(*idx).is_some_and(|p| {
                p.finished && p.position == FINAL_SQUARE && p.finish_rank == Some(i as u32 + 1)
            })
        });
        let finished_count = self.players.iter().filter(|p| p.finished).count();
        let mut unique = self.finish_order.clone();
        unique.sort_unstable();
        unique.dedup();

        listed_ok
            && unique.len() == self.finish_order.len()
            && finished_count == self.finish_order.len()
            && self.is_ended() == (finished_count + 1 == self.player_count())
    }

    /// Compute hash of current state.
    pub fn compute_hash(&self) -> StateHash {
        let mut hasher = StateHasher::at_turn(self.turn);
        hasher.seat(self.players.len());
        for player in &self.players {
            hasher
                .square(player.position)
                .flag(player.finished)
                .rank(player.finish_rank);
        }
        hasher.seat(self.current_player.get());
        for idx in &self.finish_order {
            hasher.seat(idx.get());
        }
        hasher.flag(self.is_ended()).roll(self.last_roll);
        hasher.finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
