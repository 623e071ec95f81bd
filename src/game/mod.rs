//! Game Logic Module
//!
//! The rules of the game. Synchronous and free of I/O.
//!
//! ## Module Structure
//!
//! - `board`: Special squares and the serpentine grid layout
//! - `die`: Die trait, entropy-backed and seeded dice
//! - `state`: Player and game state
//! - `events`: What a roll did, for display
//! - `rotation`: Next-player scan and standings
//! - `turn`: Turn resolution

pub mod board;
pub mod die;
pub mod state;
pub mod events;
pub mod rotation;
pub mod turn;

// Re-export key types
pub use board::{Square, SquareKind, FINAL_SQUARE, destination_of, cell_number};
pub use die::{Die, DieFace, EntropyDie, SeededDie};
pub use state::{GameState, GameStatus, PlayerIndex, PlayerState};
pub use events::{Movement, TurnEvent, TurnResult};
pub use rotation::Standing;
pub use turn::{resolve_turn, TurnError};
