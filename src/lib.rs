//! # Snakes & Ladders
//!
//! Turn resolution engine for a hot-seat Snakes & Ladders game.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SNAKES & LADDERS                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── rng.rs      - Xorshift128+ PRNG for seeded dice         │
//! │  └── hash.rs     - State hashing for snapshots               │
//! │                                                              │
//! │  game/           - Rules (synchronous, no I/O)               │
//! │  ├── board.rs    - Ladders, snakes, serpentine grid          │
//! │  ├── die.rs      - Entropy and seeded dice                   │
//! │  ├── state.rs    - Player and game state                     │
//! │  ├── events.rs   - What a roll did                           │
//! │  ├── rotation.rs - Next player and standings                 │
//! │  └── turn.rs     - Turn resolution                           │
//! │                                                              │
//! │  session/        - Owning the game for a front-end           │
//! │  ├── config.rs   - Player count and seeding                  │
//! │  ├── game.rs     - Session and the roll operation            │
//! │  ├── snapshot.rs - Render snapshots                          │
//! │  └── shared.rs   - Async handle with a roll gate             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - A roll that would pass square 100 is wasted; there is no bounce-back.
//! - Landing on a ladder foot climbs, landing on a snake head slides.
//! - Finished players are skipped in the rotation.
//! - When only one player has not finished, the game ends and that player
//!   loses without rolling again.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod session;

// Re-export commonly used types
pub use game::board::{Square, FINAL_SQUARE};
pub use game::events::{Movement, TurnEvent, TurnResult};
pub use game::state::{GameState, GameStatus, PlayerIndex, PlayerState};
pub use game::turn::{resolve_turn, TurnError};
pub use session::{GameSession, SessionConfig, SessionError, SharedSession, Snapshot};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
