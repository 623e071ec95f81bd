//! Session Module
//!
//! Everything between the rules engine and a front-end: configuration,
//! the session that owns the game state, render snapshots, and a shared
//! handle enforcing one roll at a time.

pub mod config;
pub mod game;
pub mod shared;
pub mod snapshot;

pub use config::{ConfigError, SessionConfig, SUPPORTED_PLAYER_COUNTS};
pub use game::{GameSession, SessionError};
pub use shared::SharedSession;
pub use snapshot::{PlayerView, Snapshot};
