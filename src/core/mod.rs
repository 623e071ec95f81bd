//! Core deterministic primitives.
//!
//! Randomness and hashing shared by the game rules and the session layer.

pub mod rng;
pub mod hash;

// Re-export core types
pub use rng::DeterministicRng;
pub use hash::{StateHash, StateHasher};
