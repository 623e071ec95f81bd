//! Dice
//!
//! A die yields one face in 1..=6 per roll, independent of earlier rolls.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::rng::DeterministicRng;

/// Face value of a single roll.
pub type DieFace = u8;

/// Number of faces on the die.
pub const DIE_FACES: DieFace = 6;

/// Source of die rolls for a session.
pub trait Die: fmt::Debug {
    /// Roll once. Always returns a value in `1..=DIE_FACES`.
    fn roll(&mut self) -> DieFace;
}

/// Die backed by operating system entropy. Used for real play.
#[derive(Debug)]
pub struct EntropyDie {
    rng: StdRng,
}

impl EntropyDie {
    /// Seed a new die from the OS entropy source.
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }
}

impl Default for EntropyDie {
    fn default() -> Self {
        Self::new()
    }
}

impl Die for EntropyDie {
    fn roll(&mut self) -> DieFace {
        self.rng.gen_range(1..=DIE_FACES)
    }
}

/// Reproducible die: the same seed gives the same sequence of faces.
#[derive(Clone, Debug)]
pub struct SeededDie {
    seed: u64,
    rng: DeterministicRng,
}

impl SeededDie {
    /// Create a die from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: DeterministicRng::new(seed),
        }
    }

    /// Seed this die was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Die for SeededDie {
    fn roll(&mut self) -> DieFace {
        self.rng.next_int_range(1, u32::from(DIE_FACES)) as DieFace
    }
}
