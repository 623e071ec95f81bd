//! State Hashing
//!
//! Deterministic fingerprint of a game state. Snapshots carry it so a
//! renderer can tell whether anything changed without diffing every field.

use sha2::{Digest, Sha256};

/// 32-byte SHA-256 fingerprint.
pub type StateHash = [u8; 32];

const DOMAIN: &[u8] = b"SNAKES_LADDERS_STATE_V1";

/// Builds a [`StateHash`] one board fact at a time.
///
/// Every value is written with a one-byte tag and a fixed width, so two
/// states only collide if they feed the same facts in the same order.
pub struct StateHasher {
    digest: Sha256,
}

impl StateHasher {
    /// Start fingerprinting the state reached after `turn` rolls.
    pub fn at_turn(turn: u32) -> Self {
        let mut digest = Sha256::new();
        digest.update(DOMAIN);
        digest.update(turn.to_le_bytes());
        Self { digest }
    }

    /// Seat count or a seat index.
    pub fn seat(&mut self, index: usize) -> &mut Self {
        self.tagged(b's', &(index as u64).to_le_bytes())
    }

    /// A board square (0 is the start).
    pub fn square(&mut self, square: u8) -> &mut Self {
        self.tagged(b'q', &[square])
    }

    /// A yes/no flag such as "finished" or "game over".
    pub fn flag(&mut self, on: bool) -> &mut Self {
        self.tagged(b'f', &[u8::from(on)])
    }

    /// Finishing place, if any.
    pub fn rank(&mut self, rank: Option<u32>) -> &mut Self {
        self.tagged(b'r', &rank.unwrap_or(0).to_le_bytes())
    }

    /// Last die face, if anyone has rolled.
    pub fn roll(&mut self, face: Option<u8>) -> &mut Self {
        self.tagged(b'd', &[face.unwrap_or(0)])
    }

    fn tagged(&mut self, tag: u8, bytes: &[u8]) -> &mut Self {
        self.digest.update([tag]);
        self.digest.update(bytes);
        self
    }

    /// Finish and return the fingerprint.
    pub fn finish(self) -> StateHash {
        self.digest.finalize().into()
    }
}
