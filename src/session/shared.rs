//! Shared Session Handle
//!
//! Lets an async presentation layer drive a session from several tasks
//! while keeping the one-roll-at-a-time ordering: after each roll the gate
//! stays closed until the front-end reports the event as settled.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::game::events::TurnResult;
use crate::session::game::{GameSession, SessionError};
use crate::session::snapshot::Snapshot;

#[derive(Debug)]
struct GatedSession {
    session: GameSession,
    /// A roll has been handed out and not yet settled.
    awaiting_settle: bool,
}

/// Cloneable handle to a session behind an async lock.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<RwLock<GatedSession>>,
}

impl SharedSession {
    /// Wrap a session.
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(GatedSession {
                session,
                awaiting_settle: false,
            })),
        }
    }

    /// Roll for the current player if the previous roll has settled.
    ///
    /// Holds the write lock across the whole roll, so no reader ever sees
    /// a half-applied turn. Returns `Ok(None)` when the gate is closed or
    /// the game is over.
    pub async fn roll(&self) -> Result<Option<TurnResult>, SessionError> {
        let mut guard = self.inner.write().await;
        if guard.awaiting_settle {
            debug!(session = %guard.session.id(), "Roll ignored, previous roll not settled");
            return Ok(None);
        }

        let result = guard.session.roll_for_current_player()?;
        if result.is_some() {
            guard.awaiting_settle = true;
        }
        Ok(result)
    }

    /// Report that the last roll has finished playing out.
    pub async fn settle(&self) {
        self.inner.write().await.awaiting_settle = false;
    }

    /// Is a new roll currently accepted?
    pub async fn is_settled(&self) -> bool {
        !self.inner.read().await.awaiting_settle
    }

    /// Snapshot of the committed state.
    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.session.snapshot()
    }

    /// Check if the game has ended.
    pub async fn is_ended(&self) -> bool {
        self.inner.read().await.session.is_ended()
    }
}
