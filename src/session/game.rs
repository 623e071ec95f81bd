//! Game Session
//!
//! Owns the state of one playthrough and the die it is played with. The
//! only mutating operation is [`GameSession::roll_for_current_player`].

use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::game::die::{Die, EntropyDie, SeededDie};
use crate::game::events::{TurnEvent, TurnResult};
use crate::game::rotation::{standings, Standing};
use crate::game::state::GameState;
use crate::game::turn::{resolve_turn, TurnError};
use crate::session::config::{ConfigError, SessionConfig};
use crate::session::snapshot::{message_for, Snapshot};

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Fewer than two players were requested.
    #[error("Invalid player count: need at least 2, got {0}")]
    InvalidPlayerCount(usize),

    /// The session could not be configured.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The rules engine refused the turn.
    #[error("Turn failed: {0}")]
    Turn(#[from] TurnError),
}

/// One game on one device.
#[derive(Debug)]
pub struct GameSession {
    /// Unique session identifier.
    id: Uuid,
    /// Committed game state.
    state: GameState,
    /// Die used for every roll.
    die: Box<dyn Die + Send + Sync>,
    /// Every resolved roll, oldest first.
    history: Vec<TurnResult>,
}

impl GameSession {
    /// Start a session for `player_count` players with an OS-entropy die.
    pub fn new(player_count: usize) -> Result<Self, SessionError> {
        Self::with_die(player_count, Box::new(EntropyDie::new()))
    }

    /// Start a session from configuration.
    ///
    /// A seeded die is used when the config carries a seed, otherwise one
    /// drawing from OS entropy.
    pub fn start(config: &SessionConfig) -> Result<Self, SessionError> {
        let die: Box<dyn Die + Send + Sync> = match config.seed {
            Some(seed) => Box::new(SeededDie::new(seed)),
            None => Box::new(EntropyDie::new()),
        };
        Self::with_die(config.player_count, die)
    }

    /// Start a session with a specific die.
    pub fn with_die(player_count: usize, die: Box<dyn Die + Send + Sync>) -> Result<Self, SessionError> {
        SessionConfig::with_players(player_count)
            .validate()
            .map_err(|err| {
                warn!(players = player_count, %err, "Rejected session configuration");
                match err {
                    ConfigError::TooFewPlayers(n) => SessionError::InvalidPlayerCount(n),
                    other => SessionError::Config(other),
                }
            })?;

        let id = Uuid::new_v4();
        info!(session = %id, players = player_count, "Session started");

        Ok(Self {
            id,
            state: GameState::new(player_count),
            die,
            history: Vec::new(),
        })
    }

    /// Roll for whoever's turn it is.
    ///
    /// Returns `Ok(None)` without touching anything once the game has ended.
    /// Otherwise the new state is committed in one step and the turn result
    /// returned for the caller to render. An engine error leaves the state
    /// exactly as it was.
    #[instrument(skip(self), fields(session = %self.id, turn = self.state.turn))]
    pub fn roll_for_current_player(&mut self) -> Result<Option<TurnResult>, SessionError> {
        if self.state.is_ended() {
            debug!("Roll ignored, game already over");
            return Ok(None);
        }

        let player = self.state.current_player;
        let roll = self.die.roll();

        let (next, result) = resolve_turn(&self.state, player, roll).map_err(|err| {
            error!(%player, roll, %err, "Turn resolution failed");
            err
        })?;

        self.state = next;
        self.history.push(result);
        log_turn(&result);

        Ok(Some(result))
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Committed game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Snapshot for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.id, &self.state)
    }

    /// Every roll so far, oldest first.
    pub fn history(&self) -> &[TurnResult] {
        &self.history
    }

    /// Current standings.
    pub fn standings(&self) -> Vec<Standing> {
        standings(&self.state)
    }

    /// Display text for the last roll.
    pub fn message(&self) -> String {
        message_for(self.state.last_event.as_ref())
    }

    /// Check if the game has ended.
    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }
}

fn log_turn(result: &TurnResult) {
    match result.event {
        TurnEvent::Finished { player, rank } => {
            info!(%player, rank, "Player finished");
        }
        TurnEvent::GameOver { loser } => {
            info!(%loser, "Game over");
        }
        _ => {
            debug!(
                player = %result.player,
                roll = result.roll,
                from = result.from,
                to = result.to(),
                "{}",
                result.event
            );
        }
    }
}
