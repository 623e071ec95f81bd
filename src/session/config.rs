//! Session Configuration
//!
//! Player count and die seeding, with defaults and environment overrides.

use thiserror::Error;

use crate::game::state::MIN_PLAYERS;

/// Player counts offered by the selection screen.
pub const SUPPORTED_PLAYER_COUNTS: [usize; 3] = [2, 3, 4];

/// Environment variable holding the player count.
pub const PLAYERS_ENV: &str = "SNAKES_PLAYERS";

/// Environment variable holding an optional die seed.
pub const SEED_ENV: &str = "SNAKES_SEED";

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of players sharing the device.
    pub player_count: usize,
    /// Seed for a reproducible die. `None` rolls from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Config for `player_count` players with an entropy die.
    pub fn with_players(player_count: usize) -> Self {
        Self {
            player_count,
            ..Default::default()
        }
    }

    /// Use a seeded die.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create config from environment variables.
    ///
    /// Unset variables keep their defaults; set but unparsable ones are
    /// an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PLAYERS_ENV) {
            config.player_count = parse_var(PLAYERS_ENV, &raw)?;
        }
        if let Some(raw) = lookup(SEED_ENV) {
            config.seed = Some(parse_var(SEED_ENV, &raw)?);
        }

        Ok(config)
    }

    /// Check the player count is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(self.player_count));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    })
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment variable could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },

    /// Fewer than two players.
    #[error("need at least 2 players, got {0}")]
    TooFewPlayers(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.player_count, 2);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = SessionConfig::from_lookup(lookup(&[
            (PLAYERS_ENV, "4"),
            (SEED_ENV, " 99 "),
        ]))
        .unwrap();
        assert_eq!(config, SessionConfig::with_players(4).seeded(99));
    }

    #[test]
    fn test_bad_env_value() {
        let err = SessionConfig::from_lookup(lookup(&[(PLAYERS_ENV, "many")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { var: PLAYERS_ENV, value: "many".to_string() }
        );
    }

    #[test]
    fn test_validate() {
        assert!(SessionConfig::with_players(2).validate().is_ok());
        assert!(SessionConfig::with_players(7).validate().is_ok());
        assert_eq!(
            SessionConfig::with_players(1).validate(),
            Err(ConfigError::TooFewPlayers(1))
        );
    }

    #[test]
    fn test_supported_counts_are_valid() {
        for count in SUPPORTED_PLAYER_COUNTS {
            assert!(SessionConfig::with_players(count).validate().is_ok());
        }
    }
}
