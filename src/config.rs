//! Runtime configuration for legality and check queries.

use tracing::warn;

use crate::errors::{ArbiterError, ArbiterResult};
use crate::game_state::chess_rules::{
    DEFAULT_MAX_QUERY_DEPTH, MAX_CONFIGURABLE_QUERY_DEPTH, MIN_CONFIGURABLE_QUERY_DEPTH,
};

/// Environment variable read by [`ArbiterConfig::from_env`].
pub const MAX_QUERY_DEPTH_ENV: &str = "CHESS_ARBITER_MAX_QUERY_DEPTH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArbiterConfig {
    /// Speculative queries at or beyond this depth answer "legal" / "not in check".
    pub max_query_depth: u8,
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        Self {
            max_query_depth: DEFAULT_MAX_QUERY_DEPTH,
        }
    }
}

impl ArbiterConfig {
    /// Defaults, overridden by the environment when it holds a valid value.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(MAX_QUERY_DEPTH_ENV) {
            if let Err(e) = config.set_option("max_query_depth", &value) {
                warn!("ignoring {MAX_QUERY_DEPTH_ENV}: {e}");
            }
        }
        config
    }

    /// Sets one option by name.
    pub fn set_option(&mut self, name: &str, value: &str) -> ArbiterResult<()> {
        let invalid = || ArbiterError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        match name {
            "max_query_depth" => {
                let depth = value.trim().parse::<u8>().map_err(|_| invalid())?;
                if !(MIN_CONFIGURABLE_QUERY_DEPTH..=MAX_CONFIGURABLE_QUERY_DEPTH).contains(&depth) {
                    return Err(invalid());
                }
                self.max_query_depth = depth;
                Ok(())
            }
            _ => Err(invalid()),
        }
    }
}
