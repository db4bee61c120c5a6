//! Session configuration.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Environment variable holding a JSON-encoded `SessionOptions`.
pub const OPTIONS_ENV_VAR: &str = "CHESS_SESSION_OPTIONS";

/// Tunable session behaviour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Refuse every proposal once the game has ended. When off, the winner
    /// keeps the move after the game ends, as older clients expect.
    pub reject_after_game_over: bool,
    /// Maximum level the binary's logger prints.
    pub log_level: LevelFilter,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            reject_after_game_over: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl SessionOptions {
    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read options from `CHESS_SESSION_OPTIONS`; defaults when it is unset.
    pub fn from_env() -> Result<Self, serde_json::Error> {
        match std::env::var(OPTIONS_ENV_VAR) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Set a single option by name. Names are case-insensitive and may use
    /// spaces, dashes or underscores. Returns false for unknown names or
    /// unparseable values, leaving the options unchanged.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "rejectaftergameover" => match value.map(str::trim) {
                None => {
                    self.reject_after_game_over = true;
                    true
                }
                Some(v) => match v.parse::<bool>() {
                    Ok(flag) => {
                        self.reject_after_game_over = flag;
                        true
                    }
                    Err(_) => false,
                },
            },
            "loglevel" => match value.and_then(|v| v.trim().parse::<LevelFilter>().ok()) {
                Some(level) => {
                    self.log_level = level;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}
