//! Environment-driven settings for the server and the game rules

use crate::types::{GameConfig, MIN_PARTICIPANTS};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 6574;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load server config from environment variables
    /// HUNT_PORT and HUNT_STATIC_DIR, both optional
    pub fn from_env() -> Self {
        let port = parse_env("HUNT_PORT").unwrap_or(DEFAULT_PORT);
        let static_dir = std::env::var("HUNT_STATIC_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        Self {
            port,
            static_dir: PathBuf::from(static_dir),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl GameConfig {
    /// Load game limits from HUNT_MAX_PARTICIPANTS and HUNT_MAX_NAME_CHARS
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_participants = match parse_env::<usize>("HUNT_MAX_PARTICIPANTS") {
            Some(n) if n >= MIN_PARTICIPANTS => n,
            Some(n) => {
                tracing::warn!(
                    "HUNT_MAX_PARTICIPANTS={} is below the minimum of {}, using {}",
                    n,
                    MIN_PARTICIPANTS,
                    defaults.max_participants
                );
                defaults.max_participants
            }
            None => defaults.max_participants,
        };

        let max_name_chars = match parse_env::<usize>("HUNT_MAX_NAME_CHARS") {
            Some(0) => {
                tracing::warn!(
                    "HUNT_MAX_NAME_CHARS must be positive, using {}",
                    defaults.max_name_chars
                );
                defaults.max_name_chars
            }
            Some(n) => n,
            None => defaults.max_name_chars,
        };

        Self {
            max_participants,
            max_name_chars,
        }
    }
}

/// Read and parse an env var, warning (and returning None) on garbage
fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: {:?}", key, raw);
            None
        }
    }
}
