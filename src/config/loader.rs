//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::{ListenerConfig, PushoverConfig, RelayConfig, Runtime};

/// Required: application token for the Pushover messages API.
pub const TOKEN_VAR: &str = "PUSHOVER_TOKEN";

/// Required: user key of the notification recipient.
pub const USER_KEY_VAR: &str = "PUSHOVER_USER_KEY";

/// Optional: version tag override.
pub const VERSION_VAR: &str = "VERSION";

/// Optional: standalone listen port.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is absent or empty.
    #[error("{0} must be set")]
    Missing(&'static str),

    /// `PORT` is set but is not a valid TCP port number.
    #[error("PORT is not a valid port: {0}")]
    InvalidPort(String),
}

impl RelayConfig {
    /// Load configuration from the process environment.
    ///
    /// Fails when either Pushover credential is absent or empty, or when
    /// `PORT` holds something that is not a port number. Optional values
    /// fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve just the version tag, for log lines emitted before a full
    /// configuration exists.
    pub fn version_from_env() -> String {
        version_tag(&|key| std::env::var(key).ok())
    }

    /// Load configuration through an injectable variable lookup.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pushover = PushoverConfig {
            token: required(&get, TOKEN_VAR)?,
            user_key: required(&get, USER_KEY_VAR)?,
        };

        let listener = match get(PORT_VAR) {
            Some(raw) if !raw.is_empty() => ListenerConfig {
                port: raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            },
            _ => ListenerConfig::default(),
        };

        Ok(RelayConfig {
            pushover,
            listener,
            version: version_tag(&get),
            runtime: Runtime::from_marker(get(Runtime::MARKER).as_deref()),
        })
    }
}

fn version_tag<F>(get: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match get(VERSION_VAR) {
        Some(version) if !version.is_empty() => version,
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn required<F>(get: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}
