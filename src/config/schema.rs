//! Configuration schema definitions.
//!
//! All values are sourced from the process environment at startup (see
//! `loader`). Once built, the configuration is immutable for the life of
//! the process.

use std::fmt;

/// Default listen port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration for the relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Pushover delivery credentials.
    pub pushover: PushoverConfig,

    /// Listener settings for standalone mode (ignored under Lambda).
    pub listener: ListenerConfig,

    /// Version tag reported in the `X-Version` header and in logs.
    pub version: String,

    /// Deployment mode detected from the environment.
    pub runtime: Runtime,
}

/// Credentials for the Pushover messages API.
#[derive(Debug, Clone)]
pub struct PushoverConfig {
    /// Application token authenticating the relay with Pushover.
    pub token: String,

    /// User key of the single notification recipient.
    pub user_key: String,
}

/// Listener configuration for standalone mode.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// TCP port to bind on all interfaces.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Deployment mode, detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    /// Invoked through the Lambda HTTP gateway.
    Lambda,

    /// Long-running server bound to a TCP port.
    Standalone,
}

impl Runtime {
    /// Environment variable whose presence selects Lambda mode.
    pub const MARKER: &'static str = "AWS_LAMBDA_FUNCTION_NAME";

    /// Detect the deployment mode from the process environment.
    pub fn from_env() -> Self {
        Self::from_marker(std::env::var(Self::MARKER).ok().as_deref())
    }

    /// Classify the mode from the marker variable's value, if any.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(name) if !name.is_empty() => Runtime::Lambda,
            _ => Runtime::Standalone,
        }
    }

    pub fn is_lambda(self) -> bool {
        matches!(self, Runtime::Lambda)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runtime::Lambda => f.write_str("lambda"),
            Runtime::Standalone => f.write_str("standalone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_set_selects_lambda() {
        assert_eq!(Runtime::from_marker(Some("notify-fn")), Runtime::Lambda);
        assert!(Runtime::from_marker(Some("notify-fn")).is_lambda());
    }

    #[test]
    fn test_marker_absent_selects_standalone() {
        assert_eq!(Runtime::from_marker(None), Runtime::Standalone);
    }

    #[test]
    fn test_marker_empty_selects_standalone() {
        assert_eq!(Runtime::from_marker(Some("")), Runtime::Standalone);
    }

    #[test]
    fn test_runtime_display() {
        assert_eq!(Runtime::Lambda.to_string(), "lambda");
        assert_eq!(Runtime::Standalone.to_string(), "standalone");
    }

    #[test]
    fn test_default_listener_port() {
        assert_eq!(ListenerConfig::default().port, 8080);
    }
}
