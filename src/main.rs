//! Pushover Notification Relay
//!
//! A minimal HTTP-to-push relay built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                          ┌──────────────────────────────────────────┐
//!                          │                  RELAY                    │
//!                          │                                           │
//!     POST <any path>      │  ┌─────────┐   ┌─────────────┐           │
//!     ─────────────────────┼─▶│  http   │──▶│   notify    │───────────┼──▶ Pushover API
//!     (TCP socket or       │  │ server  │   │  (Notifier) │           │
//!      Lambda gateway)     │  └────┬────┘   └─────────────┘           │
//!                          │       │                                   │
//!                          │  ┌────▼──────────────────────────────┐   │
//!                          │  │        Cross-Cutting Concerns      │   │
//!                          │  │  ┌─────────┐  ┌─────────────────┐  │   │
//!                          │  │  │ config  │  │  observability  │  │   │
//!                          │  │  │ (env)   │  │  (correlation)  │  │   │
//!                          │  │  └─────────┘  └─────────────────┘  │   │
//!                          │  └───────────────────────────────────┘   │
//!                          └──────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::BoxError;

use pushover_relay::config::{RelayConfig, Runtime};
use pushover_relay::http::server;
use pushover_relay::notify::{Notifier, PushoverClient};
use pushover_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Detect the deployment mode before anything logs, so the subscriber
    // format matches the platform from the first line.
    let runtime = Runtime::from_env();
    logging::init(runtime);

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                error = %e,
                version = %RelayConfig::version_from_env(),
                "configuration invalid"
            );
            return Err(e.into());
        }
    };

    // Keep the tag past the handoff; `serve` consumes the config.
    let version = config.version.clone();

    tracing::info!(
        version = %version,
        mode = %config.runtime,
        "pushover-relay starting"
    );

    let notifier: Arc<dyn Notifier> = Arc::new(PushoverClient::new(config.pushover.token.clone()));

    if let Err(e) = server::serve(config, notifier).await {
        tracing::error!(error = %e, version = %version, "server stopped");
        return Err(e);
    }

    tracing::info!(version = %version, "Shutdown complete");
    Ok(())
}
