//! Structured logging initialisation.
//!
//! # Responsibilities
//! - Install the process-wide tracing subscriber, exactly once at startup
//! - JSON output under the Lambda gateway, human-readable text otherwise
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the default `pushover_relay=info` filter
//! - The format is fixed at startup and never reconfigured

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Runtime;

/// Install the global subscriber for the detected deployment mode.
///
/// Must run before any other component logs. Panics if a subscriber is
/// already installed.
pub fn init(runtime: Runtime) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pushover_relay=info"));

    let registry = tracing_subscriber::registry().with(filter);

    match runtime {
        Runtime::Lambda => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .flatten_event(true),
            )
            .init(),
        Runtime::Standalone => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
