//! Pushover Notification Relay Library
//!
//! Accepts an HTTP POST carrying arbitrary text and forwards it as a
//! Pushover notification to a single recipient. Runs either as a
//! standalone server or behind the Lambda HTTP gateway.

pub mod config;
pub mod http;
pub mod notify;
pub mod observability;

pub use config::{RelayConfig, Runtime};
pub use http::server::{build_router, serve, AppState};
pub use notify::{Notifier, PushoverClient, RecordingNotifier};
