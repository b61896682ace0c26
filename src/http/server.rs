//! HTTP server setup and transport selection.
//!
//! # Responsibilities
//! - Build the axum Router with the single catch-all relay route
//! - Wire up middleware (correlation logging, version header)
//! - Start exactly one listener: Lambda gateway or bound TCP socket
//!
//! # Design Decisions
//! - The router is identical in both modes; only the transport differs
//! - The X-Version header value is computed once at startup

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::{HeaderName, HeaderValue};
use axum::middleware;
use axum::routing::any;
use axum::{BoxError, Router};
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::RelayConfig;
use crate::http::handler::relay;
use crate::notify::Notifier;
use crate::observability::correlation::correlate;

/// Response header carrying the version tag.
pub const X_VERSION: &str = "x-version";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Delivery seam; tests substitute a recording double here.
    pub notifier: Arc<dyn Notifier>,

    /// Recipient user key; one `Recipient` is built from it per request.
    pub user_key: String,

    /// Version tag carried on every request span.
    pub version: String,
}

/// Build the relay router: catch-all route, correlation middleware, and
/// the constant version header on every response.
pub fn build_router(state: AppState) -> Router {
    let version_header =
        HeaderValue::from_str(&state.version).unwrap_or_else(|_| HeaderValue::from_static(""));

    Router::new()
        .route("/{*path}", any(relay))
        .route("/", any(relay))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state, correlate))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(X_VERSION),
            version_header,
        ))
}

/// Run the relay on the transport matching the deployment mode. Returns
/// when the listener stops.
pub async fn serve(config: RelayConfig, notifier: Arc<dyn Notifier>) -> Result<(), BoxError> {
    let state = AppState {
        notifier,
        user_key: config.pushover.user_key.clone(),
        version: config.version.clone(),
    };
    let app = build_router(state);

    if config.runtime.is_lambda() {
        tracing::info!(version = %config.version, "starting lambda listener");
        return lambda_http::run(app).await;
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listener.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        version = %config.version,
        "Listening for connections"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(config.version.clone()))
    .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal(version: String) {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!(version = %version, "Shutdown signal received");
}
