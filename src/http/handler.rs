//! Relay request handling.
//!
//! # Responsibilities
//! - Gate the catch-all route to POST
//! - Capture the raw request body
//! - Hand exactly one message to the notification client
//! - Map every failure to a fixed, generic client response

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::http::server::AppState;
use crate::notify::{Message, NotifyError, Recipient};

/// Fixed body confirming a delivered notification.
pub const CONFIRMATION: &str = "Notification sent.\n";

/// Per-request failures, each mapping to one generic response.
///
/// Response bodies stay fixed; failure detail goes to the log only.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request used a method other than POST.
    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),

    /// The request body could not be read in full.
    #[error("error reading request body: {0}")]
    BodyRead(axum::Error),

    /// The notification client failed to deliver.
    #[error("error sending notification: {0}")]
    Delivery(#[from] NotifyError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            RelayError::MethodNotAllowed(_) => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
            }
            RelayError::BodyRead(_) => (StatusCode::BAD_REQUEST, "Error reading request body"),
            RelayError::Delivery(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error sending notification")
            }
        };

        (status, body).into_response()
    }
}

/// Handle one relay exchange: POST body in, one notification out.
pub async fn relay(
    State(state): State<AppState>,
    request: Request,
) -> Result<&'static str, RelayError> {
    if request.method() != Method::POST {
        tracing::info!(method = %request.method(), "method not allowed");
        return Err(RelayError::MethodNotAllowed(request.method().clone()));
    }

    let body = match to_bytes(request.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "failed reading request body");
            return Err(RelayError::BodyRead(e));
        }
    };

    let text = String::from_utf8_lossy(&body);
    tracing::info!(bytes = body.len(), content = %text, "payload received");

    let message = Message::new(text.into_owned());
    let recipient = Recipient::new(state.user_key.as_str());

    let delivery = state
        .notifier
        .send(&message, &recipient)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed sending notification");
            RelayError::Delivery(e)
        })?;

    tracing::info!(
        status = delivery.status,
        delivery_id = %delivery.request_id,
        "notification sent"
    );

    Ok(CONFIRMATION)
}
