//! Notification delivery subsystem.
//!
//! # Responsibilities
//! - Define the `Notifier` seam the request handler depends on
//! - Provide the live Pushover client and a recording test double
//!
//! # Design Decisions
//! - Handlers only ever see `Arc<dyn Notifier>`; the concrete delivery
//!   mechanism is substitutable without touching request handling
//! - Message and recipient are opaque single-use values built per request

pub mod pushover;
pub mod recording;

use async_trait::async_trait;
use thiserror::Error;

pub use pushover::PushoverClient;
pub use recording::RecordingNotifier;

/// Text content of one outbound notification, carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Opaque addressing token identifying the notification destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient(String);

impl Recipient {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Receipt reported by the delivery service for an accepted send.
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Status code returned by the service (1 means accepted).
    pub status: i64,

    /// Delivery identifier assigned by the service.
    pub request_id: String,
}

/// Errors surfaced by a notification client.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The delivery service could not be reached.
    #[error("failed to reach delivery service: {0}")]
    Connection(String),

    /// The delivery service throttled the request.
    #[error("rate limited by delivery service: {0}")]
    RateLimited(String),

    /// The delivery service refused the request (bad token, bad user key).
    #[error("delivery rejected: {0}")]
    Rejected(String),

    /// The delivery service answered with something unparseable.
    #[error("unexpected delivery response: {0}")]
    InvalidResponse(String),
}

/// Capability to send one message to one recipient.
///
/// Implementations must be shareable across request tasks.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `message` to `recipient`, returning the service's receipt.
    async fn send(&self, message: &Message, recipient: &Recipient)
        -> Result<Delivery, NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_preserves_content() {
        let message = Message::new("Disk usage at 93%\n\tline two");
        assert_eq!(message.text(), "Disk usage at 93%\n\tline two");
    }

    #[test]
    fn test_recipient_key_roundtrip() {
        let recipient = Recipient::new("u1234567890");
        assert_eq!(recipient.key(), "u1234567890");
    }

    #[test]
    fn test_error_display() {
        let err = NotifyError::Rejected("application token is invalid".to_string());
        assert_eq!(err.to_string(), "delivery rejected: application token is invalid");

        let err = NotifyError::Connection("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "failed to reach delivery service: connection refused"
        );
    }
}
