//! Live Pushover delivery client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::notify::{Delivery, Message, NotifyError, Notifier, Recipient};

/// Pushover messages endpoint.
const PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Notification client backed by the Pushover messages API.
pub struct PushoverClient {
    token: String,
    api_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct PushoverRequest<'a> {
    token: &'a str,
    user: &'a str,
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct PushoverResponse {
    status: i64,
    #[serde(default)]
    request: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

impl PushoverClient {
    /// Create a client authenticating with the given application token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_url(token, PUSHOVER_API_URL)
    }

    /// Create a client against a non-default endpoint. Tests point this at
    /// a local mock server.
    pub fn with_api_url(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: api_url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for PushoverClient {
    async fn send(
        &self,
        message: &Message,
        recipient: &Recipient,
    ) -> Result<Delivery, NotifyError> {
        let request = PushoverRequest {
            token: &self.token,
            user: recipient.key(),
            message: message.text(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotifyError::Connection(e.to_string()))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::RateLimited(body));
        }

        // Pushover reports rejections as JSON too (status 0 plus an error
        // list), so the body is parsed regardless of the HTTP status.
        let reply: PushoverResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::InvalidResponse(e.to_string()))?;

        if reply.status != 1 {
            let detail = if reply.errors.is_empty() {
                format!("status {}", reply.status)
            } else {
                reply.errors.join(", ")
            };
            return Err(NotifyError::Rejected(detail));
        }

        Ok(Delivery {
            status: reply.status,
            request_id: reply.request.unwrap_or_default(),
        })
    }
}
