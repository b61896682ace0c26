//! Recording test double for the notification seam.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::notify::{Delivery, Message, NotifyError, Notifier, Recipient};

/// In-memory notifier that records every send instead of delivering.
///
/// Receipts are deterministic. The `failing` constructor builds a variant
/// whose sends always error, for exercising the delivery-failure path.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(Message, Recipient)>>,
    send_count: AtomicU64,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails with a connection error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of sends attempted so far, failed ones included.
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }

    /// Messages and recipients recorded so far, in send order.
    pub fn sent(&self) -> Vec<(Message, Recipient)> {
        self.sent.lock().expect("recorder lock poisoned").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(
        &self,
        message: &Message,
        recipient: &Recipient,
    ) -> Result<Delivery, NotifyError> {
        let attempt = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail {
            return Err(NotifyError::Connection(
                "recording notifier set to fail".to_string(),
            ));
        }

        self.sent
            .lock()
            .expect("recorder lock poisoned")
            .push((message.clone(), recipient.clone()));

        Ok(Delivery {
            status: 1,
            request_id: format!("recorded-{}", attempt),
        })
    }
}
