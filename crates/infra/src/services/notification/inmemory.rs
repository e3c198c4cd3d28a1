use super::INotificationTransport;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub to: String,
    pub body: String,
    /// Whether the transport reported the delivery as successful
    pub delivered: bool,
}

/// Transport that records every delivery attempt instead of sending it.
/// It can be switched into failing mode to simulate a provider outage.
pub struct InMemoryNotificationTransport {
    attempts: Mutex<Vec<SentNotification>>,
    failing: AtomicBool,
}

impl InMemoryNotificationTransport {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Every attempted delivery in the order they were made
    pub fn attempts(&self) -> Vec<SentNotification> {
        self.attempts.lock().unwrap().clone()
    }
}

impl Default for InMemoryNotificationTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotificationTransport for InMemoryNotificationTransport {
    async fn send(&self, to: &str, body: &str) -> bool {
        let delivered = !self.failing.load(Ordering::SeqCst);
        self.attempts.lock().unwrap().push(SentNotification {
            to: to.into(),
            body: body.into(),
            delivered,
        });
        delivered
    }
}
