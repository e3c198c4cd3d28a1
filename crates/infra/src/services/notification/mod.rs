mod inmemory;
mod twilio;

pub use inmemory::{InMemoryNotificationTransport, SentNotification};
pub use twilio::{TwilioError, TwilioSmsTransport};

/// Delivers a single text message to a destination address.
///
/// Ordinary delivery failures, like an invalid destination or an outage of
/// the provider, are reported through the returned `bool` and never as a panic
/// or an error.
#[async_trait::async_trait]
pub trait INotificationTransport: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> bool;
}
