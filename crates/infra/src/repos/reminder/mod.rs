mod inmemory;

pub use inmemory::InMemoryReminderRepo;
use healthsphere_domain::{Reminder, ID};

/// Append only store of every accepted `Reminder`.
///
/// There is intentionally no update or delete, a `Reminder` lives for as
/// long as the process does.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_phone(&self, phone_number: &str) -> Vec<Reminder>;
    /// Snapshot of all reminders, safe to iterate while new ones are inserted
    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>>;
    async fn count(&self) -> usize;
}
