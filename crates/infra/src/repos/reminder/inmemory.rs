use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use healthsphere_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_phone(&self, phone_number: &str) -> Vec<Reminder> {
        find_by(&self.reminders, |r| r.phone_number == phone_number)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_by(&self.reminders, |_| true))
    }

    async fn count(&self) -> usize {
        count(&self.reminders)
    }
}
