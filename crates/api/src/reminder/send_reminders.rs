use crate::shared::usecase::UseCase;
use chrono::DateTime;
use chrono_tz::Tz;
use futures::future::join_all;
use healthsphere_domain::Reminder;
use healthsphere_infra::{to_wall_clock, HealthContext};
use tracing::{debug, error};

/// Delivers every `Reminder` that is due in a single wall clock minute
#[derive(Debug)]
pub struct SendRemindersUseCase {
    /// Any timestamp in millis within the minute to deliver reminders for
    pub minute_ts: i64,
}

#[derive(Debug, Default, PartialEq)]
pub struct SentReminders {
    /// Number of reminders that were due in the minute
    pub due: usize,
    pub sent: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
    InvalidTimestamp(i64),
}

async fn deliver(reminder: &Reminder, at: &DateTime<Tz>, ctx: &HealthContext) -> bool {
    let message = reminder.message_at(at);
    let delivered = ctx.transport.send(&reminder.phone_number, &message).await;
    if delivered {
        debug!(
            "Sent reminder for {} at {} to {}",
            reminder.pill_name,
            at.format("%H:%M"),
            reminder.phone_number
        );
    } else {
        // The reminder is kept and will be attempted again at its next due minute
        error!(
            "Failed to send SMS for {} to {}",
            reminder.pill_name, reminder.phone_number
        );
    }
    delivered
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = SentReminders;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &HealthContext) -> Result<Self::Response, Self::Error> {
        let at = to_wall_clock(self.minute_ts, &ctx.config.timezone)
            .ok_or(UseCaseError::InvalidTimestamp(self.minute_ts))?;

        let reminders = ctx
            .repos
            .reminders
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let due = reminders
            .iter()
            .filter(|reminder| reminder.is_due_at(&at))
            .collect::<Vec<_>>();

        let deliveries = join_all(due.iter().map(|reminder| deliver(reminder, &at, ctx))).await;
        let sent = deliveries.iter().filter(|delivered| **delivered).count();

        Ok(SentReminders {
            due: due.len(),
            sent,
            failed: due.len() - sent,
        })
    }
}
