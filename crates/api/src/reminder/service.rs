use super::create_reminder::{CreateReminderUseCase, UseCaseError};
use super::send_reminders::{self, SendRemindersUseCase, SentReminders};
use crate::{job_schedulers::start_send_reminders_job, shared::usecase::execute};
use actix_web::rt::task::JoinHandle;
use healthsphere_domain::Reminder;
use healthsphere_infra::HealthContext;
use serde_json::Value;
use std::sync::Mutex;
use tracing::info;

/// Entry point of the reminder subsystem.
///
/// Accepts new reminders and owns the background job that delivers them.
/// The job is not started on construction, call `start` from within the
/// actix runtime.
pub struct ReminderService {
    ctx: HealthContext,
    job: Mutex<Option<JoinHandle<()>>>,
}

impl ReminderService {
    pub fn new(ctx: HealthContext) -> Self {
        Self {
            ctx,
            job: Mutex::new(None),
        }
    }

    pub fn context(&self) -> &HealthContext {
        &self.ctx
    }

    /// Validates the reminder and registers it for delivery from the next
    /// matching minute on
    pub async fn add_reminder(
        &self,
        phone_number: &str,
        reminder: Value,
    ) -> Result<Reminder, UseCaseError> {
        let usecase = CreateReminderUseCase {
            phone_number: phone_number.into(),
            reminder,
        };
        execute(usecase, &self.ctx).await
    }

    /// Delivers the reminders due in the wall clock minute of `minute_ts`
    /// right away, the same way a tick of the delivery job does
    pub async fn send_reminders_at(
        &self,
        minute_ts: i64,
    ) -> Result<SentReminders, send_reminders::UseCaseError> {
        execute(SendRemindersUseCase { minute_ts }, &self.ctx).await
    }

    /// Starts the delivery job unless it is already running
    pub fn start(&self) {
        let mut job = self.job.lock().unwrap();
        if job.as_ref().map_or(false, |handle| !handle.is_finished()) {
            return;
        }
        *job = Some(start_send_reminders_job(self.ctx.clone()));
        info!("Reminder system started. Running in background.");
    }

    pub fn stop(&self) {
        if let Some(handle) = self.job.lock().unwrap().take() {
            handle.abort();
            info!("Reminder system stopped.");
        }
    }

    pub fn is_running(&self) -> bool {
        self.job
            .lock()
            .unwrap()
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }
}

impl Drop for ReminderService {
    fn drop(&mut self) {
        self.stop();
    }
}
