mod create_reminder;
mod send_reminders;
mod service;

use actix_web::web;
use create_reminder::create_reminder_controller;
pub use create_reminder::UseCaseError as CreateReminderError;
pub use send_reminders::{
    SendRemindersUseCase, SentReminders, UseCaseError as SendRemindersError,
};
pub use service::ReminderService;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
}
