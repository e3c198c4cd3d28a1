use actix_web::web;
use healthsphere_api::{Application, ReminderService};
use healthsphere_domain::Tz;
use healthsphere_infra::{Config, HealthContext, InMemoryNotificationTransport};
use healthsphere_sdk::HealthSDK;
use std::sync::Arc;

pub struct TestApp {
    pub config: Config,
    pub transport: Arc<InMemoryNotificationTransport>,
    pub reminders: web::Data<ReminderService>,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, HealthSDK, String) {
    let mut ctx = HealthContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.timezone = Tz::UTC;
    let transport = Arc::new(InMemoryNotificationTransport::new());
    ctx.transport = transport.clone();

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");
    let reminders = application.reminder_service();

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        transport,
        reminders,
    };
    let sdk = HealthSDK::new(address.clone());
    (app, sdk, address)
}
