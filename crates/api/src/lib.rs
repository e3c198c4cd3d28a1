mod error;
mod job_schedulers;
mod reminder;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use error::HealthError;
use healthsphere_infra::HealthContext;
pub use reminder::{CreateReminderError, ReminderService, SendRemindersError, SentReminders};
use std::net::TcpListener;
use tracing::warn;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    reminder::configure_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request with invalid json payload: {}", err);
        HealthError::BadClientData("Invalid JSON payload".into()).into()
    })
}

pub struct Application {
    server: Server,
    port: u16,
    reminders: web::Data<ReminderService>,
}

impl Application {
    pub async fn new(context: HealthContext) -> Result<Self, std::io::Error> {
        let reminders = web::Data::new(ReminderService::new(context.clone()));
        let (server, port) =
            Application::configure_server(context.config.port, reminders.clone()).await?;
        Application::start_job_schedulers(&reminders);

        Ok(Self {
            server,
            port,
            reminders,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn reminder_service(&self) -> web::Data<ReminderService> {
        self.reminders.clone()
    }

    fn start_job_schedulers(reminders: &ReminderService) {
        reminders.start();
    }

    async fn configure_server(
        port: usize,
        reminders: web::Data<ReminderService>,
    ) -> Result<(Server, u16), std::io::Error> {
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(reminders.clone())
                .app_data(json_config())
                .configure(status::configure_routes)
                .service(web::scope("/api").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
