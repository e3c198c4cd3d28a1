mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, ConfigError, TwilioConfig};
pub use repos::{IReminderRepo, InMemoryReminderRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{to_wall_clock, ISys, RealSys};

#[derive(Clone)]
pub struct HealthContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub transport: Arc<dyn INotificationTransport>,
}

impl HealthContext {
    fn create(twilio: TwilioConfig) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            transport: Arc::new(TwilioSmsTransport::new(twilio)),
        }
    }

    /// Context that never talks to the SMS provider, every delivery is
    /// recorded by an `InMemoryNotificationTransport`
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            transport: Arc::new(InMemoryNotificationTransport::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Fails when any of the SMS provider credentials are missing, the
/// reminder subsystem cannot do anything useful without them.
pub fn setup_context() -> Result<HealthContext, ConfigError> {
    let twilio = TwilioConfig::from_env()?;
    Ok(HealthContext::create(twilio))
}
