mod base;
mod reminder;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use healthsphere_api_structs::dtos::*;
pub use healthsphere_api_structs::MessageResponse;
use reminder::ReminderClient;
pub use reminder::CreateReminderInput;
use status::StatusClient;
use std::sync::Arc;

/// HealthSphere Server SDK
///
/// The SDK contains methods for interacting with the HealthSphere server
/// API.
#[derive(Clone)]
pub struct HealthSDK {
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl HealthSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { reminder, status }
    }
}
