use crate::{APIResponse, BaseClient};
use healthsphere_api_structs::{dtos::ReminderDTO, *};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    pub phone: String,
    pub reminder: ReminderDTO,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let reminder = serde_json::to_value(&input.reminder).unwrap_or(Value::Null);
        let body = create_reminder::RequestBody {
            phone: Some(Value::String(input.phone)),
            reminder: Some(reminder),
        };
        self.create_raw(body).await
    }

    /// Sends the body as is, without making sure it is well formed
    pub async fn create_raw<S: serde::Serialize>(
        &self,
        body: S,
    ) -> APIResponse<create_reminder::APIResponse> {
        self.base
            .post(body, "api/reminders".into(), StatusCode::CREATED)
            .await
    }
}
