use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// The greeting of the server, in plain text
    pub async fn check_health(&self) -> APIResponse<String> {
        self.base.get_text("".into(), StatusCode::OK).await
    }
}
