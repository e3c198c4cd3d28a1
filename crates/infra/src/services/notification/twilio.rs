use super::INotificationTransport;
use crate::config::TwilioConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

// https://www.twilio.com/docs/messaging/api/message-resource#create-a-message-resource

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: Option<i64>,
    message: String,
}

#[derive(Error, Debug)]
pub enum TwilioError {
    #[error("Unable to reach the SMS provider: {0}")]
    Network(#[from] reqwest::Error),
    #[error("SMS provider rejected the message with status {status}: {message}")]
    Rejected {
        status: u16,
        code: Option<i64>,
        message: String,
    },
}

/// Sends text messages through the Twilio REST api
pub struct TwilioSmsTransport {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSmsTransport {
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }

    /// Returns the sid of the created message
    pub async fn send_sms(&self, to: &str, body: &str) -> Result<String, TwilioError> {
        let params = [
            ("To", to),
            ("From", self.config.phone_number.as_str()),
            ("Body", body),
        ];
        let res = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            let (code, message) = match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(err) => (err.code, err.message),
                Err(_) => (None, text),
            };
            return Err(TwilioError::Rejected {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let message = res.json::<MessageResponse>().await?;
        Ok(message.sid)
    }
}

#[async_trait::async_trait]
impl INotificationTransport for TwilioSmsTransport {
    async fn send(&self, to: &str, body: &str) -> bool {
        match self.send_sms(to, body).await {
            Ok(sid) => {
                info!("Successfully sent SMS to {}: {}", to, sid);
                true
            }
            Err(e) => {
                error!("Error sending SMS to {}: {}", to, e);
                false
            }
        }
    }
}
