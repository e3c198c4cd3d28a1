use chrono_tz::Tz;
use thiserror::Error;
use tracing::warn;

const DEFAULT_PORT: usize = 5000;
const DEFAULT_CATCH_UP_MINUTES: i64 = 5;
const DEFAULT_TWILIO_API_BASE_URL: &str = "https://api.twilio.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Timezone of the wall clock that reminder times and days are
    /// compared against
    pub timezone: Tz,
    /// When a tick of the reminder job is late, the minutes it skipped are
    /// evaluated on the next tick, up to this many of them.
    pub catch_up_minutes: i64,
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", DEFAULT_PORT);
        let timezone = parse_env_or("REMINDER_TIMEZONE", Tz::UTC);
        let catch_up_minutes = parse_env_or("REMINDER_CATCH_UP_MINUTES", DEFAULT_CATCH_UP_MINUTES);
        let catch_up_minutes = if catch_up_minutes < 0 {
            warn!(
                "REMINDER_CATCH_UP_MINUTES cannot be negative, falling back to {}.",
                DEFAULT_CATCH_UP_MINUTES
            );
            DEFAULT_CATCH_UP_MINUTES
        } else {
            catch_up_minutes
        };

        Self {
            port,
            timezone,
            catch_up_minutes,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing Twilio configuration: {}", .0.join(", "))]
    MissingTwilioConfig(Vec<&'static str>),
}

/// Credentials of the SMS provider. All of them are required for the
/// reminder subsystem to start.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender address of every notification
    pub phone_number: String,
    pub api_base_url: String,
}

impl TwilioConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str, missing: &mut Vec<&'static str>| {
            match lookup(key).filter(|value| !value.is_empty()) {
                Some(value) => value,
                None => {
                    missing.push(key);
                    String::new()
                }
            }
        };

        let mut missing = Vec::new();
        let account_sid = required("TWILIO_ACCOUNT_SID", &mut missing);
        let auth_token = required("TWILIO_AUTH_TOKEN", &mut missing);
        let phone_number = required("TWILIO_PHONE_NUMBER", &mut missing);
        if !missing.is_empty() {
            return Err(ConfigError::MissingTwilioConfig(missing));
        }

        let api_base_url = lookup("TWILIO_API_BASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE_URL.into());

        Ok(Self {
            account_sid,
            auth_token,
            phone_number,
            api_base_url,
        })
    }
}
