use super::ReminderService;
use crate::{error::HealthError, shared::usecase::UseCase};
use actix_web::{web, HttpResponse};
use healthsphere_api_structs::create_reminder::APIResponse;
use healthsphere_domain::{
    validator::{parse_days, parse_frequency, parse_time, validate_phone},
    Reminder,
};
use healthsphere_infra::HealthContext;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

pub const REMINDER_CREATED_MESSAGE: &str = "Reminder created successfully!";
const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: phone and reminder";

pub async fn create_reminder_controller(
    service: web::Data<ReminderService>,
    body: web::Json<Value>,
) -> Result<HttpResponse, HealthError> {
    // A body that is not an object has no fields at all, and `null` counts as missing
    let mut fields = match body.into_inner() {
        Value::Object(fields) => fields,
        _ => Default::default(),
    };
    let mut take = |key: &str| fields.remove(key).filter(|value| !value.is_null());
    let (phone, reminder) = match (take("phone"), take("reminder")) {
        (Some(phone), Some(reminder)) => (phone, reminder),
        _ => {
            warn!("{}", MISSING_FIELDS_MESSAGE);
            return Err(HealthError::BadClientData(MISSING_FIELDS_MESSAGE.into()));
        }
    };
    // A phone number that is not even a string can never pass validation
    let phone = phone.as_str().unwrap_or_default();

    service
        .add_reminder(phone, reminder)
        .await
        .map(|_| HttpResponse::Created().json(APIResponse::new(REMINDER_CREATED_MESSAGE)))
        .map_err(HealthError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub phone_number: String,
    pub reminder: Value,
}

#[derive(Error, Debug, PartialEq)]
pub enum UseCaseError {
    #[error("Invalid phone number format. Please use format: +1234567890")]
    InvalidPhoneNumber,
    #[error("Invalid reminder data format")]
    InvalidReminderData,
    #[error("Number of times must match frequency")]
    FrequencyMismatch,
    #[error("Unable to store the reminder")]
    StorageError,
}

impl From<UseCaseError> for HealthError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
            e => Self::BadClientData(e.to_string()),
        }
    }
}

impl CreateReminderUseCase {
    fn parse_reminder(&self) -> Result<Reminder, UseCaseError> {
        let data = match &self.reminder {
            Value::Object(data) if !data.is_empty() => data,
            _ => return Err(UseCaseError::InvalidReminderData),
        };

        let pill_name = data
            .get("pill_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty());
        let frequency = data.get("frequency").and_then(parse_frequency);
        let times = data.get("times").and_then(Value::as_array).and_then(|times| {
            times
                .iter()
                .map(|time| time.as_str().and_then(parse_time))
                .collect::<Option<Vec<_>>>()
        });
        let days = data.get("days").and_then(parse_days);

        let (pill_name, frequency, times, days) = match (pill_name, frequency, times, days) {
            (Some(pill_name), Some(frequency), Some(times), Some(days)) => {
                (pill_name, frequency, times, days)
            }
            _ => return Err(UseCaseError::InvalidReminderData),
        };

        Reminder::new(
            self.phone_number.clone(),
            pill_name.into(),
            frequency,
            times,
            days,
        )
        .map_err(|_| UseCaseError::FrequencyMismatch)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &HealthContext) -> Result<Self::Response, Self::Error> {
        if !validate_phone(&self.phone_number) {
            return Err(UseCaseError::InvalidPhoneNumber);
        }
        let reminder = self.parse_reminder()?;

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        info!(
            "Reminder {} for {} scheduled for {}",
            reminder.id, reminder.pill_name, reminder.phone_number
        );

        Ok(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use actix_web::{http::header, http::StatusCode, test, App};
    use healthsphere_api_structs::MessageResponse;
    use healthsphere_domain::{NaiveTime, Weekday};
    use serde_json::json;

    fn valid_reminder() -> Value {
        json!({
            "pill_name": "Aspirin",
            "frequency": 2,
            "times": ["08:00", "20:00"],
            "days": [1, 3, 5]
        })
    }

    async fn create(
        ctx: &HealthContext,
        phone: &str,
        reminder: Value,
    ) -> Result<Reminder, UseCaseError> {
        let usecase = CreateReminderUseCase {
            phone_number: phone.into(),
            reminder,
        };
        execute(usecase, ctx).await
    }

    #[actix_web::test]
    async fn creates_and_stores_valid_reminder() {
        let ctx = HealthContext::create_inmemory();

        let reminder = create(&ctx, "+12345678901", valid_reminder()).await.unwrap();
        assert_eq!(reminder.pill_name, "Aspirin");
        assert_eq!(reminder.frequency, 2);
        assert_eq!(
            reminder.times,
            vec![
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap()
            ]
        );
        assert_eq!(reminder.days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);

        let stored = ctx.repos.reminders.find(&reminder.id).await.unwrap();
        assert_eq!(stored, reminder);
    }

    #[actix_web::test]
    async fn rejects_invalid_phone_before_anything_else() {
        let ctx = HealthContext::create_inmemory();
        for phone in ["12345", "+123", "+12345678901234567", "+1234567890a", ""] {
            let res = create(&ctx, phone, Value::Null).await;
            assert_eq!(res.unwrap_err(), UseCaseError::InvalidPhoneNumber);
        }
        assert_eq!(ctx.repos.reminders.count().await, 0);
    }

    #[actix_web::test]
    async fn rejects_malformed_reminder_data() {
        let ctx = HealthContext::create_inmemory();
        let mut invalid = vec![Value::Null, json!({}), json!([]), json!("Aspirin")];
        for (field, value) in [
            ("pill_name", json!("")),
            ("pill_name", json!(42)),
            ("frequency", json!(0)),
            ("frequency", json!(5)),
            ("frequency", json!("often")),
            ("times", json!("08:00")),
            ("times", json!(["08:00", "25:00"])),
            ("times", json!(["08:00", 8])),
            ("days", json!([0, 1])),
            ("days", json!([1, 8])),
            ("days", json!(3)),
        ] {
            let mut reminder = valid_reminder();
            reminder[field] = value;
            invalid.push(reminder);
        }
        for field in ["pill_name", "frequency", "times", "days"] {
            let mut reminder = valid_reminder();
            reminder.as_object_mut().unwrap().remove(field);
            invalid.push(reminder);
        }

        for reminder in invalid {
            let res = create(&ctx, "+12345678901", reminder.clone()).await;
            assert_eq!(
                res.unwrap_err(),
                UseCaseError::InvalidReminderData,
                "Expected {} to be rejected",
                reminder
            );
        }
        assert_eq!(ctx.repos.reminders.count().await, 0);
    }

    #[actix_web::test]
    async fn rejects_times_not_matching_frequency() {
        let ctx = HealthContext::create_inmemory();
        let reminder = json!({
            "pill_name": "Aspirin",
            "frequency": 2,
            "times": ["08:00"],
            "days": [1, 2, 3, 4, 5]
        });
        let res = create(&ctx, "+12345678901", reminder).await;
        assert_eq!(res.unwrap_err(), UseCaseError::FrequencyMismatch);
        assert_eq!(
            UseCaseError::FrequencyMismatch.to_string(),
            "Number of times must match frequency"
        );
    }

    #[actix_web::test]
    async fn accepts_numeric_string_frequency_and_empty_days() {
        let ctx = HealthContext::create_inmemory();
        let reminder = json!({
            "pill_name": "Vitamin D",
            "frequency": "1",
            "times": ["07:30"],
            "days": []
        });
        let reminder = create(&ctx, "+4712345678", reminder).await.unwrap();
        assert_eq!(reminder.frequency, 1);
        assert!(reminder.days.is_empty());
    }

    #[actix_web::test]
    async fn stores_duplicates_as_separate_reminders() {
        let ctx = HealthContext::create_inmemory();
        let first = create(&ctx, "+12345678901", valid_reminder()).await.unwrap();
        let second = create(&ctx, "+12345678901", valid_reminder()).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(ctx.repos.reminders.count().await, 2);
    }

    async fn post_payload(payload: &'static str) -> (StatusCode, MessageResponse) {
        let service = web::Data::new(ReminderService::new(HealthContext::create_inmemory()));
        let app = test::init_service(
            App::new()
                .app_data(service)
                .app_data(crate::json_config())
                .configure(crate::reminder::configure_routes),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/reminders")
            .insert_header(header::ContentType::json())
            .set_payload(payload)
            .to_request();
        let res = test::call_service(&app, req).await;
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn controller_creates_reminder() {
        let (status, body) = post_payload(concat!(
            r#"{"phone": "+12345678901", "reminder": "#,
            r#"{"pill_name": "Aspirin", "frequency": 1, "times": ["08:00"], "days": [1]}}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message, REMINDER_CREATED_MESSAGE);
    }

    #[actix_web::test]
    async fn controller_treats_non_object_bodies_as_missing_fields() {
        for payload in [
            "null",
            "[]",
            "\"\"",
            "0",
            "false",
            "{}",
            r#"{"phone": null, "reminder": null}"#,
        ] {
            let (status, body) = post_payload(payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.message, MISSING_FIELDS_MESSAGE, "payload {}", payload);
        }
    }

    #[actix_web::test]
    async fn controller_rejects_malformed_json() {
        for payload in ["{oops", r#"{"phone": "#] {
            let (status, body) = post_payload(payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.message, "Invalid JSON payload");
        }
    }

    #[::core::prelude::v1::test]
    fn maps_errors_to_client_messages() {
        match HealthError::from(UseCaseError::InvalidPhoneNumber) {
            HealthError::BadClientData(msg) => assert_eq!(
                msg,
                "Invalid phone number format. Please use format: +1234567890"
            ),
            e => panic!("Unexpected error: {:?}", e),
        }
        assert!(matches!(
            HealthError::from(UseCaseError::StorageError),
            HealthError::InternalError
        ));
    }
}
