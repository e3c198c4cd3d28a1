use chrono::{TimeZone, Utc};
use healthsphere_sdk::{APIError, ReminderDTO};

pub fn aspirin_on_weekdays() -> ReminderDTO {
    ReminderDTO {
        pill_name: "Aspirin".into(),
        frequency: 1,
        times: vec!["08:00".into()],
        days: vec![1, 2, 3, 4, 5],
    }
}

/// Timestamp in millis of the given UTC wall clock minute
pub fn utc_millis(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
        .timestamp_millis()
}

pub fn assert_bad_request(err: APIError, message: &str) {
    assert_eq!(err.status.map(|status| status.as_u16()), Some(400));
    assert_eq!(err.message.as_deref(), Some(message));
}
