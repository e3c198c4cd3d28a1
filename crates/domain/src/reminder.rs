use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Timelike, Weekday};
use thiserror::Error;

/// A `Reminder` tells the owner of `phone_number` to take `pill_name`
/// at each of `times` on each of `days`.
///
/// A `Reminder` is never modified after it has been accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// Destination of the notifications, `+` followed by 10 to 15 digits
    pub phone_number: String,
    pub pill_name: String,
    /// Number of deliveries per active day, always equal to `times.len()`
    pub frequency: usize,
    pub times: Vec<NaiveTime>,
    pub days: Vec<Weekday>,
}

#[derive(Error, Debug, PartialEq)]
#[error("Expected {frequency} times but got {times}")]
pub struct FrequencyMismatchError {
    pub frequency: usize,
    pub times: usize,
}

impl Reminder {
    pub fn new(
        phone_number: String,
        pill_name: String,
        frequency: usize,
        times: Vec<NaiveTime>,
        days: Vec<Weekday>,
    ) -> Result<Self, FrequencyMismatchError> {
        if times.len() != frequency {
            return Err(FrequencyMismatchError {
                frequency,
                times: times.len(),
            });
        }
        Ok(Self {
            id: Default::default(),
            phone_number,
            pill_name,
            frequency,
            times,
            days,
        })
    }

    /// Whether the wall clock minute `at` falls on one of the active days
    /// and equals one of the delivery times. Seconds are ignored.
    pub fn is_due_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> bool {
        let minute = match NaiveTime::from_hms_opt(at.hour(), at.minute(), 0) {
            Some(minute) => minute,
            None => return false,
        };
        self.days.contains(&at.weekday()) && self.times.contains(&minute)
    }

    /// The text delivered to `phone_number` for the wall clock minute `at`
    pub fn message_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "Reminder: Time to take your {} pill! ({})",
            self.pill_name,
            at.format("%H:%M")
        )
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
