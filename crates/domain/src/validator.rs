//! Checks applied to the fields of an incoming reminder request.
//!
//! Every check is all-or-nothing. The `parse_*` variants return the typed
//! value so callers do not have to interpret the raw input twice.

use chrono::{NaiveTime, Weekday};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

pub const MIN_FREQUENCY: i64 = 1;
pub const MAX_FREQUENCY: i64 = 4;

fn phone_pattern() -> &'static Regex {
    static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();
    PHONE_PATTERN
        .get_or_init(|| Regex::new(r"^\+[0-9]{10,15}$").expect("phone pattern to compile"))
}

/// `+` followed by 10 to 15 ASCII digits and nothing else
pub fn validate_phone(phone: &str) -> bool {
    phone_pattern().is_match(phone)
}

/// Accepts JSON integers and strings holding a decimal integer.
/// Fractional numbers and booleans are rejected.
pub fn parse_frequency(frequency: &Value) -> Option<usize> {
    let freq = match frequency {
        Value::Number(n) => n.as_i64()?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    if (MIN_FREQUENCY..=MAX_FREQUENCY).contains(&freq) {
        Some(freq as usize)
    } else {
        None
    }
}

pub fn validate_frequency(frequency: &Value) -> bool {
    parse_frequency(frequency).is_some()
}

/// Strict zero padded `HH:MM` on a 24 hour clock, `9:05` is rejected
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }
    let hour = time[0..2].parse::<u32>().ok()?;
    let minute = time[3..5].parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

pub fn validate_time(time: &str) -> bool {
    parse_time(time).is_some()
}

/// ISO weekday numbering, 1 is Monday and 7 is Sunday
pub fn weekday_from_iso(day: i64) -> Option<Weekday> {
    let weekday = match day {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// The input must be a list and every element an integer in `[1, 7]`.
/// An empty list is accepted.
pub fn parse_days(days: &Value) -> Option<Vec<Weekday>> {
    days.as_array()?
        .iter()
        .map(|day| match day {
            Value::Number(n) => n.as_i64().and_then(weekday_from_iso),
            _ => None,
        })
        .collect()
}

pub fn validate_days(days: &Value) -> bool {
    parse_days(days).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_phone_numbers() {
        assert!(validate_phone("+1234567890"));
        assert!(validate_phone("+12345678901"));
        assert!(validate_phone("+123456789012345"));
    }

    #[test]
    fn rejects_invalid_phone_numbers() {
        assert!(!validate_phone("12345"));
        assert!(!validate_phone("1234567890"));
        assert!(!validate_phone("+123456789"));
        assert!(!validate_phone("+1234567890123456"));
        assert!(!validate_phone("+12345abc901"));
        assert!(!validate_phone("+1 234 567 8901"));
        assert!(!validate_phone("+12345678901\n"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn frequency_must_be_between_one_and_four() {
        for freq in 1..=4 {
            assert!(validate_frequency(&json!(freq)));
        }
        assert_eq!(parse_frequency(&json!(3)), Some(3));
        assert_eq!(parse_frequency(&json!("2")), Some(2));

        assert!(!validate_frequency(&json!(0)));
        assert!(!validate_frequency(&json!(5)));
        assert!(!validate_frequency(&json!(-1)));
        assert!(!validate_frequency(&json!("twice")));
        assert!(!validate_frequency(&json!(2.5)));
        assert!(!validate_frequency(&json!(true)));
        assert!(!validate_frequency(&Value::Null));
    }

    #[test]
    fn time_must_be_zero_padded_24_hour_clock() {
        assert!(validate_time("00:00"));
        assert!(validate_time("08:00"));
        assert!(validate_time("23:59"));
        assert_eq!(parse_time("13:45"), NaiveTime::from_hms_opt(13, 45, 0));

        assert!(!validate_time("24:00"));
        assert!(!validate_time("12:60"));
        assert!(!validate_time("9:5"));
        assert!(!validate_time("9:05"));
        assert!(!validate_time(" 9:05"));
        assert!(!validate_time("08:00:00"));
        assert!(!validate_time("noon"));
        assert!(!validate_time(""));
    }

    #[test]
    fn days_must_be_iso_weekdays() {
        assert!(validate_days(&json!([1, 2, 3, 4, 5, 6, 7])));
        assert!(validate_days(&json!([])));
        assert_eq!(
            parse_days(&json!([1, 7])),
            Some(vec![Weekday::Mon, Weekday::Sun])
        );

        assert!(!validate_days(&json!([0, 1])));
        assert!(!validate_days(&json!([1, 8])));
        assert!(!validate_days(&json!([1, "2"])));
        assert!(!validate_days(&json!([1.5])));
        assert!(!validate_days(&json!(1)));
        assert!(!validate_days(&json!("1,2,3")));
        assert!(!validate_days(&Value::Null));
    }
}
