use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Wall clock time of the timestamp in the given timezone
pub fn to_wall_clock(timestamp_millis: i64, timezone: &Tz) -> Option<DateTime<Tz>> {
    timezone.timestamp_millis_opt(timestamp_millis).single()
}
