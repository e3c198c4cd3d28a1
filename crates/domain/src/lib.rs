mod reminder;
mod shared;
pub mod validator;

pub use chrono::{NaiveTime, Weekday};
pub use chrono_tz::Tz;
pub use reminder::{FrequencyMismatchError, Reminder};
pub use shared::entity::{Entity, ID};
