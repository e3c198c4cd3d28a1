use serde::{Deserialize, Serialize};

/// Well formed reminder as clients are expected to send it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReminderDTO {
    pub pill_name: String,
    pub frequency: u8,
    /// `HH:MM` on a 24 hour clock
    pub times: Vec<String>,
    /// ISO weekdays, 1 is Monday
    pub days: Vec<u8>,
}
