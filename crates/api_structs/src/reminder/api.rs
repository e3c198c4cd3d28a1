use crate::shared::MessageResponse;
use serde::{Deserialize, Serialize};

pub mod create_reminder {
    use super::*;
    use serde_json::Value;

    /// Both fields are kept as raw json because each of them has to be
    /// validated field by field to produce the right error message.
    /// A field that is `null` counts as missing.
    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub phone: Option<Value>,
        #[serde(default)]
        pub reminder: Option<Value>,
    }

    pub type APIResponse = MessageResponse;
}
