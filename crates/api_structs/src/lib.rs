mod reminder;
mod shared;

pub mod dtos {
    pub use crate::reminder::dtos::*;
}

pub use crate::reminder::api::*;
pub use crate::shared::MessageResponse;
