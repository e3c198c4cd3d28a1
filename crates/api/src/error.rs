use actix_web::{http::StatusCode, HttpResponse};
use healthsphere_api_structs::MessageResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Internal server error")]
    InternalError,
    /// The message is returned to the client as is
    #[error("{0}")]
    BadClientData(String),
}

impl actix_web::error::ResponseError for HealthError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}
