use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use log::error;
use shared::security::password::PasswordError;
use shared::security::token::TokenError;
use shared::store::StoreError;

pub const INVALID_USER: &str = "Invalid user";
pub const INVALID_REQUEST: &str = "Invalid Request";

/// Every handler failure maps onto one of these; internal failures never
/// leak detail to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    Unauthorized(&'static str),
    #[error("Internal Server Error")]
    Store(#[from] StoreError),
    #[error("Internal Server Error")]
    Password(#[from] PasswordError),
    #[error("Internal Server Error")]
    Token(#[from] TokenError),
    #[error("Internal Server Error")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Store(_)
            | ApiError::Password(_)
            | ApiError::Token(_)
            | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Store(e) => error!("Storage failure: {e}"),
            ApiError::Password(e) => error!("Password hashing failure: {e}"),
            ApiError::Token(e) => error!("Token failure: {e}"),
            ApiError::Blocking(e) => error!("Blocking task failure: {e}"),
            ApiError::BadRequest(_) | ApiError::Unauthorized(_) => {}
        }
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}
