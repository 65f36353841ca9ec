use crate::response::app_response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Missing Bearer token")]
    MissingToken,
    /// Expired is distinct from malformed: the refresh flow accepts a
    /// recently expired token, never a structurally broken one.
    #[error("Token Expired. Reauthenticate")]
    TokenExpired,
    #[error("JWT could not be processed")]
    TokenMalformed,
    #[error("Token error: {0}")]
    TokenCreation(String),
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let status_code = match self {
            TokenError::MissingToken => StatusCode::UNAUTHORIZED,
            TokenError::TokenExpired => StatusCode::UNAUTHORIZED,
            TokenError::TokenMalformed => StatusCode::BAD_REQUEST,
            TokenError::TokenCreation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match self {
            TokenError::TokenCreation(_) => ErrorResponse::send(self.to_string())
                .with_status(status_code)
                .into_response(),
            _ => ErrorResponse::send(self.to_string())
                .with_status(status_code)
                .with_bearer_challenge()
                .into_response(),
        }
    }
}
