use crate::response::app_response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Two distinct kinds sharing status 403: callers can tell an ordinary
/// privilege shortfall apart from an attempted self privilege change.
#[derive(Error, Debug)]
pub enum AuthorizationError {
    #[error("Authenticated user lacks administrative privileges")]
    InsufficientPrivilege,
    #[error("You may not change your own administrative privileges or active status")]
    SelfPrivilegeChange,
}

impl IntoResponse for AuthorizationError {
    fn into_response(self) -> Response {
        ErrorResponse::send(self.to_string())
            .with_status(StatusCode::FORBIDDEN)
            .into_response()
    }
}
