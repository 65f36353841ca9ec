use crate::response::app_response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    /// Deliberately identical for unknown username and wrong password so the
    /// response does not leak which field failed.
    #[error("Incorrect username or password")]
    AuthenticationFailed,
    #[error("Inactive user")]
    InactiveAccount,
    #[error("Could not validate credentials")]
    CredentialsInvalid,
    #[error("No such user_id")]
    UserNotFound,
    #[error("Username already registered")]
    UsernameConflict,
    #[error("Email already registered")]
    EmailConflict,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status_code = match self {
            UserError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            UserError::InactiveAccount => StatusCode::UNAUTHORIZED,
            UserError::CredentialsInvalid => StatusCode::UNAUTHORIZED,
            UserError::UserNotFound => StatusCode::UNPROCESSABLE_ENTITY,
            UserError::UsernameConflict => StatusCode::CONFLICT,
            UserError::EmailConflict => StatusCode::CONFLICT,
        };

        match self {
            UserError::AuthenticationFailed | UserError::CredentialsInvalid => {
                ErrorResponse::send(self.to_string())
                    .with_status(status_code)
                    .with_bearer_challenge()
                    .into_response()
            }
            _ => ErrorResponse::send(self.to_string())
                .with_status(status_code)
                .into_response(),
        }
    }
}
