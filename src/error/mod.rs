pub(crate) mod authorization_error;
pub(crate) mod db_error;
pub(crate) mod request_error;
pub(crate) mod token_error;
pub(crate) mod user_error;

/// Unified application error type
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Token(#[from] token_error::TokenError),
    #[error(transparent)]
    User(#[from] user_error::UserError),
    #[error(transparent)]
    Authorization(#[from] authorization_error::AuthorizationError),
    #[error(transparent)]
    Db(#[from] db_error::DbError),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Token(error) => error.into_response(),
            ApiError::User(error) => error.into_response(),
            ApiError::Authorization(error) => error.into_response(),
            ApiError::Db(error) => error.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::authorization_error::AuthorizationError;
    use crate::error::token_error::TokenError;
    use crate::error::user_error::UserError;
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;

    #[test]
    fn test_status_codes_follow_the_taxonomy() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (
                UserError::AuthenticationFailed.into(),
                StatusCode::UNAUTHORIZED,
            ),
            (UserError::InactiveAccount.into(), StatusCode::UNAUTHORIZED),
            (
                UserError::CredentialsInvalid.into(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                UserError::UserNotFound.into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (UserError::UsernameConflict.into(), StatusCode::CONFLICT),
            (UserError::EmailConflict.into(), StatusCode::CONFLICT),
            (TokenError::TokenExpired.into(), StatusCode::UNAUTHORIZED),
            (TokenError::TokenMalformed.into(), StatusCode::BAD_REQUEST),
            (TokenError::MissingToken.into(), StatusCode::UNAUTHORIZED),
            (
                AuthorizationError::InsufficientPrivilege.into(),
                StatusCode::FORBIDDEN,
            ),
            (
                AuthorizationError::SelfPrivilegeChange.into(),
                StatusCode::FORBIDDEN,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_token_flow_errors_carry_bearer_challenge() {
        let response = ApiError::from(TokenError::TokenExpired).into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let response = ApiError::from(UserError::AuthenticationFailed).into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        // Forbidden responses are not bearer challenges
        let response = ApiError::from(AuthorizationError::SelfPrivilegeChange).into_response();
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}
