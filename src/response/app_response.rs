use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard error body: a machine-mappable status code on the wire plus a
/// human-readable detail string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(skip)]
    status_code: StatusCode,
    #[serde(skip)]
    bearer_challenge: bool,
}

impl ErrorResponse {
    pub fn send(detail: String) -> Self {
        Self {
            detail,
            status_code: StatusCode::BAD_REQUEST,
            bearer_challenge: false,
        }
    }

    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Attach a `WWW-Authenticate: Bearer` challenge, used by the token flow
    /// responses.
    pub fn with_bearer_challenge(mut self) -> Self {
        self.bearer_challenge = true;
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status_code = self.status_code;
        if self.bearer_challenge {
            (
                status_code,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(self),
            )
                .into_response()
        } else {
            (status_code, Json(self)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_carries_detail_only() {
        let body =
            serde_json::to_value(ErrorResponse::send("No such user_id".to_string())).unwrap();
        assert_eq!(body, serde_json::json!({ "detail": "No such user_id" }));
    }
}
