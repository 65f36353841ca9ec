use crate::response::app_response::ErrorResponse;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    ValidationError(#[from] validator::ValidationErrors),
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
}

/// JSON body extractor that runs the DTO's validator rules before the
/// handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedRequest<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedRequest<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = RequestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(RequestError::JsonRejection)?;
        value.validate()?;
        Ok(ValidatedRequest(value))
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let detail = match &self {
            RequestError::ValidationError(errors) => flatten_validation_errors(errors),
            RequestError::JsonRejection(rejection) => rejection.body_text(),
        };

        ErrorResponse::send(detail)
            .with_status(StatusCode::UNPROCESSABLE_ENTITY)
            .into_response()
    }
}

fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Validate)]
    struct Probe {
        #[validate(email(message = "Not a valid email address"))]
        email: String,
    }

    #[test]
    fn test_validation_errors_flatten_to_field_details() {
        let probe = Probe {
            email: "bademail".to_string(),
        };
        let errors = probe.validate().unwrap_err();
        let detail = flatten_validation_errors(&errors);
        assert_eq!(detail, "email: Not a valid email address");
    }
}
