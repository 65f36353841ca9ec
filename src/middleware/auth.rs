use crate::error::{token_error::TokenError, user_error::UserError, ApiError};
use crate::error::db_error::DbError;
use crate::repository::user_repository::UserRepositoryTrait;
use crate::service::token_service::TokenServiceTrait;
use crate::state::token_state::TokenState;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::IntoResponse;
use tracing::{error, info, warn};

/// Pull the bearer token out of the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// The authentication gate for every /users request: strict token decode,
/// identity resolution, active-account check, then the resolved user is
/// attached to the request for handlers to take as an explicit argument.
pub async fn auth(
    State(state): State<TokenState>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let token = bearer_token(req.headers()).ok_or_else(|| {
        warn!("Request without bearer token");
        TokenError::MissingToken
    })?;

    let claims = state.token_service.decode(token)?;

    let subject_id = claims.sub.ok_or_else(|| {
        warn!("Token carries no subject");
        UserError::CredentialsInvalid
    })?;

    let user = state
        .user_repo
        .find(subject_id)
        .await
        .map_err(|e| {
            error!("Failed to resolve token subject: {}", e);
            DbError::SomethingWentWrong("Failed to resolve user".to_string())
        })?
        .ok_or_else(|| {
            warn!("Token subject {} has no user record", subject_id);
            UserError::CredentialsInvalid
        })?;

    if !user.active {
        warn!("Inactive user {} presented a valid token", user.id);
        return Err(UserError::InactiveAccount)?;
    }

    info!("Authenticated user ID: {}", user.id);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
