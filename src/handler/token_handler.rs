use crate::dto::token_dto::TokenReadDto;
use crate::dto::user_dto::UserLoginDto;
use crate::error::db_error::DbError;
use crate::error::{token_error::TokenError, user_error::UserError, ApiError};
use crate::middleware::auth::bearer_token;
use crate::repository::user_repository::UserRepositoryTrait;
use crate::service::token_service::TokenServiceTrait;
use crate::state::auth_state::AuthState;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::{Form, Json};
use tracing::{error, info, warn};

/// POST /token: exchange form credentials for a bearer token.
pub async fn login(
    State(state): State<AuthState>,
    Form(form): Form<UserLoginDto>,
) -> Result<Json<TokenReadDto>, ApiError> {
    info!("Login attempt for username: {}", form.username);

    let user = state
        .user_service
        .authenticate(&form.username, &form.password)
        .await?;

    if !user.active {
        warn!("Login refused for inactive user ID: {}", user.id);
        return Err(UserError::InactiveAccount)?;
    }

    let token = state.token_service.issue(user.id)?;
    info!("Token issued for user ID: {}", user.id);
    Ok(Json(token))
}

/// POST /token/refresh: exchange a current or recently expired token for a
/// fresh one. Only this endpoint tolerates expiry, bounded by the
/// configured leeway.
pub async fn refresh(
    State(state): State<AuthState>,
    headers: HeaderMap,
) -> Result<Json<TokenReadDto>, ApiError> {
    let token = bearer_token(&headers).ok_or(TokenError::MissingToken)?;

    let claims = state.token_service.decode_with_leeway(token)?;

    let subject_id = claims.sub.ok_or_else(|| {
        warn!("Refresh token carries no subject");
        UserError::CredentialsInvalid
    })?;

    let user = state
        .user_repo
        .find(subject_id)
        .await
        .map_err(|e| {
            error!("Failed to resolve refresh subject: {}", e);
            DbError::SomethingWentWrong("Failed to resolve user".to_string())
        })?
        .ok_or_else(|| {
            warn!("Refresh subject {} has no user record", subject_id);
            UserError::AuthenticationFailed
        })?;

    if !user.active {
        warn!("Refresh refused for inactive user ID: {}", user.id);
        return Err(UserError::InactiveAccount)?;
    }

    let token = state.token_service.issue(user.id)?;
    info!("Token refreshed for user ID: {}", user.id);
    Ok(Json(token))
}
