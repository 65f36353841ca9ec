use crate::dto::user_dto::{
    ListQueryDto, MessageDto, SetActiveQueryDto, SetAdminQueryDto, SetPasswordQueryDto,
    UserCreateDto, UserReadDto, UserUpdateDto,
};
use crate::entity::user::User;
use crate::error::{request_error::ValidatedRequest, ApiError};
use crate::state::user_state::UserState;
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};

const DEFAULT_PAGE_LIMIT: i64 = 100;

pub async fn create_user(
    State(state): State<UserState>,
    Extension(current_user): Extension<User>,
    ValidatedRequest(payload): ValidatedRequest<UserCreateDto>,
) -> Result<Json<UserReadDto>, ApiError> {
    let user = state.user_service.create_user(&current_user, payload).await?;
    Ok(Json(user))
}

pub async fn list_users(
    State(state): State<UserState>,
    Query(query): Query<ListQueryDto>,
) -> Result<Json<Vec<UserReadDto>>, ApiError> {
    let skip = query.skip.unwrap_or(0).max(0);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT).max(0);
    let users = state.user_service.list_users(skip, limit).await?;
    Ok(Json(users))
}

pub async fn read_user(
    State(state): State<UserState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserReadDto>, ApiError> {
    let user = state.user_service.get_user(user_id).await?;
    Ok(Json(user))
}

pub async fn update_user(
    State(state): State<UserState>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
    ValidatedRequest(payload): ValidatedRequest<UserUpdateDto>,
) -> Result<Json<UserReadDto>, ApiError> {
    let user = state
        .user_service
        .update_user(&current_user, user_id, payload)
        .await?;
    Ok(Json(user))
}

/// Returns the deleted record.
pub async fn delete_user(
    State(state): State<UserState>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserReadDto>, ApiError> {
    let user = state
        .user_service
        .delete_user(&current_user, user_id)
        .await?;
    Ok(Json(user))
}

pub async fn set_password(
    State(state): State<UserState>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
    Query(query): Query<SetPasswordQueryDto>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .user_service
        .set_password(&current_user, user_id, &query.password)
        .await?;
    Ok(Json(MessageDto::new("Password successfully changed")))
}

pub async fn set_admin(
    State(state): State<UserState>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
    Query(query): Query<SetAdminQueryDto>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .user_service
        .set_admin(&current_user, user_id, query.admin)
        .await?;
    Ok(Json(MessageDto::new("Admin flag successfully changed")))
}

pub async fn set_active(
    State(state): State<UserState>,
    Extension(current_user): Extension<User>,
    Path(user_id): Path<i64>,
    Query(query): Query<SetActiveQueryDto>,
) -> Result<Json<MessageDto>, ApiError> {
    state
        .user_service
        .set_active(&current_user, user_id, query.active)
        .await?;
    Ok(Json(MessageDto::new("Active flag successfully changed")))
}
