use crate::config::database::Database;
use crate::dto::user_dto::{UserCreateDto, UserReadDto, UserUpdateDto};
use crate::entity::user::User;
use crate::error::ApiError;
use crate::error::db_error::DbError;
use crate::error::user_error::UserError;
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use crate::service::authorization_service::AuthorizationService;
use crate::service::password_service::PasswordService;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            user_repo: UserRepository::new(db_conn),
        }
    }

    fn db_error(context: &str, e: sqlx::Error) -> ApiError {
        error!("{}: {}", context, e);
        ApiError::Db(DbError::SomethingWentWrong(context.to_string()))
    }

    /// Credential check for the login flow. Unknown username and wrong
    /// password are indistinguishable to the caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await
            .map_err(|e| Self::db_error("Failed to look up user", e))?
            .ok_or_else(|| {
                warn!("Login failed: unknown username");
                UserError::AuthenticationFailed
            })?;

        if !PasswordService::verify_password(username, password, &user.password_hash) {
            warn!("Login failed: password mismatch for user ID: {}", user.id);
            return Err(UserError::AuthenticationFailed)?;
        }

        info!("Successful authentication for user ID: {}", user.id);
        Ok(user)
    }

    pub async fn create_user(
        &self,
        actor: &User,
        payload: UserCreateDto,
    ) -> Result<UserReadDto, ApiError> {
        AuthorizationService::require_admin(actor)?;

        if self
            .user_repo
            .find_by_username(&payload.username)
            .await
            .map_err(|e| Self::db_error("Failed to validate username", e))?
            .is_some()
        {
            return Err(UserError::UsernameConflict)?;
        }

        if self
            .user_repo
            .find_by_email(&payload.email)
            .await
            .map_err(|e| Self::db_error("Failed to validate email", e))?
            .is_some()
        {
            return Err(UserError::EmailConflict)?;
        }

        let password_hash = PasswordService::hash_password(&payload.username, &payload.password)
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                ApiError::Db(DbError::SomethingWentWrong("Password hashing failed".to_string()))
            })?;

        let user = self
            .user_repo
            .insert(
                &payload.username,
                &payload.first_name,
                &payload.last_name,
                &payload.email,
                &password_hash,
            )
            .await
            .map_err(|e| Self::db_error("User creation failed", e))?;

        info!("User created: ID {}", user.id);
        Ok(UserReadDto::from(user))
    }

    pub async fn get_user(&self, id: i64) -> Result<UserReadDto, ApiError> {
        let user = self
            .user_repo
            .find(id)
            .await
            .map_err(|e| Self::db_error("Failed to find user", e))?
            .ok_or(UserError::UserNotFound)?;

        Ok(UserReadDto::from(user))
    }

    pub async fn list_users(&self, skip: i64, limit: i64) -> Result<Vec<UserReadDto>, ApiError> {
        let users = self
            .user_repo
            .list(skip, limit)
            .await
            .map_err(|e| Self::db_error("Failed to list users", e))?;

        Ok(users.into_iter().map(UserReadDto::from).collect())
    }

    pub async fn update_user(
        &self,
        actor: &User,
        id: i64,
        payload: UserUpdateDto,
    ) -> Result<UserReadDto, ApiError> {
        AuthorizationService::require_admin(actor)?;

        let user = self
            .user_repo
            .update_fields(
                id,
                payload.first_name.as_deref(),
                payload.last_name.as_deref(),
                payload.email.as_deref(),
            )
            .await
            .map_err(|e| Self::db_error("User update failed", e))?
            .ok_or(UserError::UserNotFound)?;

        info!("User updated: ID {}", user.id);
        Ok(UserReadDto::from(user))
    }

    pub async fn delete_user(&self, actor: &User, id: i64) -> Result<UserReadDto, ApiError> {
        AuthorizationService::require_self_or_admin(actor, id)?;

        let user = self
            .user_repo
            .delete(id)
            .await
            .map_err(|e| Self::db_error("User deletion failed", e))?
            .ok_or(UserError::UserNotFound)?;

        info!("User deleted: ID {}", user.id);
        Ok(UserReadDto::from(user))
    }

    pub async fn set_password(
        &self,
        actor: &User,
        id: i64,
        password: &str,
    ) -> Result<(), ApiError> {
        AuthorizationService::require_self_or_admin(actor, id)?;

        // The target's username participates in the salt, so fetch it first.
        let target = self
            .user_repo
            .find(id)
            .await
            .map_err(|e| Self::db_error("Failed to find user", e))?
            .ok_or(UserError::UserNotFound)?;

        let password_hash = PasswordService::hash_password(&target.username, password)
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                ApiError::Db(DbError::SomethingWentWrong("Password hashing failed".to_string()))
            })?;

        self.user_repo
            .set_password_hash(id, &password_hash)
            .await
            .map_err(|e| Self::db_error("Password change failed", e))?
            .ok_or(UserError::UserNotFound)?;

        info!("Password changed for user ID: {}", id);
        Ok(())
    }

    pub async fn set_admin(&self, actor: &User, id: i64, admin: bool) -> Result<(), ApiError> {
        AuthorizationService::require_admin_on_other(actor, id)?;

        self.user_repo
            .set_admin(id, admin)
            .await
            .map_err(|e| Self::db_error("Admin flag change failed", e))?
            .ok_or(UserError::UserNotFound)?;

        info!("Admin flag set to {} for user ID: {}", admin, id);
        Ok(())
    }

    pub async fn set_active(&self, actor: &User, id: i64, active: bool) -> Result<(), ApiError> {
        AuthorizationService::require_admin_on_other(actor, id)?;

        self.user_repo
            .set_active(id, active)
            .await
            .map_err(|e| Self::db_error("Active flag change failed", e))?
            .ok_or(UserError::UserNotFound)?;

        info!("Active flag set to {} for user ID: {}", active, id);
        Ok(())
    }
}
