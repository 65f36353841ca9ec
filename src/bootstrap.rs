use crate::config::database::{Database, DatabaseTrait};
use crate::config::parameter;
use crate::error::db_error::DbError;
use crate::error::ApiError;
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use crate::service::password_service::PasswordService;
use std::sync::Arc;
use tracing::{error, info, warn};

const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (\
    id BIGSERIAL PRIMARY KEY,\
    username TEXT NOT NULL UNIQUE,\
    first_name TEXT NOT NULL,\
    last_name TEXT NOT NULL,\
    email TEXT NOT NULL UNIQUE,\
    password_hash TEXT NOT NULL,\
    active BOOLEAN NOT NULL DEFAULT TRUE,\
    admin BOOLEAN NOT NULL DEFAULT FALSE\
)";

/// Startup bootstrap: make sure the schema exists, then seed the initial
/// administrator when the store is empty and the environment provides one.
pub async fn run(db_conn: &Arc<Database>) -> Result<(), ApiError> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(db_conn.get_pool())
        .await
        .map_err(|e| {
            error!("Schema creation failed: {}", e);
            DbError::SomethingWentWrong("Schema creation failed".to_string())
        })?;
    info!("Schema ensured");

    seed_initial_admin(db_conn).await
}

async fn seed_initial_admin(db_conn: &Arc<Database>) -> Result<(), ApiError> {
    let user_repo = UserRepository::new(db_conn);

    let existing = user_repo.count().await.map_err(|e| {
        error!("Failed to count users: {}", e);
        DbError::SomethingWentWrong("Failed to count users".to_string())
    })?;
    if existing > 0 {
        return Ok(());
    }

    let (username, password, email) = match (
        parameter::get_optional("INITIAL_ADMIN_USERNAME"),
        parameter::get_optional("INITIAL_ADMIN_PASSWORD"),
        parameter::get_optional("INITIAL_ADMIN_EMAIL"),
    ) {
        (Some(username), Some(password), Some(email)) => (username, password, email),
        _ => {
            warn!("User store is empty and no initial admin is configured");
            return Ok(());
        }
    };

    let first_name = parameter::get_optional("INITIAL_ADMIN_FIRST_NAME").unwrap_or_default();
    let last_name = parameter::get_optional("INITIAL_ADMIN_LAST_NAME").unwrap_or_default();

    let password_hash = PasswordService::hash_password(&username, &password).map_err(|e| {
        error!("Failed to hash initial admin password: {}", e);
        DbError::SomethingWentWrong("Password hashing failed".to_string())
    })?;

    let user = user_repo
        .insert(&username, &first_name, &last_name, &email, &password_hash)
        .await
        .map_err(|e| {
            error!("Initial admin creation failed: {}", e);
            DbError::SomethingWentWrong("Initial admin creation failed".to_string())
        })?;

    user_repo.set_admin(user.id, true).await.map_err(|e| {
        error!("Failed to elevate initial admin: {}", e);
        DbError::SomethingWentWrong("Failed to elevate initial admin".to_string())
    })?;

    info!("Initial admin seeded: ID {}", user.id);
    Ok(())
}
