use crate::config::database::{Database, DatabaseTrait};
use crate::entity::user::User;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

const USER_COLUMNS: &str =
    "id, username, first_name, last_name, email, password_hash, active, admin";

#[derive(Clone)]
pub struct UserRepository {
    db_conn: Arc<Database>,
}

/// The credential store. Every mutation is a single SQL statement, so
/// concurrent writes to one row serialize on the database's row lock.
#[async_trait]
pub trait UserRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn find(&self, id: i64) -> Result<Option<User>, Error>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error>;
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, Error>;
    async fn count(&self) -> Result<i64, Error>;
    async fn insert(
        &self,
        username: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, Error>;
    async fn update_fields(
        &self,
        id: i64,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, Error>;
    async fn set_password_hash(&self, id: i64, password_hash: &str)
        -> Result<Option<User>, Error>;
    async fn set_admin(&self, id: i64, admin: bool) -> Result<Option<User>, Error>;
    async fn set_active(&self, id: i64, active: bool) -> Result<Option<User>, Error>;
    async fn delete(&self, id: i64) -> Result<Option<User>, Error>;
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn find(&self, id: i64) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    /// Insertion-ordered page of users.
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(skip)
        .bind(limit)
        .fetch_all(self.db_conn.get_pool())
        .await
    }

    async fn count(&self) -> Result<i64, Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.db_conn.get_pool())
            .await
    }

    async fn insert(
        &self,
        username: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, Error> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, first_name, last_name, email, password_hash) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn update_fields(
        &self,
        id: i64,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                first_name = COALESCE($2, first_name), \
                last_name = COALESCE($3, last_name), \
                email = COALESCE($4, email) \
             WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn set_password_hash(
        &self,
        id: i64,
        password_hash: &str,
    ) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET password_hash = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(password_hash)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn set_admin(&self, id: i64, admin: bool) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET admin = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(admin)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET active = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(active)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }

    /// Hard delete; returns the removed row so callers can echo it back.
    async fn delete(&self, id: i64) -> Result<Option<User>, Error> {
        sqlx::query_as::<_, User>(&format!(
            "DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(self.db_conn.get_pool())
        .await
    }
}
