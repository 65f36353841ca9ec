use crate::config::database::Database;
use crate::error::token_error::TokenError;
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use crate::service::token_service::{TokenService, TokenServiceTrait};
use crate::service::user_service::UserService;
use std::sync::Arc;

/// State for the /token endpoints.
#[derive(Clone)]
pub struct AuthState {
    pub(crate) token_service: TokenService,
    pub(crate) user_service: UserService,
    pub(crate) user_repo: UserRepository,
}

impl AuthState {
    pub fn new(db_conn: &Arc<Database>) -> Result<Self, TokenError> {
        Ok(Self {
            token_service: TokenService::new()?,
            user_service: UserService::new(db_conn),
            user_repo: UserRepository::new(db_conn),
        })
    }
}
