use super::{token, users};
use crate::config::database::Database;
use crate::error::token_error::TokenError;
use crate::middleware::auth as auth_middleware;
use crate::state::auth_state::AuthState;
use crate::state::token_state::TokenState;
use crate::state::user_state::UserState;
use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub fn routes(db_conn: Arc<Database>) -> Result<Router, TokenError> {
    let auth_state = AuthState::new(&db_conn)?;
    let token_state = TokenState::new(&db_conn)?;
    let user_state = UserState::new(&db_conn);

    // Every /users route sits behind the authentication gate; the /token
    // routes stay outside it.
    let users_router = users::routes().with_state(user_state).layer(
        ServiceBuilder::new().layer(middleware::from_fn_with_state(
            token_state,
            auth_middleware::auth,
        )),
    );

    let app_router = Router::new()
        .merge(token::routes().with_state(auth_state))
        .merge(users_router)
        .layer(TraceLayer::new_for_http());

    Ok(app_router)
}
