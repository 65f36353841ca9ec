use crate::handler::token_handler;
use crate::state::auth_state::AuthState;
use axum::{routing::post, Router};

pub fn routes() -> Router<AuthState> {
    Router::<AuthState>::new()
        .route("/token", post(token_handler::login))
        .route("/token/refresh", post(token_handler::refresh))
}
