use crate::handler::user_handler;
use crate::state::user_state::UserState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn routes() -> Router<UserState> {
    Router::<UserState>::new()
        .route(
            "/users",
            get(user_handler::list_users).post(user_handler::create_user),
        )
        // The collection path is also reachable with a trailing slash.
        .route(
            "/users/",
            get(user_handler::list_users).post(user_handler::create_user),
        )
        .route(
            "/users/{user_id}",
            get(user_handler::read_user)
                .put(user_handler::update_user)
                .delete(user_handler::delete_user),
        )
        .route(
            "/users/{user_id}/set_password",
            put(user_handler::set_password),
        )
        .route("/users/{user_id}/set_admin", put(user_handler::set_admin))
        .route("/users/{user_id}/set_active", put(user_handler::set_active))
}
