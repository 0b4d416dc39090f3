use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::users::use_cases::create_user::inbound::http as create_http;
use crate::modules::users::use_cases::get_user::inbound::http as get_http;
use crate::modules::users::use_cases::list_users::inbound::http as list_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(list_http::handle).post(create_http::handle),
        )
        .route("/api/users/{id}", get(get_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
