use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::users::use_cases::list_users::response::UserListResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.registry.list().await;
    Json(UserListResponse::shaped(state.listing, users))
}
