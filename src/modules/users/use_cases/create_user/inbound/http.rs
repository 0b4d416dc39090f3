use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::users::use_cases::create_user::command::CreateUser;
use crate::modules::users::use_cases::create_user::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateUserErrorResponse {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateUser>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected create user body");
            return (
                rejection.status(),
                Json(CreateUserErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    match state.create_handler.handle(command).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "user created");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(ApplicationError::Validation(reason)) => {
            tracing::warn!(%reason, "create user rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(CreateUserErrorResponse {
                    error: reason.to_string(),
                }),
            )
                .into_response()
        }
    }
}
