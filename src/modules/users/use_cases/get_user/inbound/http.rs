use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::users::core::ports::RegistryError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct UserNotFoundResponse {
    pub message: &'static str,
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(UserNotFoundResponse {
            message: "User not found",
        }),
    )
        .into_response()
}

/// Reads the leading integer of `raw`: leading whitespace is skipped, an
/// optional sign is honoured and parsing stops at the first non-digit, so
/// `"1abc"` and `"1.5"` both read as 1. `None` when no digit leads.
pub fn leading_integer(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    // Too many digits for an i64 cannot name a stored user either.
    let magnitude = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub async fn handle(State(state): State<AppState>, Path(raw_id): Path<String>) -> impl IntoResponse {
    let Some(id) = leading_integer(&raw_id) else {
        tracing::warn!(raw_id = %raw_id, "user id has no leading integer");
        return not_found();
    };

    match state.registry.get_by_id(id).await {
        Ok(user) => Json(user).into_response(),
        Err(RegistryError::NotFound { id }) => {
            tracing::warn!(user_id = id, "user not found");
            not_found()
        }
    }
}
