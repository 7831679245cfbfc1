//! Signup and login route handlers.
//!
//! Neither endpoint issues a session or token. The client keeps the
//! returned profile and quotes its `id` on later requests; there is no
//! server-side login state to expire.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::Result;
use crate::middleware::AppJson;
use crate::models::user::{LoginRequest, SignupRequest};
use crate::services::AccountService;
use crate::state::AppState;

/// Create an account.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(request): AppJson<SignupRequest>,
) -> Result<impl IntoResponse> {
    let profile = AccountService::new(state.pool()).signup(request).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Verify credentials and return the matching profile.
pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<impl IntoResponse> {
    let profile = AccountService::new(state.pool()).login(request).await?;
    Ok(Json(profile))
}
