//! Profile update route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use crate::error::Result;
use crate::middleware::AppJson;
use crate::models::user::UpdateProfileRequest;
use crate::services::AccountService;
use crate::state::AppState;

/// Apply partial profile changes and return the updated profile.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateProfileRequest>,
) -> Result<impl IntoResponse> {
    let profile = AccountService::new(state.pool())
        .update_profile(&id, request)
        .await?;
    Ok(Json(profile))
}
