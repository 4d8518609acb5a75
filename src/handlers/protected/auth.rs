// GET /api/auth/whoami and DELETE /api/auth/session
use axum::extract::State;
use axum::Extension;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, Session};
use crate::state::AppState;

/// GET /api/auth/whoami - The caller's profile, fetched fresh so a role
/// change or deletion is visible immediately.
pub async fn whoami(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<Value> {
    let profile = state
        .store
        .profile_by_id(session.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Profile not found"))?;

    let display_name = profile.display_name().to_string();
    Ok(ApiResponse::success(json!({
        "profile": profile,
        "display_name": display_name,
    })))
}

/// DELETE /api/auth/session - Sign out. Revokes the presented token's
/// digest; the middleware refuses it from the next request on.
pub async fn sign_out(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<Value> {
    state.revoked.revoke(session.token_digest).await;
    state.cache.invalidate("/").await;

    Ok(ApiResponse::success(json!({ "redirect": "/login" })))
}
