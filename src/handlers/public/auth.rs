// POST /auth/login and POST /auth/signup - token acquisition endpoints.
// Both take flat form-encoded fields, the way a browser submits them.
use axum::extract::State;
use axum::Form;
use serde_json::{json, Value};

use crate::actions;
use crate::actions::auth::{LoginForm, SignupForm};
use crate::auth::{generate_jwt, Claims};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::Profile;
use crate::state::AppState;

/// POST /auth/login - Authenticate and receive a session token.
///
/// Success response:
/// ```json
/// { "success": true, "data": { "token": "...", "redirect": "/" } }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<Value> {
    let profile = actions::auth::login(state.store.as_ref(), form).await?;
    let body = issue_session(&state, &profile).await?;
    Ok(ApiResponse::success(body))
}

/// POST /auth/signup - Register a profile and receive a session token.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> ApiResult<Value> {
    let profile = actions::auth::signup(state.store.as_ref(), form).await?;
    let body = issue_session(&state, &profile).await?;
    Ok(ApiResponse::created(body))
}

/// Shared tail of both entry points: mint the token and mark the landing
/// page stale so it re-renders with the new session.
async fn issue_session(state: &AppState, profile: &Profile) -> Result<Value, ApiError> {
    let token = generate_jwt(Claims::new(profile.id, profile.email.clone()))
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    state.cache.invalidate("/").await;

    Ok(json!({
        "token": token,
        "redirect": "/",
    }))
}
