use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use uuid::Uuid;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Request-scoped session extracted from the bearer token. Carries identity
/// only; the profile role is re-fetched inside each action.
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    /// Digest of the raw token, kept so sign-out can revoke it.
    pub token_digest: String,
}

impl Session {
    fn from_claims(claims: Claims, token_digest: String) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            token_digest,
        }
    }
}

/// Bearer-token middleware that validates the session token and injects a
/// `Session` into request extensions for the protected routes.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&headers).map_err(unauthorized)?;

    let claims = auth::validate_jwt(&token)
        .map_err(|e| unauthorized(e.to_string()))?;

    let digest = auth::token_digest(&token);
    if state.revoked.is_revoked(&digest).await {
        return Err(unauthorized("Session has been signed out".to_string()));
    }

    request
        .extensions_mut()
        .insert(Session::from_claims(claims, digest));

    Ok(next.run(request).await)
}

fn unauthorized(msg: impl Into<String>) -> Response {
    let api_error = ApiError::unauthorized(msg);
    (
        StatusCode::from_u16(api_error.status_code()).unwrap_or(StatusCode::UNAUTHORIZED),
        Json(api_error.to_json()),
    )
        .into_response()
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty bearer token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}
