// Moderation endpoints under /api/admin
use axum::extract::{Path, State};
use axum::Extension;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::actions;
use crate::middleware::{ApiResponse, ApiResult, Session};
use crate::state::AppState;

/// GET /api/admin - Dashboard payload. Jobs and users are independent
/// queries, so they run concurrently; this is the only fan-out in the API.
pub async fn overview(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<Value> {
    let store = state.store.as_ref();
    let (jobs, users) = tokio::join!(
        actions::admin::all_jobs(store, Some(&session)),
        actions::admin::all_users(store, Some(&session)),
    );
    let (jobs, users) = (jobs?, users?);

    let _ = state.cache.revalidated("/admin").await;

    let (job_count, user_count) = (jobs.len(), users.len());
    Ok(ApiResponse::success(json!({
        "jobs": jobs,
        "users": users,
        "job_count": job_count,
        "user_count": user_count,
    })))
}

/// GET /api/admin/jobs - Every listing with owner contact details.
pub async fn jobs(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<Value> {
    let jobs = actions::admin::all_jobs(state.store.as_ref(), Some(&session)).await?;
    let total = jobs.len();
    Ok(ApiResponse::success(json!({ "jobs": jobs, "total": total })))
}

/// GET /api/admin/users - Every registered profile.
pub async fn users(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<Value> {
    let users = actions::admin::all_users(state.store.as_ref(), Some(&session)).await?;
    let total = users.len();
    Ok(ApiResponse::success(json!({ "users": users, "total": total })))
}

/// DELETE /api/admin/jobs/:id - Remove any listing.
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    actions::admin::delete_job(state.store.as_ref(), Some(&session), id).await?;

    state.cache.invalidate_all(&["/admin", "/"]).await;

    Ok(ApiResponse::success(json!({ "deleted": id })))
}

/// DELETE /api/admin/users/:id - Remove a profile and its listings.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    actions::admin::delete_user(state.store.as_ref(), Some(&session), id).await?;

    state.cache.invalidate("/admin").await;

    Ok(ApiResponse::success(json!({ "deleted": id })))
}
