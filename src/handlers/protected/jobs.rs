// Business job management under /api/jobs. Mutation bodies arrive as flat
// form-encoded fields, the way a browser submits them.
use axum::extract::{Path, State};
use axum::{Extension, Form};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::actions;
use crate::actions::jobs::CreateJobForm;
use crate::middleware::{ApiResponse, ApiResult, Session};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub is_active: bool,
}

/// POST /api/jobs - Post a new listing for the calling business.
pub async fn create(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(form): Form<CreateJobForm>,
) -> ApiResult<Value> {
    let job = actions::jobs::create_job(state.store.as_ref(), Some(&session), form).await?;

    state.cache.invalidate("/jobs").await;

    Ok(ApiResponse::created(json!({
        "job": job,
        "redirect": "/jobs",
    })))
}

/// PUT /api/jobs/:id/status - Activate or deactivate an owned listing.
pub async fn update_status(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
    Form(update): Form<StatusUpdate>,
) -> ApiResult<Value> {
    actions::jobs::update_job_status(state.store.as_ref(), Some(&session), id, update.is_active)
        .await?;

    state.cache.invalidate_all(&["/dashboard", "/jobs"]).await;

    Ok(ApiResponse::success(json!({ "is_active": update.is_active })))
}

/// DELETE /api/jobs/:id - Delete an owned listing.
pub async fn delete(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    actions::jobs::delete_job(state.store.as_ref(), Some(&session), id).await?;

    state.cache.invalidate_all(&["/dashboard", "/jobs"]).await;

    Ok(ApiResponse::success(json!({ "deleted": id })))
}

/// GET /api/jobs/mine - The caller's listings for the dashboard, active
/// and inactive alike.
pub async fn mine(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> ApiResult<Value> {
    let jobs = actions::jobs::my_jobs(state.store.as_ref(), Some(&session)).await?;

    let _ = state.cache.revalidated("/dashboard").await;

    let total = jobs.len();
    Ok(ApiResponse::success(json!({
        "jobs": jobs,
        "total": total,
    })))
}
