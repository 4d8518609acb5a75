// GET /jobs and GET /jobs/:id - the public board
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::filter::{available_categories, available_skills, JobFilter};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Free-text term matched against title, company and description.
    pub search: Option<String>,
    /// Comma-separated category selection.
    pub category: Option<String>,
    /// Comma-separated skill selection.
    pub skill: Option<String>,
}

/// GET /jobs - Active listings with search and facet filters applied
/// in-memory, plus the facet values derived from the full active set.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Value> {
    let jobs = state.store.list_active_jobs().await?;

    let mut filter = JobFilter::new();
    if let Some(term) = query.search {
        filter.set_search(term);
    }
    for category in split_selection(query.category.as_deref()) {
        filter.toggle_category(category);
    }
    for skill in split_selection(query.skill.as_deref()) {
        filter.toggle_skill(skill);
    }

    let shown = filter.apply(&jobs);
    let shown_count = shown.len();

    let _ = state.cache.revalidated("/jobs").await;

    Ok(ApiResponse::success(json!({
        "jobs": shown,
        "total": jobs.len(),
        "shown": shown_count,
        "available_categories": available_categories(&jobs),
        "available_skills": available_skills(&jobs),
    })))
}

/// GET /jobs/:id - Detail view for one active listing. The view counter
/// bump is fire-and-forget; a failed bump never fails the page.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    let job = state
        .store
        .job_by_id(id)
        .await?
        .filter(|job| job.is_active)
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    let store = state.store.clone();
    tokio::spawn(async move {
        if let Err(e) = store.increment_job_views(id).await {
            tracing::warn!(job_id = %id, "view count increment failed: {}", e);
        }
    });

    Ok(ApiResponse::success(json!({ "job": job })))
}

fn split_selection(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
