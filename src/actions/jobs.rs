use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::middleware::Session;
use crate::models::{Job, Role};
use crate::store::Store;

use super::validate::{
    parse_deadline, parse_enum, parse_skills, validate_max_length, validate_min_length,
    validate_required_text,
};
use super::{require_role, ActionError};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub location_type: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub compensation_type: Option<String>,
    pub compensation_amount: Option<String>,
    pub skills: Option<String>,
    pub application_deadline: Option<String>,
}

/// Post a new listing for the calling business. The company name and
/// application email come from the caller's profile, never from the form.
pub async fn create_job(
    store: &dyn Store,
    session: Option<&Session>,
    form: CreateJobForm,
) -> Result<Job, ActionError> {
    let ctx = require_role(store, session, Role::Business).await?;

    let title = form.title.unwrap_or_default();
    validate_required_text(
        &title,
        100,
        "Job title is required",
        "Job title must be less than 100 characters",
    )
    .map_err(ActionError::Validation)?;

    let description = form.description.unwrap_or_default();
    validate_min_length(&description, 10, "Description must be at least 10 characters")
        .map_err(ActionError::Validation)?;
    validate_max_length(&description, 5000, "Description must be less than 5000 characters")
        .map_err(ActionError::Validation)?;

    let location = form.location.unwrap_or_default();
    validate_required_text(
        &location,
        100,
        "Location is required",
        "Location must be less than 100 characters",
    )
    .map_err(ActionError::Validation)?;

    let location_type = parse_enum(form.location_type.as_deref(), "Please select a location type")
        .map_err(ActionError::Validation)?;
    let employment_type = parse_enum(
        form.employment_type.as_deref(),
        "Please select an employment type",
    )
    .map_err(ActionError::Validation)?;
    let experience_level = parse_enum(
        form.experience_level.as_deref(),
        "Please select an experience level",
    )
    .map_err(ActionError::Validation)?;
    let compensation_type = parse_enum(
        form.compensation_type.as_deref(),
        "Please select a compensation type",
    )
    .map_err(ActionError::Validation)?;

    let application_deadline =
        parse_deadline(form.application_deadline.as_deref()).map_err(ActionError::Validation)?;

    let job = Job {
        id: Uuid::new_v4(),
        title,
        description,
        location,
        location_type,
        employment_type,
        experience_level,
        compensation_type,
        compensation_amount: form
            .compensation_amount
            .map(|amount| amount.trim().to_string())
            .filter(|amount| !amount.is_empty()),
        skills: parse_skills(form.skills.as_deref()),
        application_deadline,
        application_email: ctx.profile.email.clone(),
        company_name: ctx.profile.company_name.clone().unwrap_or_default(),
        business_id: ctx.user_id,
        is_active: true,
        views: 0,
        created_at: Utc::now(),
    };

    store.insert_job(&job).await?;

    info!(job_id = %job.id, business_id = %job.business_id, "job posted");
    Ok(job)
}

/// Activate or deactivate one of the caller's own listings. Setting the
/// current value again succeeds without effect.
pub async fn update_job_status(
    store: &dyn Store,
    session: Option<&Session>,
    job_id: Uuid,
    is_active: bool,
) -> Result<(), ActionError> {
    let ctx = require_role(store, session, Role::Business).await?;

    let job = store
        .job_by_id(job_id)
        .await?
        .ok_or_else(|| ActionError::NotFound("Job not found".to_string()))?;

    if job.business_id != ctx.user_id {
        return Err(ActionError::Unauthorized(
            "Unauthorized - you can only update your own jobs".to_string(),
        ));
    }

    store.set_job_active(job_id, is_active).await?;

    info!(job_id = %job_id, is_active, "job status updated");
    Ok(())
}

/// Delete one of the caller's own listings. Deleting a job that is already
/// gone reports not found rather than silently succeeding.
pub async fn delete_job(
    store: &dyn Store,
    session: Option<&Session>,
    job_id: Uuid,
) -> Result<(), ActionError> {
    let ctx = require_role(store, session, Role::Business).await?;

    let job = store
        .job_by_id(job_id)
        .await?
        .ok_or_else(|| ActionError::NotFound("Job not found".to_string()))?;

    if job.business_id != ctx.user_id {
        return Err(ActionError::Unauthorized(
            "Unauthorized - you can only delete your own jobs".to_string(),
        ));
    }

    store.delete_job(job_id).await?;

    info!(job_id = %job_id, "job deleted");
    Ok(())
}

/// The caller's own listings, active and inactive alike, newest first.
pub async fn my_jobs(store: &dyn Store, session: Option<&Session>) -> Result<Vec<Job>, ActionError> {
    let ctx = require_role(store, session, Role::Business).await?;
    Ok(store.list_jobs_by_business(ctx.user_id).await?)
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{seed_profile, session_for};
    use super::*;
    use crate::store::memory::MemStore;
    use crate::store::Store;

    fn valid_form() -> CreateJobForm {
        CreateJobForm {
            title: Some("Junior Rust Engineer".to_string()),
            description: Some("Build and maintain backend services.".to_string()),
            location: Some("Berlin".to_string()),
            location_type: Some("hybrid".to_string()),
            employment_type: Some("full-time".to_string()),
            experience_level: Some("junior".to_string()),
            compensation_type: Some("salary".to_string()),
            compensation_amount: Some("55000".to_string()),
            skills: Some("Rust, SQL".to_string()),
            application_deadline: Some("2026-12-31".to_string()),
        }
    }

    #[tokio::test]
    async fn create_requires_the_business_role_before_validating() {
        let store = MemStore::new();
        let junior = seed_profile(&store, Role::Junior, None).await;
        let session = session_for(&junior);

        // Form is deliberately empty: the role check must fire first.
        let err = create_job(&store, Some(&session), CreateJobForm::default())
            .await
            .unwrap_err();
        assert_eq!(err, ActionError::Unauthorized("Unauthorized".to_string()));
        assert_eq!(store.job_count().await, 0);

        let err = create_job(&store, None, valid_form()).await.unwrap_err();
        assert_eq!(err, ActionError::NotAuthenticated);
        assert_eq!(store.job_count().await, 0);
    }

    #[tokio::test]
    async fn create_rejects_each_invalid_field_with_its_message() {
        let store = MemStore::new();
        let business = seed_profile(&store, Role::Business, Some("Acme")).await;
        let session = session_for(&business);

        let cases: Vec<(CreateJobForm, &str)> = vec![
            (
                CreateJobForm { title: None, ..valid_form() },
                "Job title is required",
            ),
            (
                CreateJobForm { title: Some("x".repeat(101)), ..valid_form() },
                "Job title must be less than 100 characters",
            ),
            (
                CreateJobForm { description: Some("too short".to_string()), ..valid_form() },
                "Description must be at least 10 characters",
            ),
            (
                CreateJobForm { description: Some("x".repeat(5001)), ..valid_form() },
                "Description must be less than 5000 characters",
            ),
            (
                CreateJobForm { location: Some(String::new()), ..valid_form() },
                "Location is required",
            ),
            (
                CreateJobForm { location_type: Some("moon".to_string()), ..valid_form() },
                "Please select a location type",
            ),
            (
                CreateJobForm { employment_type: None, ..valid_form() },
                "Please select an employment type",
            ),
            (
                CreateJobForm { experience_level: Some("principal".to_string()), ..valid_form() },
                "Please select an experience level",
            ),
            (
                CreateJobForm { compensation_type: Some("equity".to_string()), ..valid_form() },
                "Please select a compensation type",
            ),
            (
                CreateJobForm { application_deadline: Some("soon".to_string()), ..valid_form() },
                "Application deadline must be a valid date",
            ),
        ];

        for (form, message) in cases {
            let err = create_job(&store, Some(&session), form).await.unwrap_err();
            assert_eq!(err, ActionError::Validation(message.to_string()));
        }
        assert_eq!(store.job_count().await, 0);
    }

    #[tokio::test]
    async fn create_fills_ownership_fields_from_the_profile() {
        let store = MemStore::new();
        let business = seed_profile(&store, Role::Business, Some("Acme")).await;
        let session = session_for(&business);

        let job = create_job(&store, Some(&session), valid_form()).await.unwrap();
        assert_eq!(job.business_id, business.id);
        assert_eq!(job.company_name, "Acme");
        assert_eq!(job.application_email, business.email);
        assert!(job.is_active);
        assert_eq!(job.views, 0);
        assert_eq!(job.skills, vec!["Rust", "SQL"]);
        assert_eq!(store.job_count().await, 1);
    }

    #[tokio::test]
    async fn status_update_is_owner_only() {
        let store = MemStore::new();
        let owner = seed_profile(&store, Role::Business, Some("Acme")).await;
        let other = seed_profile(&store, Role::Business, Some("Globex")).await;
        let job = create_job(&store, Some(&session_for(&owner)), valid_form())
            .await
            .unwrap();

        let err = update_job_status(&store, Some(&session_for(&other)), job.id, false)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::Unauthorized("Unauthorized - you can only update your own jobs".to_string())
        );
        assert!(store.job_by_id(job.id).await.unwrap().unwrap().is_active);
    }

    #[tokio::test]
    async fn setting_the_current_status_again_is_harmless() {
        let store = MemStore::new();
        let owner = seed_profile(&store, Role::Business, Some("Acme")).await;
        let session = session_for(&owner);
        let job = create_job(&store, Some(&session), valid_form()).await.unwrap();

        update_job_status(&store, Some(&session), job.id, false).await.unwrap();
        update_job_status(&store, Some(&session), job.id, false).await.unwrap();
        assert!(!store.job_by_id(job.id).await.unwrap().unwrap().is_active);

        update_job_status(&store, Some(&session), job.id, true).await.unwrap();
        assert!(store.job_by_id(job.id).await.unwrap().unwrap().is_active);
    }

    #[tokio::test]
    async fn deactivated_jobs_leave_the_public_listing_but_not_the_dashboard() {
        let store = MemStore::new();
        let owner = seed_profile(&store, Role::Business, Some("Acme")).await;
        let session = session_for(&owner);
        let job = create_job(&store, Some(&session), valid_form()).await.unwrap();

        update_job_status(&store, Some(&session), job.id, false).await.unwrap();

        assert!(store.list_active_jobs().await.unwrap().is_empty());
        let mine = my_jobs(&store, Some(&session)).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, job.id);
    }

    #[tokio::test]
    async fn delete_is_owner_only_and_not_idempotent() {
        let store = MemStore::new();
        let owner = seed_profile(&store, Role::Business, Some("Acme")).await;
        let other = seed_profile(&store, Role::Business, Some("Globex")).await;
        let session = session_for(&owner);
        let job = create_job(&store, Some(&session), valid_form()).await.unwrap();

        let err = delete_job(&store, Some(&session_for(&other)), job.id)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::Unauthorized("Unauthorized - you can only delete your own jobs".to_string())
        );

        delete_job(&store, Some(&session), job.id).await.unwrap();
        assert_eq!(store.job_count().await, 0);

        let err = delete_job(&store, Some(&session), job.id).await.unwrap_err();
        assert_eq!(err, ActionError::NotFound("Job not found".to_string()));
    }

    #[tokio::test]
    async fn my_jobs_shows_only_the_callers_listings_newest_first() {
        let store = MemStore::new();
        let owner = seed_profile(&store, Role::Business, Some("Acme")).await;
        let other = seed_profile(&store, Role::Business, Some("Globex")).await;
        let session = session_for(&owner);

        let first = create_job(&store, Some(&session), valid_form()).await.unwrap();
        let second = create_job(
            &store,
            Some(&session),
            CreateJobForm { title: Some("Backend Developer".to_string()), ..valid_form() },
        )
        .await
        .unwrap();
        create_job(&store, Some(&session_for(&other)), valid_form())
            .await
            .unwrap();

        let mine = my_jobs(&store, Some(&session)).await.unwrap();
        let ids: Vec<_> = mine.iter().map(|job| job.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }
}
