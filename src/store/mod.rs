// Storage seam for the database collaborator. Actions talk to `dyn Store`
// so the mutation template can be verified against an in-memory double.
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Job, JobWithOwner, Profile};

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgStore;

/// Errors from the database collaborator. `Database` carries the
/// collaborator's message verbatim; no translation layer exists above it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    // Profiles
    async fn insert_profile(&self, profile: &Profile) -> Result<(), StoreError>;
    async fn profile_by_id(&self, id: Uuid) -> Result<Option<Profile>, StoreError>;
    async fn profile_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError>;
    /// All profiles, newest first.
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;
    /// Deletes the profile and, by cascade, every job it owns.
    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError>;

    // Jobs
    async fn insert_job(&self, job: &Job) -> Result<(), StoreError>;
    async fn job_by_id(&self, id: Uuid) -> Result<Option<Job>, StoreError>;
    /// Active jobs only, newest first. Inactive jobs never appear here.
    async fn list_active_jobs(&self) -> Result<Vec<Job>, StoreError>;
    /// All jobs owned by one business, newest first, active or not.
    async fn list_jobs_by_business(&self, business_id: Uuid) -> Result<Vec<Job>, StoreError>;
    /// Every job joined with its owner's contact details, newest first.
    async fn list_all_jobs(&self) -> Result<Vec<JobWithOwner>, StoreError>;
    async fn set_job_active(&self, id: Uuid, is_active: bool) -> Result<(), StoreError>;
    async fn delete_job(&self, id: Uuid) -> Result<(), StoreError>;
    /// Best-effort view counter bump; callers log and swallow failures.
    async fn increment_job_views(&self, id: Uuid) -> Result<(), StoreError>;
}
