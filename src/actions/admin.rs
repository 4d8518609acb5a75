//! Moderation operations. Every entry point re-checks the admin role; there
//! is no ownership rule here, admins may remove anything.
use tracing::info;
use uuid::Uuid;

use crate::middleware::Session;
use crate::models::{JobWithOwner, Profile};
use crate::store::Store;

use super::{require_admin, ActionError};

/// Every job on the board, active or not, joined with owner contact details.
pub async fn all_jobs(
    store: &dyn Store,
    session: Option<&Session>,
) -> Result<Vec<JobWithOwner>, ActionError> {
    require_admin(store, session).await?;
    Ok(store.list_all_jobs().await?)
}

/// Every registered profile, newest first.
pub async fn all_users(
    store: &dyn Store,
    session: Option<&Session>,
) -> Result<Vec<Profile>, ActionError> {
    require_admin(store, session).await?;
    Ok(store.list_profiles().await?)
}

pub async fn delete_job(
    store: &dyn Store,
    session: Option<&Session>,
    job_id: Uuid,
) -> Result<(), ActionError> {
    let ctx = require_admin(store, session).await?;
    store.delete_job(job_id).await?;
    info!(job_id = %job_id, admin_id = %ctx.user_id, "job removed by admin");
    Ok(())
}

/// Remove a profile and, by cascade, every job it owns.
pub async fn delete_user(
    store: &dyn Store,
    session: Option<&Session>,
    user_id: Uuid,
) -> Result<(), ActionError> {
    let ctx = require_admin(store, session).await?;
    store.delete_profile(user_id).await?;
    info!(user_id = %user_id, admin_id = %ctx.user_id, "user removed by admin");
    Ok(())
}
