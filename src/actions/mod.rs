// The action layer: every server-side operation re-authorizes, validates,
// performs exactly one mutation or query, and reports invalidated paths.
// Each action is self-contained; there is no shared session cache, so the
// profile lookup is repeated per call on purpose.
use thiserror::Error;
use uuid::Uuid;

use crate::middleware::Session;
use crate::models::{Profile, Role};
use crate::store::{Store, StoreError};

pub mod admin;
pub mod auth;
pub mod jobs;
pub mod validate;

/// Action-level error taxonomy. Everything crosses the action boundary as a
/// value with a user-facing message; the HTTP layer maps categories to
/// status codes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Collaborator failure, message passed through verbatim.
    #[error("{0}")]
    Store(String),
}

impl From<StoreError> for ActionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => ActionError::NotFound(msg),
            StoreError::Conflict(msg) => ActionError::Conflict(msg),
            StoreError::Database(msg) => ActionError::Store(msg),
        }
    }
}

/// Resolved caller identity: the session plus the freshly fetched profile.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub profile: Profile,
}

/// Authorization helper. Short-circuits in order: no session, no profile
/// row, wrong role. Called independently at the top of every action.
pub async fn require_role(
    store: &dyn Store,
    session: Option<&Session>,
    required: Role,
) -> Result<AuthContext, ActionError> {
    let session = session.ok_or(ActionError::NotAuthenticated)?;

    let profile = store
        .profile_by_id(session.user_id)
        .await?
        .ok_or(ActionError::ProfileNotFound)?;

    if profile.role != required {
        return Err(ActionError::Unauthorized("Unauthorized".to_string()));
    }

    Ok(AuthContext {
        user_id: session.user_id,
        profile,
    })
}

/// Admin variant of the role check, with the admin-specific refusal message.
pub async fn require_admin(
    store: &dyn Store,
    session: Option<&Session>,
) -> Result<AuthContext, ActionError> {
    let session = session.ok_or(ActionError::NotAuthenticated)?;

    let profile = store
        .profile_by_id(session.user_id)
        .await?
        .ok_or(ActionError::ProfileNotFound)?;

    if profile.role != Role::Admin {
        return Err(ActionError::Unauthorized(
            "Unauthorized - admin access required".to_string(),
        ));
    }

    Ok(AuthContext {
        user_id: session.user_id,
        profile,
    })
}
