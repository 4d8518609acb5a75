use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::{hash_password, verify_password};
use crate::models::{Profile, Role};
use crate::store::Store;

use super::validate::{validate_email, validate_min_length};
use super::ActionError;

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub company_name: Option<String>,
    pub first_name: Option<String>,
}

/// Validate credentials and return the matching profile. Token issuance and
/// the redirect to `/` happen at the HTTP layer.
pub async fn login(store: &dyn Store, form: LoginForm) -> Result<Profile, ActionError> {
    let email = form.email.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    validate_email(&email).map_err(ActionError::Validation)?;
    validate_min_length(
        &password,
        MIN_PASSWORD_LENGTH,
        "Password must be at least 6 characters",
    )
    .map_err(ActionError::Validation)?;

    let profile = store
        .profile_by_email(&email)
        .await?
        .ok_or(ActionError::InvalidCredentials)?;

    let verified = verify_password(&password, &profile.password_hash)
        .map_err(|e| ActionError::Store(e.to_string()))?;
    if !verified {
        return Err(ActionError::InvalidCredentials);
    }

    info!(user_id = %profile.id, "user logged in");
    Ok(profile)
}

/// Create a profile for a new account. Role is restricted to the two
/// self-service roles; admin accounts are never self-assigned.
pub async fn signup(store: &dyn Store, form: SignupForm) -> Result<Profile, ActionError> {
    let email = form.email.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    validate_email(&email).map_err(ActionError::Validation)?;
    validate_min_length(
        &password,
        MIN_PASSWORD_LENGTH,
        "Password must be at least 6 characters",
    )
    .map_err(ActionError::Validation)?;

    let role = match form.role.as_deref() {
        Some("business") => Role::Business,
        Some("junior") => Role::Junior,
        _ => return Err(ActionError::Validation("Please select a role".to_string())),
    };

    let company_name = form
        .company_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    if role == Role::Business && company_name.is_none() {
        return Err(ActionError::Validation(
            "Company name is required for business accounts".to_string(),
        ));
    }

    if store.profile_by_email(&email).await?.is_some() {
        return Err(ActionError::Conflict("User already registered".to_string()));
    }

    let password_hash = hash_password(&password).map_err(|e| ActionError::Store(e.to_string()))?;

    let profile = Profile {
        id: Uuid::new_v4(),
        email,
        role,
        company_name: if role == Role::Business { company_name } else { None },
        first_name: form.first_name,
        password_hash,
        created_at: Utc::now(),
    };

    store.insert_profile(&profile).await?;

    info!(user_id = %profile.id, role = %profile.role, "profile created");
    Ok(profile)
}
