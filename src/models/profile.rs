use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Closed set: the role string from the database is parsed
/// exhaustively so a typo'd role can never pass an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Junior,
    Business,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Junior => "junior",
            Role::Business => "business",
            Role::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(Role::Junior),
            "business" => Ok(Role::Business),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application-level user record, distinct from the raw session identity.
/// Read by every authorization check; deleted only by the admin action
/// (deletion cascades to the profile's jobs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub company_name: Option<String>,
    pub first_name: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Display name fallback chain: company, first name, then the local part
    /// of the email address.
    pub fn display_name(&self) -> &str {
        if let Some(company) = self.company_name.as_deref() {
            if !company.is_empty() {
                return company;
            }
        }
        if let Some(first) = self.first_name.as_deref() {
            if !first.is_empty() {
                return first;
            }
        }
        self.email.split('@').next().unwrap_or(&self.email)
    }
}
