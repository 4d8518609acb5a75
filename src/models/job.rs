use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!(concat!("unknown ", stringify!($name), ": {}"), other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(LocationType {
    Remote => "remote",
    OnSite => "on-site",
    Hybrid => "hybrid",
});

string_enum!(EmploymentType {
    FullTime => "full-time",
    PartTime => "part-time",
    Contract => "contract",
    Internship => "internship",
});

string_enum!(ExperienceLevel {
    Entry => "entry",
    Junior => "junior",
    Mid => "mid",
    Senior => "senior",
});

string_enum!(CompensationType {
    Unpaid => "unpaid",
    Stipend => "stipend",
    Hourly => "hourly",
    Salary => "salary",
});

/// A posted opportunity listing. Owned by exactly one business profile;
/// `is_active = false` hides it from the public listing without deleting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub location_type: LocationType,
    pub employment_type: EmploymentType,
    pub experience_level: ExperienceLevel,
    pub compensation_type: CompensationType,
    pub compensation_amount: Option<String>,
    pub skills: Vec<String>,
    pub application_deadline: Option<NaiveDate>,
    pub application_email: String,
    pub company_name: String,
    pub business_id: Uuid,
    pub is_active: bool,
    pub views: i64,
    pub created_at: DateTime<Utc>,
}

/// Admin moderation row: a job joined with its owner's contact details.
#[derive(Debug, Clone, Serialize)]
pub struct JobWithOwner {
    #[serde(flatten)]
    pub job: Job,
    pub owner_email: String,
    pub owner_company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_type_uses_wire_spelling() {
        assert_eq!(LocationType::from_str("on-site").unwrap(), LocationType::OnSite);
        assert_eq!(LocationType::OnSite.as_str(), "on-site");
        assert!(LocationType::from_str("onsite").is_err());
    }

    #[test]
    fn employment_type_round_trips() {
        for text in ["full-time", "part-time", "contract", "internship"] {
            assert_eq!(EmploymentType::from_str(text).unwrap().as_str(), text);
        }
    }

    #[test]
    fn compensation_and_experience_reject_unknowns() {
        assert!(CompensationType::from_str("equity").is_err());
        assert!(ExperienceLevel::from_str("principal").is_err());
    }

    #[test]
    fn enums_serialize_as_wire_strings() {
        assert_eq!(serde_json::to_value(LocationType::OnSite).unwrap(), "on-site");
        assert_eq!(serde_json::to_value(EmploymentType::FullTime).unwrap(), "full-time");
        assert_eq!(serde_json::to_value(CompensationType::Salary).unwrap(), "salary");
    }
}
