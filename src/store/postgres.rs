use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::models::{Job, JobWithOwner, Profile};

use super::{Store, StoreError};

/// Postgres-backed store. One statement per trait method; correctness of
/// ownership checks above relies on per-statement atomicity, not locks.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a store over the lazily-connected shared pool.
    pub fn from_env() -> Result<Self, crate::database::manager::DatabaseError> {
        Ok(Self {
            pool: DatabaseManager::pool()?,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: Uuid,
    email: String,
    role: String,
    company_name: Option<String>,
    first_name: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = StoreError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse()
            .map_err(|e: String| StoreError::Database(e))?;
        Ok(Profile {
            id: row.id,
            email: row.email,
            role,
            company_name: row.company_name,
            first_name: row.first_name,
            password_hash: row.password_hash,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: Uuid,
    title: String,
    description: String,
    location: String,
    location_type: String,
    employment_type: String,
    experience_level: String,
    compensation_type: String,
    compensation_amount: Option<String>,
    skills: Vec<String>,
    application_deadline: Option<NaiveDate>,
    application_email: String,
    company_name: String,
    business_id: Uuid,
    is_active: bool,
    views: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = StoreError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let invalid = |e: String| StoreError::Database(e);
        Ok(Job {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            location_type: row.location_type.parse().map_err(invalid)?,
            employment_type: row.employment_type.parse().map_err(invalid)?,
            experience_level: row.experience_level.parse().map_err(invalid)?,
            compensation_type: row.compensation_type.parse().map_err(invalid)?,
            compensation_amount: row.compensation_amount,
            skills: row.skills,
            application_deadline: row.application_deadline,
            application_email: row.application_email,
            company_name: row.company_name,
            business_id: row.business_id,
            is_active: row.is_active,
            views: row.views,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AdminJobRow {
    #[sqlx(flatten)]
    job: JobRow,
    owner_email: String,
    owner_company: Option<String>,
}

const JOB_COLUMNS: &str = "id, title, description, location, location_type, employment_type, \
     experience_level, compensation_type, compensation_amount, skills, application_deadline, \
     application_email, company_name, business_id, is_active, views, created_at";

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO profiles (id, email, role, company_name, first_name, password_hash, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(profile.id)
        .bind(&profile.email)
        .bind(profile.role.as_str())
        .bind(&profile.company_name)
        .bind(&profile.first_name)
        .bind(&profile.password_hash)
        .bind(profile.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::Conflict("User already registered".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(())
    }

    async fn profile_by_id(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, email, role, company_name, first_name, password_hash, created_at \
             FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Profile::try_from).transpose()
    }

    async fn profile_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, email, role, company_name, first_name, password_hash, created_at \
             FROM profiles WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Profile::try_from).transpose()
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let rows = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, email, role, company_name, first_name, password_hash, created_at \
             FROM profiles ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Profile::try_from).collect()
    }

    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError> {
        // Jobs owned by this profile go with it via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("User not found".to_string()));
        }
        Ok(())
    }

    async fn insert_job(&self, job: &Job) -> Result<(), StoreError> {
        sqlx::query(&format!(
            "INSERT INTO jobs ({JOB_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)"
        ))
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(job.location_type.as_str())
        .bind(job.employment_type.as_str())
        .bind(job.experience_level.as_str())
        .bind(job.compensation_type.as_str())
        .bind(&job.compensation_amount)
        .bind(&job.skills)
        .bind(job.application_deadline)
        .bind(&job.application_email)
        .bind(&job.company_name)
        .bind(job.business_id)
        .bind(job.is_active)
        .bind(job.views)
        .bind(job.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn job_by_id(&self, id: Uuid) -> Result<Option<Job>, StoreError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Job::try_from).transpose()
    }

    async fn list_active_jobs(&self) -> Result<Vec<Job>, StoreError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE is_active = TRUE ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Job::try_from).collect()
    }

    async fn list_jobs_by_business(&self, business_id: Uuid) -> Result<Vec<Job>, StoreError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE business_id = $1 ORDER BY created_at DESC"
        ))
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Job::try_from).collect()
    }

    async fn list_all_jobs(&self) -> Result<Vec<JobWithOwner>, StoreError> {
        let rows = sqlx::query_as::<_, AdminJobRow>(
            "SELECT j.id, j.title, j.description, j.location, j.location_type, j.employment_type, \
                    j.experience_level, j.compensation_type, j.compensation_amount, j.skills, \
                    j.application_deadline, j.application_email, j.company_name, j.business_id, \
                    j.is_active, j.views, j.created_at, \
                    p.email AS owner_email, p.company_name AS owner_company \
             FROM jobs j JOIN profiles p ON p.id = j.business_id \
             ORDER BY j.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| {
                Ok(JobWithOwner {
                    job: Job::try_from(row.job)?,
                    owner_email: row.owner_email,
                    owner_company: row.owner_company,
                })
            })
            .collect()
    }

    async fn set_job_active(&self, id: Uuid, is_active: bool) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE jobs SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    async fn delete_job(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    async fn increment_job_views(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("UPDATE jobs SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
