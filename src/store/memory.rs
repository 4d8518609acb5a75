// In-memory store used to verify the action template without a database.
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Job, JobWithOwner, Profile};

use super::{Store, StoreError};

#[derive(Default)]
pub struct MemStore {
    profiles: RwLock<HashMap<Uuid, Profile>>,
    jobs: RwLock<HashMap<Uuid, Job>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

fn newest_first<T, F: Fn(&T) -> chrono::DateTime<chrono::Utc>>(items: &mut [T], created_at: F) {
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}

#[async_trait]
impl Store for MemStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;
        if profiles.values().any(|p| p.email == profile.email) {
            return Err(StoreError::Conflict("User already registered".to_string()));
        }
        profiles.insert(profile.id, profile.clone());
        Ok(())
    }

    async fn profile_by_id(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn profile_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self
            .profiles
            .read()
            .await
            .values()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let mut profiles: Vec<Profile> = self.profiles.read().await.values().cloned().collect();
        newest_first(&mut profiles, |p| p.created_at);
        Ok(profiles)
    }

    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError> {
        if self.profiles.write().await.remove(&id).is_none() {
            return Err(StoreError::NotFound("User not found".to_string()));
        }
        // Mirror the FK cascade: the profile's jobs go with it.
        self.jobs.write().await.retain(|_, job| job.business_id != id);
        Ok(())
    }

    async fn insert_job(&self, job: &Job) -> Result<(), StoreError> {
        self.jobs.write().await.insert(job.id, job.clone());
        Ok(())
    }

    async fn job_by_id(&self, id: Uuid) -> Result<Option<Job>, StoreError> {
        Ok(self.jobs.read().await.get(&id).cloned())
    }

    async fn list_active_jobs(&self) -> Result<Vec<Job>, StoreError> {
        let mut jobs: Vec<Job> = self
            .jobs
            .read()
            .await
            .values()
            .filter(|j| j.is_active)
            .cloned()
            .collect();
        newest_first(&mut jobs, |j| j.created_at);
        Ok(jobs)
    }

    async fn list_jobs_by_business(&self, business_id: Uuid) -> Result<Vec<Job>, StoreError> {
        let mut jobs: Vec<Job> = self
            .jobs
            .read()
            .await
            .values()
            .filter(|j| j.business_id == business_id)
            .cloned()
            .collect();
        newest_first(&mut jobs, |j| j.created_at);
        Ok(jobs)
    }

    async fn list_all_jobs(&self) -> Result<Vec<JobWithOwner>, StoreError> {
        let profiles = self.profiles.read().await;
        let mut jobs: Vec<JobWithOwner> = self
            .jobs
            .read()
            .await
            .values()
            .map(|job| {
                let owner = profiles.get(&job.business_id);
                JobWithOwner {
                    job: job.clone(),
                    owner_email: owner.map(|p| p.email.clone()).unwrap_or_default(),
                    owner_company: owner.and_then(|p| p.company_name.clone()),
                }
            })
            .collect();
        newest_first(&mut jobs, |j| j.job.created_at);
        Ok(jobs)
    }

    async fn set_job_active(&self, id: Uuid, is_active: bool) -> Result<(), StoreError> {
        match self.jobs.write().await.get_mut(&id) {
            Some(job) => {
                job.is_active = is_active;
                Ok(())
            }
            None => Err(StoreError::NotFound("Job not found".to_string())),
        }
    }

    async fn delete_job(&self, id: Uuid) -> Result<(), StoreError> {
        if self.jobs.write().await.remove(&id).is_none() {
            return Err(StoreError::NotFound("Job not found".to_string()));
        }
        Ok(())
    }

    async fn increment_job_views(&self, id: Uuid) -> Result<(), StoreError> {
        if let Some(job) = self.jobs.write().await.get_mut(&id) {
            job.views += 1;
        }
        Ok(())
    }
}
