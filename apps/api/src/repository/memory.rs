//! In-memory repositories for handler tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::types::{JobInput, ProfileInput};
use crate::repository::{JobRepository, ProfileRepository};

#[derive(Default)]
pub struct MemoryStore {
    /// Active jobs in posting order, oldest first.
    pub jobs: Vec<JobInput>,
    pub applications: Vec<(i32, i32)>,
    pub profiles: Mutex<HashMap<i32, ProfileInput>>,
}

impl MemoryStore {
    pub fn with_profile(self, user_id: i32, profile: ProfileInput) -> Self {
        self.profiles
            .lock()
            .expect("profile lock poisoned")
            .insert(user_id, profile);
        self
    }

    pub fn skills_of(&self, user_id: i32) -> Option<Vec<String>> {
        self.profiles
            .lock()
            .expect("profile lock poisoned")
            .get(&user_id)
            .map(|p| p.skills.clone())
    }
}

#[async_trait]
impl JobRepository for MemoryStore {
    async fn active_jobs(&self, limit: i64) -> Result<Vec<JobInput>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.jobs.iter().rev().take(limit).cloned().collect())
    }

    async fn find_job(&self, job_id: i32) -> Result<Option<JobInput>, AppError> {
        Ok(self.jobs.iter().find(|j| j.id == job_id).cloned())
    }

    async fn applied_job_ids(&self, user_id: i32) -> Result<HashSet<i32>, AppError> {
        Ok(self
            .applications
            .iter()
            .filter(|(user, _)| *user == user_id)
            .map(|(_, job)| *job)
            .collect())
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_profile(&self, user_id: i32) -> Result<Option<ProfileInput>, AppError> {
        Ok(self
            .profiles
            .lock()
            .expect("profile lock poisoned")
            .get(&user_id)
            .cloned())
    }

    async fn update_skills(&self, user_id: i32, skills: &[String]) -> Result<bool, AppError> {
        let mut profiles = self.profiles.lock().expect("profile lock poisoned");
        match profiles.get_mut(&user_id) {
            Some(profile) => {
                profile.skills = skills.to_vec();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
