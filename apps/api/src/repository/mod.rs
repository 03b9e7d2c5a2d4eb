//! Storage boundaries the matching endpoints depend on.
//!
//! `AppState` carries `Arc<dyn JobRepository>` and `Arc<dyn ProfileRepository>`;
//! production wires the Postgres implementations, tests wire `memory`.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::types::{JobInput, ProfileInput};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Active postings, newest first, at most `limit`.
    async fn active_jobs(&self, limit: i64) -> Result<Vec<JobInput>, AppError>;

    async fn find_job(&self, job_id: i32) -> Result<Option<JobInput>, AppError>;

    /// Ids of every job the user has applied to.
    async fn applied_job_ids(&self, user_id: i32) -> Result<HashSet<i32>, AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_profile(&self, user_id: i32) -> Result<Option<ProfileInput>, AppError>;

    /// Replaces the stored skill list. Returns `false` when the user does not exist.
    async fn update_skills(&self, user_id: i32, skills: &[String]) -> Result<bool, AppError>;
}
