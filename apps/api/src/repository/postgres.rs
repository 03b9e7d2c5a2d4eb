use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::matching::types::{JobInput, ProfileInput};
use crate::models::job::JobRow;
use crate::models::user::UserRow;
use crate::repository::{JobRepository, ProfileRepository};

const JOB_COLUMNS: &str =
    "job_id, title, description, requirements, skills, experience";

/// `users` has no timestamp columns; only the skill list is rewritten.
const UPDATE_SKILLS: &str = "UPDATE users SET skills = $1 WHERE id = $2";

#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn active_jobs(&self, limit: i64) -> Result<Vec<JobInput>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE status = 'active' ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobInput::from).collect())
    }

    async fn find_job(&self, job_id: i32) -> Result<Option<JobInput>, AppError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE job_id = $1"
        ))
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(JobInput::from))
    }

    async fn applied_job_ids(&self, user_id: i32) -> Result<HashSet<i32>, AppError> {
        let ids: Vec<i32> =
            sqlx::query_scalar("SELECT job_id FROM applications WHERE user_id = $1")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(ids.into_iter().collect())
    }
}

#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_profile(&self, user_id: i32) -> Result<Option<ProfileInput>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT name, skills, experience FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileInput::from))
    }

    async fn update_skills(&self, user_id: i32, skills: &[String]) -> Result<bool, AppError> {
        let result = sqlx::query(UPDATE_SKILLS)
            .bind(skills)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
