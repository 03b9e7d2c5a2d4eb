use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::matching::types::JobInput;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub job_id: i32,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: String,
}

impl From<JobRow> for JobInput {
    fn from(row: JobRow) -> Self {
        JobInput {
            id: row.job_id,
            title: row.title,
            description: row.description,
            requirements: row.requirements,
            skills: row.skills.unwrap_or_default(),
            experience: Some(row.experience),
        }
    }
}
