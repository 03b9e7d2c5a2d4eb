use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::matching::types::ProfileInput;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub name: String,
    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
}

impl From<UserRow> for ProfileInput {
    fn from(row: UserRow) -> Self {
        ProfileInput {
            name: row.name,
            skills: row.skills.unwrap_or_default(),
            experience: row.experience,
        }
    }
}
