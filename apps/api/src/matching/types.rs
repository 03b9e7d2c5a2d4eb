//! Plain value types consumed and produced by the matching engine.

use serde::{Deserialize, Serialize};

/// Read-only view of a job seeker for scoring purposes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    pub skills: Vec<String>,
    pub experience: Option<String>,
}

/// Read-only view of a job posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobInput {
    #[serde(rename = "job_id")]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
}

/// A job annotated with its blended recommendation score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobInput,
    pub recommendation_score: u32,
    pub matching_skills: Vec<String>,
}

/// Absent and blank optional text are the same thing to every scorer.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl JobInput {
    /// `title description requirements`, the text skills are extracted from.
    pub fn posting_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            non_empty(&self.requirements).unwrap_or("")
        )
    }

    /// Posting text plus the declared skills, the text compared against a profile.
    pub fn full_text(&self) -> String {
        format!("{} {}", self.posting_text(), self.skills.join(" "))
    }
}

impl ProfileInput {
    pub fn profile_text(&self) -> String {
        format!("{} {}", self.skills.join(" "), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_treats_blank_as_absent() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("   ".to_string())), None);
        assert_eq!(non_empty(&Some("2-5 years".to_string())), Some("2-5 years"));
    }

    #[test]
    fn test_full_text_without_requirements() {
        let job = JobInput {
            id: 1,
            title: "Backend Engineer".to_string(),
            description: "Build APIs".to_string(),
            requirements: None,
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            experience: None,
        };
        assert_eq!(job.full_text(), "Backend Engineer Build APIs  Rust SQL");
    }

    #[test]
    fn test_scored_job_serializes_flat_camel_case() {
        let scored = ScoredJob {
            job: JobInput {
                id: 7,
                title: "Dev".to_string(),
                ..Default::default()
            },
            recommendation_score: 42,
            matching_skills: vec!["rust".to_string()],
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["job_id"], 7);
        assert!(value.get("id").is_none());
        assert_eq!(value["title"], "Dev");
        assert_eq!(value["recommendationScore"], 42);
        assert_eq!(value["matchingSkills"][0], "rust");
    }
}
