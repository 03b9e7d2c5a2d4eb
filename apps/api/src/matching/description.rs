//! Templated job description synthesis.

use rand::Rng;
use serde::Deserialize;

pub const DEFAULT_EXPERIENCE: &str = "2-5 years";
pub const DEFAULT_JOB_TYPE: &str = "Full-time";

const RESPONSIBILITIES: &[&str] = &[
    "Develop and maintain high-quality software solutions",
    "Collaborate with cross-functional teams",
    "Write clean, maintainable, and efficient code",
    "Participate in code reviews and technical discussions",
    "Contribute to architectural decisions",
    "Mentor junior team members",
];

const RESPONSIBILITY_COUNT: usize = 4;

const CLOSING: &str = "We offer competitive compensation, excellent benefits, and a collaborative work environment where you can grow your career.";

/// Skills arrive either as a JSON array or as one comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillList {
    List(Vec<String>),
    Csv(String),
}

impl SkillList {
    pub fn into_vec(self) -> Vec<String> {
        let raw = match self {
            SkillList::List(items) => items,
            SkillList::Csv(text) => text.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Inputs to the description generator, with defaults already applied.
#[derive(Debug, Clone)]
pub struct DescriptionRequest {
    pub title: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub job_type: String,
}

impl DescriptionRequest {
    pub fn new(
        title: impl Into<String>,
        skills: Vec<String>,
        experience: Option<String>,
        job_type: Option<String>,
    ) -> Self {
        let or_default = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            title: title.into(),
            skills,
            experience: or_default(experience, DEFAULT_EXPERIENCE),
            job_type: or_default(job_type, DEFAULT_JOB_TYPE),
        }
    }
}

fn intro_templates(title: &str) -> [String; 3] {
    [
        format!("We are seeking a talented {title} to join our dynamic team."),
        format!("Join our innovative company as a {title}."),
        format!("Exciting opportunity for a {title} to make an impact."),
    ]
}

fn requirement_lines(experience: &str) -> [String; 5] {
    [
        format!("{experience} of relevant experience"),
        "Strong problem-solving skills".to_string(),
        "Excellent communication abilities".to_string(),
        "Experience working in Agile environments".to_string(),
        "Bachelor's degree in Computer Science or related field".to_string(),
    ]
}

fn numbered<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assembles a job description. `rng` picks the intro sentence.
pub fn generate_description<R: Rng>(request: &DescriptionRequest, rng: &mut R) -> String {
    let intros = intro_templates(&request.title);
    let intro = &intros[rng.gen_range(0..intros.len())];

    format!(
        "{intro}\n\n**Key Responsibilities:**\n{}\n\n**Required Skills:**\n{}\n\n**Requirements:**\n{}\n\n**Job Type:** {}\n\n{CLOSING}",
        numbered(&RESPONSIBILITIES[..RESPONSIBILITY_COUNT]),
        numbered(&request.skills),
        numbered(&requirement_lines(&request.experience)),
        request.job_type,
    )
}
