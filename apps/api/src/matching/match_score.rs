//! Match Score Calculator — bounded 0–100 fit between a skill set and a job.
//!
//! Skills carry 70 points. Experience carries a flat 15 whenever both sides
//! state one; the ranges themselves are not compared.

use crate::matching::types::{non_empty, JobInput};
use crate::matching::vocabulary::SkillVocabulary;

const SKILL_WEIGHT: f64 = 70.0;
const EXPERIENCE_WEIGHT: f64 = 30.0;
const EXPERIENCE_CREDIT: f64 = 0.5;

/// Declared job skills merged with skills found in the posting text.
///
/// De-duplicated case-insensitively; the first spelling seen wins.
pub fn job_skill_set(vocabulary: &SkillVocabulary, job: &JobInput) -> Vec<String> {
    let extracted = vocabulary.extract_skills(&job.posting_text());
    let mut merged: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for skill in job.skills.iter().chain(extracted.iter()) {
        let skill = skill.trim();
        if skill.is_empty() {
            continue;
        }
        let folded = skill.to_lowercase();
        if !seen.contains(&folded) {
            seen.push(folded);
            merged.push(skill.to_string());
        }
    }
    merged
}

/// Symmetric, case-insensitive containment test.
fn skills_overlap(user_skill: &str, job_skill: &str) -> bool {
    let user_skill = user_skill.to_lowercase();
    let job_skill = job_skill.to_lowercase();
    job_skill.contains(&user_skill) || user_skill.contains(&job_skill)
}

/// Scores how well `user_skills` and `user_experience` fit `job`.
///
/// `round(min(skills/|job_skills| * 70 + experience, 100))`, where a user
/// skill counts once if it overlaps any job skill.
pub fn match_score(
    vocabulary: &SkillVocabulary,
    user_skills: &[String],
    user_experience: Option<&str>,
    job: &JobInput,
) -> u32 {
    let job_skills = job_skill_set(vocabulary, job);
    let user_skills: Vec<&str> = user_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let mut score = 0.0_f64;

    if !job_skills.is_empty() && !user_skills.is_empty() {
        let matched = user_skills
            .iter()
            .filter(|user_skill| job_skills.iter().any(|j| skills_overlap(user_skill, j)))
            .count();
        score += matched as f64 / job_skills.len() as f64 * SKILL_WEIGHT;
    }

    let user_has_experience = user_experience.is_some_and(|e| !e.trim().is_empty());
    if user_has_experience && non_empty(&job.experience).is_some() {
        score += EXPERIENCE_WEIGHT * EXPERIENCE_CREDIT;
    }

    score.min(100.0).round() as u32
}

/// Human-readable verdict for a match score.
pub fn match_verdict(score: u32) -> &'static str {
    if score >= 70 {
        "Great match!"
    } else if score >= 50 {
        "Good match"
    } else {
        "Consider improving your skills"
    }
}
