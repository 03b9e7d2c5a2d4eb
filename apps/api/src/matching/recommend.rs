//! Recommendation Engine — ranks candidate jobs for a profile.
//!
//! combined = round(0.4 × similarity + 0.6 × match score)
//!
//! Applied jobs are dropped before scoring. Ties keep input order.

use std::collections::HashSet;

use tracing::debug;

use crate::matching::match_score::match_score;
use crate::matching::similarity::similarity;
use crate::matching::types::{JobInput, ProfileInput, ScoredJob};
use crate::matching::vocabulary::SkillVocabulary;

/// Maximum number of recommendations returned.
pub const RECOMMENDATION_LIMIT: usize = 10;

const SIMILARITY_WEIGHT: f64 = 0.4;
const MATCH_WEIGHT: f64 = 0.6;

/// Scores, ranks and truncates `jobs` for `profile`, skipping `applied_job_ids`.
pub fn recommend(
    vocabulary: &SkillVocabulary,
    profile: &ProfileInput,
    jobs: Vec<JobInput>,
    applied_job_ids: &HashSet<i32>,
) -> Vec<ScoredJob> {
    let user_text = profile.profile_text();
    let candidates = jobs.len();

    let mut scored: Vec<ScoredJob> = jobs
        .into_iter()
        .filter(|job| !applied_job_ids.contains(&job.id))
        .map(|job| score_job(vocabulary, profile, &user_text, job))
        .collect();

    // sort_by is stable: equal scores keep their input order
    scored.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));
    scored.truncate(RECOMMENDATION_LIMIT);

    debug!(
        candidates,
        excluded = applied_job_ids.len(),
        returned = scored.len(),
        "Ranked job recommendations"
    );
    scored
}

fn score_job(
    vocabulary: &SkillVocabulary,
    profile: &ProfileInput,
    user_text: &str,
    job: JobInput,
) -> ScoredJob {
    let job_text = job.full_text();
    let sim = similarity(user_text, &job_text);
    let ms = match_score(
        vocabulary,
        &profile.skills,
        profile.experience.as_deref(),
        &job,
    );
    let combined = (sim * SIMILARITY_WEIGHT + f64::from(ms) * MATCH_WEIGHT).round() as u32;

    let job_text_lower = job_text.to_lowercase();
    let matching_skills = profile
        .skills
        .iter()
        .filter(|s| !s.trim().is_empty() && job_text_lower.contains(&s.to_lowercase()))
        .cloned()
        .collect();

    ScoredJob {
        job,
        recommendation_score: combined.min(100),
        matching_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(skills: &[&str]) -> ProfileInput {
        ProfileInput {
            name: "Alice".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: None,
        }
    }

    fn make_job(id: i32, title: &str, description: &str, skills: &[&str]) -> JobInput {
        JobInput {
            id,
            title: title.to_string(),
            description: description.to_string(),
            requirements: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: Some("2-5 years".to_string()),
        }
    }

    #[test]
    fn test_overlapping_job_ranks_above_unrelated_job() {
        let vocab = SkillVocabulary::default();
        let profile = make_profile(&["react", "node"]);
        let jobs = vec![
            make_job(1, "Pastry Chef", "Bake bread and cakes", &[]),
            make_job(2, "React Engineer", "React and Node services", &["React"]),
        ];
        let ranked = recommend(&vocab, &profile, jobs, &HashSet::new());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].job.id, 2);
        assert!(ranked[0].recommendation_score > ranked[1].recommendation_score);
        assert_eq!(ranked[1].recommendation_score, 0);
    }

    #[test]
    fn test_applied_jobs_are_excluded() {
        let vocab = SkillVocabulary::default();
        let profile = make_profile(&["rust"]);
        let jobs = vec![
            make_job(4, "Rust Dev", "Rust", &["Rust"]),
            make_job(5, "Rust Lead", "Rust", &["Rust"]),
            make_job(6, "Go Dev", "Go", &["Go"]),
        ];
        let applied: HashSet<i32> = [5].into_iter().collect();
        let ranked = recommend(&vocab, &profile, jobs, &applied);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|s| s.job.id != 5));
    }

    #[test]
    fn test_result_capped_at_ten() {
        let vocab = SkillVocabulary::default();
        let profile = make_profile(&["sql"]);
        let jobs: Vec<JobInput> = (0..15)
            .map(|id| make_job(id, "Analyst", "SQL reporting", &["SQL"]))
            .collect();
        let applied: HashSet<i32> = [0, 1].into_iter().collect();
        let ranked = recommend(&vocab, &profile, jobs, &applied);
        assert_eq!(ranked.len(), RECOMMENDATION_LIMIT);
    }

    #[test]
    fn test_fewer_jobs_than_limit() {
        let vocab = SkillVocabulary::default();
        let ranked = recommend(
            &vocab,
            &make_profile(&["sql"]),
            vec![make_job(1, "Analyst", "SQL", &[])],
            &HashSet::new(),
        );
        assert_eq!(ranked.len(), 1);
        assert!(recommend(&vocab, &make_profile(&["sql"]), vec![], &HashSet::new()).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let vocab = SkillVocabulary::default();
        let profile = make_profile(&["rust"]);
        let jobs = vec![
            make_job(30, "Chef", "Cooking", &[]),
            make_job(10, "Baker", "Bread", &[]),
            make_job(20, "Waiter", "Service", &[]),
        ];
        let ranked = recommend(&vocab, &profile, jobs, &HashSet::new());
        let ids: Vec<i32> = ranked.iter().map(|s| s.job.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_matching_skills_are_profile_skills_found_in_job_text() {
        let vocab = SkillVocabulary::default();
        let profile = make_profile(&["React", "Docker", "Elixir"]);
        let jobs = vec![make_job(1, "Frontend", "react apps shipped with docker", &[])];
        let ranked = recommend(&vocab, &profile, jobs, &HashSet::new());
        assert_eq!(ranked[0].matching_skills, vec!["React", "Docker"]);
    }

    #[test]
    fn test_combined_score_blends_similarity_and_match() {
        let vocab = SkillVocabulary::default();
        let profile = make_profile(&["rust"]);
        let job = make_job(1, "Rust", "Rust", &["Rust"]);
        let sim = similarity(&profile.profile_text(), &job.full_text());
        let ms = match_score(&vocab, &profile.skills, None, &job);
        let expected = (sim * 0.4 + f64::from(ms) * 0.6).round() as u32;
        let ranked = recommend(&vocab, &profile, vec![job], &HashSet::new());
        assert_eq!(ranked[0].recommendation_score, expected);
        assert!(ranked[0].recommendation_score <= 100);
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let vocab = SkillVocabulary::default();
        let profile = make_profile(&["python", "django", "aws"]);
        let jobs = || {
            vec![
                make_job(1, "Python Dev", "Django and AWS", &["Python"]),
                make_job(2, "Data Engineer", "Python pipelines on AWS", &["SQL"]),
                make_job(3, "Frontend", "Vue", &["Vue"]),
            ]
        };
        let first: Vec<(i32, u32)> = recommend(&vocab, &profile, jobs(), &HashSet::new())
            .iter()
            .map(|s| (s.job.id, s.recommendation_score))
            .collect();
        let second: Vec<(i32, u32)> = recommend(&vocab, &profile, jobs(), &HashSet::new())
            .iter()
            .map(|s| (s.job.id, s.recommendation_score))
            .collect();
        assert_eq!(first, second);
    }
}
