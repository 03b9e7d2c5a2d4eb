//! Axum route handlers for the matching API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Multipart, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::matching::description::{generate_description, DescriptionRequest, SkillList};
use crate::matching::match_score::{match_score, match_verdict};
use crate::matching::recommend::recommend;
use crate::matching::types::{ProfileInput, ScoredJob};
use crate::resume::mime_from_filename;
use crate::state::AppState;

const OCTET_STREAM: &str = "application/octet-stream";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: i32,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ScoredJob>,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeResponse {
    pub message: String,
    pub extracted_skills: Vec<String>,
    pub total_skills: usize,
    pub match_score: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateDescriptionRequest {
    pub title: Option<String>,
    pub skills: Option<SkillList>,
    pub experience: Option<String>,
    #[serde(rename = "jobType")]
    pub job_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDescriptionResponse {
    pub message: String,
    pub description: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    pub user_id: i32,
    pub job_id: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreResponse {
    pub match_score: u32,
    pub user_skills: Vec<String>,
    pub job_skills: Vec<String>,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn load_profile(state: &AppState, user_id: i32) -> Result<ProfileInput, AppError> {
    state
        .profiles
        .find_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))
}

/// GET /api/ai/recommendations?user_id=
///
/// Ranks the newest active jobs against the user's skills, skipping jobs already applied to.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = load_profile(&state, params.user_id).await?;

    let jobs = state
        .jobs
        .active_jobs(state.config.recommendation_pool_size)
        .await?;
    let applied = state.jobs.applied_job_ids(params.user_id).await?;

    let recommendations = recommend(&state.vocabulary, &profile, jobs, &applied);

    info!(
        user_id = params.user_id,
        count = recommendations.len(),
        "Generated job recommendations"
    );

    Ok(Json(RecommendationsResponse {
        recommendations,
        message: "Recommendations generated based on your profile and skills".to_string(),
    }))
}

struct ResumeUpload {
    data: Bytes,
    mime_type: String,
}

/// POST /api/ai/analyze-resume (multipart: `user_id`, `resume`, optional `job_id`)
///
/// Extracts skills from the uploaded resume, stores them on the profile, and
/// optionally scores them against one job.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    let mut user_id: Option<i32> = None;
    let mut job_id: Option<i32> = None;
    let mut upload: Option<ResumeUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_id" => user_id = parse_id_field("user_id", &read_text(field).await?)?,
            "job_id" => job_id = parse_id_field("job_id", &read_text(field).await?)?,
            "resume" => {
                let declared = field.content_type().unwrap_or(OCTET_STREAM).to_string();
                let filename = field.file_name().unwrap_or_default().to_string();
                let mime_type = if declared == OCTET_STREAM {
                    mime_from_filename(&filename)
                        .map(str::to_string)
                        .unwrap_or(declared)
                } else {
                    declared
                };
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?;
                upload = Some(ResumeUpload { data, mime_type });
            }
            other => warn!(field = other, "Ignoring unexpected multipart field"),
        }
    }

    let user_id = user_id.ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;
    let upload = upload
        .filter(|u| !u.data.is_empty())
        .ok_or_else(|| AppError::Validation("Please upload a resume file".to_string()))?;
    if upload.data.len() > state.config.max_resume_bytes {
        return Err(AppError::Validation(format!(
            "Resume exceeds the {} byte limit",
            state.config.max_resume_bytes
        )));
    }

    load_profile(&state, user_id).await?;

    let reader = Arc::clone(&state.resume_reader);
    let ResumeUpload { data, mime_type } = upload;
    let resume_text = tokio::task::spawn_blocking(move || reader.extract_text(&data, &mime_type))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume extraction task failed: {e}")))??;

    let skills = state.vocabulary.extract_skills(&resume_text);
    if !state.profiles.update_skills(user_id, &skills).await? {
        return Err(AppError::NotFound(format!("User {user_id} not found")));
    }

    let score = match job_id {
        // Resume analysis scores skills only; no experience bonus.
        Some(job_id) => state
            .jobs
            .find_job(job_id)
            .await?
            .map(|job| match_score(&state.vocabulary, &skills, None, &job)),
        None => None,
    };

    info!(
        user_id,
        skills = skills.len(),
        match_score = ?score,
        "Analyzed resume"
    );

    Ok(Json(AnalyzeResumeResponse {
        message: "Resume analyzed successfully".to_string(),
        total_skills: skills.len(),
        extracted_skills: skills,
        match_score: score,
    }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart field: {e}")))
}

/// Blank values mean "not supplied".
fn parse_id_field(name: &str, raw: &str) -> Result<Option<i32>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(Some)
        .map_err(|_| AppError::Validation(format!("{name} must be an integer")))
}

/// POST /api/ai/generate-description
///
/// Builds a templated job description from title, skills, experience and job type.
pub async fn handle_generate_description(
    Json(request): Json<GenerateDescriptionRequest>,
) -> Result<Json<GenerateDescriptionResponse>, AppError> {
    let title = request
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    // An empty array is accepted; a missing field or an empty string is not.
    let skills = match request.skills {
        Some(SkillList::Csv(ref text)) if text.is_empty() => None,
        other => other.map(SkillList::into_vec),
    };

    let (title, skills) = match (title, skills) {
        (Some(title), Some(skills)) => (title, skills),
        _ => {
            return Err(AppError::Validation(
                "Title and skills are required".to_string(),
            ))
        }
    };

    let description_request =
        DescriptionRequest::new(title, skills, request.experience, request.job_type);
    let description = generate_description(&description_request, &mut rand::thread_rng());

    Ok(Json(GenerateDescriptionResponse {
        message: "Job description generated successfully".to_string(),
        description,
        generated_at: Utc::now(),
    }))
}

/// POST /api/ai/match-score
///
/// Scores the user's stored skills against a single job.
pub async fn handle_match_score(
    State(state): State<AppState>,
    Json(request): Json<MatchScoreRequest>,
) -> Result<Json<MatchScoreResponse>, AppError> {
    let profile = load_profile(&state, request.user_id).await?;
    let job = state
        .jobs
        .find_job(request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    // Skills only; the stored experience does not earn the flat bonus here.
    let score = match_score(&state.vocabulary, &profile.skills, None, &job);

    Ok(Json(MatchScoreResponse {
        match_score: score,
        message: match_verdict(score).to_string(),
        user_skills: profile.skills,
        job_skills: job.skills,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
