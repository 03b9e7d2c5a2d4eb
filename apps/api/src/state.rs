use std::sync::Arc;

use crate::config::Config;
use crate::matching::vocabulary::SkillVocabulary;
use crate::repository::{JobRepository, ProfileRepository};
use crate::resume::ResumeTextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill list built once at startup and shared by every request.
    pub vocabulary: Arc<SkillVocabulary>,
    pub jobs: Arc<dyn JobRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub resume_reader: Arc<dyn ResumeTextExtractor>,
}
