//! Skill Extractor — scans free text for known skills.
//!
//! Matching is plain substring search on lower-cased text, not tokenization.
//! Short entries therefore hit inside longer words ("go" in "good", "java" in
//! "javascript"); callers treat the result as a heuristic signal.

/// Curated skill list shipped with the job board.
const DEFAULT_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "nodejs",
    "angular",
    "vue",
    "sql",
    "mysql",
    "mongodb",
    "postgresql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "html",
    "css",
    "typescript",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    "flutter",
    "react native",
    "django",
    "flask",
    "spring",
    "express",
    "tailwind",
    "bootstrap",
    "sass",
    "webpack",
    "redux",
    "graphql",
    "rest api",
    "agile",
    "scrum",
    "ci/cd",
    "testing",
    "jest",
    "junit",
    "selenium",
];

/// Immutable set of normalized skill tokens.
///
/// Every member is trimmed, lower-case and non-empty; insertion order is kept
/// so extraction results come back in a stable order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for skill in skills {
            let skill = skill.as_ref().trim().to_lowercase();
            if !skill.is_empty() && !normalized.contains(&skill) {
                normalized.push(skill);
            }
        }
        Self { skills: normalized }
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    #[cfg(test)]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Returns every vocabulary entry that occurs in `text`, in vocabulary order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let lower = text.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| lower.contains(skill.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}
