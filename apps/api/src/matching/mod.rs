// Matching engine: skill extraction, TF-IDF similarity, match scoring,
// recommendation ranking, and templated job descriptions.
// Everything below `handlers` is pure and synchronous.

pub mod description;
pub mod handlers;
pub mod match_score;
pub mod recommend;
pub mod similarity;
pub mod types;
pub mod vocabulary;
