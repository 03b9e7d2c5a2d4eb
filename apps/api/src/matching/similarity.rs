//! Text Similarity Scorer — TF-IDF cosine similarity between two documents.
//!
//! The corpus is exactly the two documents being compared, so terms present
//! in both carry a lower IDF than terms unique to one side. Only shared terms
//! contribute to the dot product.

use std::collections::{BTreeSet, HashMap};

/// English stop words dropped before weighting.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// Per-document raw term counts.
struct TermCounts(HashMap<String, u32>);

impl TermCounts {
    fn from_text(text: &str) -> Self {
        let mut counts = HashMap::new();
        for term in tokenize(text) {
            *counts.entry(term).or_insert(0) += 1;
        }
        Self(counts)
    }

    fn count(&self, term: &str) -> u32 {
        self.0.get(term).copied().unwrap_or(0)
    }

    fn contains(&self, term: &str) -> bool {
        self.0.contains_key(term)
    }
}

/// Lower-cases and splits on anything that is not alphanumeric or `_`.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty() && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Smoothed inverse document frequency: `1 + ln(N / (1 + df))`.
fn idf(term: &str, corpus: &[&TermCounts]) -> f64 {
    let df = corpus.iter().filter(|d| d.contains(term)).count() as f64;
    1.0 + (corpus.len() as f64 / (1.0 + df)).ln()
}

/// Returns the cosine similarity of the TF-IDF vectors of `a` and `b`, scaled to `[0, 100]`.
///
/// Empty documents, or documents made only of stop words, score 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let doc_a = TermCounts::from_text(a);
    let doc_b = TermCounts::from_text(b);
    let corpus = [&doc_a, &doc_b];

    // BTreeSet keeps the summation order fixed across calls.
    let terms: BTreeSet<&String> = doc_a.0.keys().chain(doc_b.0.keys()).collect();

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for term in terms {
        let weight = idf(term, &corpus);
        let wa = doc_a.count(term) as f64 * weight;
        let wb = doc_b.count(term) as f64 * weight;
        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    ((dot / (norm_a.sqrt() * norm_b.sqrt())) * 100.0).clamp(0.0, 100.0)
}
