pub mod fuzzy;
pub mod types;
pub mod vector;

use tracing::debug;

use crate::corpus::Corpus;
use vector::VectorIndex;

pub use types::{MatchMethod, MatchResult, QueryInput};

/// Minimum cosine similarity for a vector match to count.
pub const VECTOR_THRESHOLD: f64 = 0.5;
/// Minimum partial ratio (exclusive) for a fuzzy match to count.
pub const FUZZY_THRESHOLD: f64 = 50.0;

/// Rank the corpus against a normalized query.
///
/// Vector similarity is authoritative when it clears its threshold. Below
/// it the vector candidate is discarded outright and the corpus is
/// rescanned with partial-ratio scoring; below that threshold too, the
/// result is a no-match. Both stages break ties toward the lowest entry
/// index, so repeated queries always resolve identically.
pub fn find_best_match(index: &VectorIndex, corpus: &Corpus, normalized_query: &str) -> MatchResult {
    if let Some((entry_index, score)) = index.best_match(&index.project(normalized_query)) {
        if score >= VECTOR_THRESHOLD {
            debug!(entry_index, score, "vector match");
            return MatchResult::vector(entry_index, score);
        }
        debug!(score, "vector similarity inconclusive, trying fuzzy scan");
    }

    let mut best_index = None;
    let mut best_ratio = 0.0f64;
    for (idx, entry) in corpus.iter().enumerate() {
        let ratio = fuzzy::partial_ratio(normalized_query, &entry.query_text);
        if ratio > best_ratio {
            best_ratio = ratio;
            best_index = Some(idx);
        }
    }

    match best_index {
        Some(entry_index) if best_ratio > FUZZY_THRESHOLD => {
            debug!(entry_index, ratio = best_ratio, "fuzzy match");
            MatchResult::fuzzy(entry_index, best_ratio)
        }
        _ => {
            debug!(best_ratio, "no match above either threshold");
            MatchResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusEntry;

    fn fixture() -> (VectorIndex, Corpus) {
        let corpus = Corpus::from_entries(
            [
                ("what is the fertilizer for paddy", "apply urea"),
                ("weather forecast for guntur", "see weather service"),
                ("pest control in cotton crop", "spray neem oil"),
            ]
            .iter()
            .map(|(q, a)| CorpusEntry {
                query_text: q.to_string(),
                answer_text: a.to_string(),
            })
            .collect(),
        );
        (VectorIndex::fit(&corpus), corpus)
    }

    #[test]
    fn test_exact_query_matches_by_vector() {
        let (index, corpus) = fixture();
        let result = find_best_match(&index, &corpus, "what is the fertilizer for paddy");
        assert_eq!(result.method, MatchMethod::Vector);
        assert_eq!(result.entry_index, Some(0));
        assert!(result.score > 0.99);
    }

    #[test]
    fn test_typo_query_falls_back_to_fuzzy() {
        let (index, corpus) = fixture();
        let result = find_best_match(&index, &corpus, "fertlizer for paady");
        assert_eq!(result.method, MatchMethod::Fuzzy);
        assert_eq!(result.entry_index, Some(0));
        assert!(result.score > 50.0);
    }

    #[test]
    fn test_unrelated_query_is_no_match() {
        let (index, corpus) = fixture();
        let result = find_best_match(&index, &corpus, "capital of france");
        assert_eq!(result.method, MatchMethod::None);
        assert_eq!(result.entry_index, None);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_repeated_query_is_deterministic() {
        let (index, corpus) = fixture();
        let first = find_best_match(&index, &corpus, "pest control cotton");
        let second = find_best_match(&index, &corpus, "pest control cotton");
        assert_eq!(first, second);
    }

    #[test]
    fn test_fuzzy_tie_break_keeps_first_entry() {
        let corpus = Corpus::from_entries(
            ["paddy seed rate", "paddy seed rate"]
                .iter()
                .map(|q| CorpusEntry {
                    query_text: q.to_string(),
                    answer_text: "answer".to_string(),
                })
                .collect(),
        );
        // Empty index forces the fuzzy path to decide.
        let index = VectorIndex::fit(&Corpus::from_entries(vec![]));
        let result = find_best_match(&index, &corpus, "pady seed rate");
        assert_eq!(result.method, MatchMethod::Fuzzy);
        assert_eq!(result.entry_index, Some(0));
    }
}
