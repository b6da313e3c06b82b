use std::sync::Arc;

use tracing::info;

use crate::answer;
use crate::corpus::Corpus;
use crate::matcher::{self, vector::VectorIndex, QueryInput};
use crate::translate::{self, Translator};

/// The query-answering pipeline: empty-input short circuit, vector match,
/// fuzzy fallback, validity filter, best-effort translation.
///
/// Corpus and index are built once at startup and shared read-only; the
/// engine never mutates them, so concurrent queries need no locking.
pub struct MatchEngine {
    corpus: Arc<Corpus>,
    index: Arc<VectorIndex>,
    translator: Arc<dyn Translator>,
}

impl MatchEngine {
    pub fn new(corpus: Arc<Corpus>, index: Arc<VectorIndex>, translator: Arc<dyn Translator>) -> Self {
        Self {
            corpus,
            index,
            translator,
        }
    }

    /// Answer one query end to end, returning the formatted two-language
    /// response. Every failure mode resolves to a fixed user-facing
    /// message; nothing propagates past this method.
    pub async fn respond(&self, input: &QueryInput) -> String {
        let normalized = input.normalized();
        if normalized.is_empty() {
            return answer::EMPTY_QUERY_REPLY.to_string();
        }

        let result = matcher::find_best_match(&self.index, &self.corpus, &normalized);
        info!(
            method = ?result.method,
            entry_index = result.entry_index,
            score = result.score,
            "query matched"
        );

        // The primary answer is final before translation starts; a slow or
        // failing translation can only degrade the secondary line.
        let english = answer::resolve(&self.corpus, &result);
        let telugu = translate::best_effort(self.translator.as_ref(), &english).await;

        answer::format_response(&english, &telugu.target_text)
    }
}
