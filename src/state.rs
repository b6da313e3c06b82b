use std::sync::Arc;

use crate::corpus::Corpus;
use crate::engine::MatchEngine;
use crate::matcher::vector::VectorIndex;
use crate::translate::Translator;

/// Process-wide state handed to the query driver. Built once in main;
/// everything behind it is read-only for the life of the process.
pub struct AppState {
    pub engine: Arc<MatchEngine>,
}

impl AppState {
    pub fn new(
        corpus: Arc<Corpus>,
        index: Arc<VectorIndex>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            engine: Arc::new(MatchEngine::new(corpus, index, translator)),
        }
    }
}
