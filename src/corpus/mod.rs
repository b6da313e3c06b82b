pub mod types;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

pub use types::{Corpus, CorpusEntry};

/// Column holding the farmer's question in the KCC dataset export.
const QUERY_COLUMN: &str = "QueryText";
/// Column holding the call-centre answer.
const ANSWER_COLUMN: &str = "KccAns";

/// Substituted when a row has no answer field at all. Rows that carry an
/// empty string are kept as-is; the validity filter deals with them.
pub const MISSING_ANSWER: &str = "No information available.";

impl Corpus {
    /// Load the Q/A corpus from a CSV dataset file.
    ///
    /// The KCC exports are ISO-8859-1 encoded, so the bytes are decoded
    /// through a Latin-1-tolerant decoder before parsing. Any failure here
    /// is fatal to the caller — no queries can be served without a corpus.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        // WINDOWS_1252 decodes every byte sequence, covering the extended
        // Latin characters the helpline transcripts contain.
        let (text, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
        Self::parse_csv(&text)
    }

    /// Parse and normalize decoded CSV text into a corpus.
    pub fn parse_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers().context("failed to read CSV header")?;
        let query_col = headers
            .iter()
            .position(|h| h == QUERY_COLUMN)
            .with_context(|| format!("dataset missing required column {}", QUERY_COLUMN))?;
        let answer_col = headers.iter().position(|h| h == ANSWER_COLUMN);

        let mut entries = Vec::new();
        let mut dropped = 0usize;

        for record in reader.records() {
            let record = record.context("failed to parse CSV record")?;

            // A row without question text can never be matched — drop it.
            let query_text = match record.get(query_col) {
                Some(q) if !q.trim().is_empty() => q.to_lowercase(),
                _ => {
                    dropped += 1;
                    continue;
                }
            };

            // Missing answer cell becomes a fixed literal. An empty string
            // that is actually present survives to the validity filter.
            let answer_text = answer_col
                .and_then(|col| record.get(col))
                .map(|a| a.to_string())
                .unwrap_or_else(|| MISSING_ANSWER.to_string());

            entries.push(CorpusEntry {
                query_text,
                answer_text,
            });
        }

        if dropped > 0 {
            warn!(dropped, "rows without question text dropped during load");
        }
        info!(entries = entries.len(), "corpus normalized");

        Ok(Corpus::from_entries(entries))
    }
}
