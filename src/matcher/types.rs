use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a match was produced, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchMethod {
    /// Cosine similarity over the TF-IDF index cleared its threshold.
    Vector,
    /// Vector similarity was inconclusive; partial-ratio scan won instead.
    Fuzzy,
    /// Neither stage cleared its threshold.
    None,
}

/// Outcome of one matching pass. Created fresh per query, never persisted.
///
/// `score` is cosine similarity in [0, 1] for Vector matches and a partial
/// ratio in [0, 100] for Fuzzy matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub entry_index: Option<usize>,
    pub score: f64,
    pub method: MatchMethod,
}

impl MatchResult {
    pub fn vector(entry_index: usize, score: f64) -> Self {
        Self {
            entry_index: Some(entry_index),
            score,
            method: MatchMethod::Vector,
        }
    }

    pub fn fuzzy(entry_index: usize, score: f64) -> Self {
        Self {
            entry_index: Some(entry_index),
            score,
            method: MatchMethod::Fuzzy,
        }
    }

    pub fn none() -> Self {
        Self {
            entry_index: None,
            score: 0.0,
            method: MatchMethod::None,
        }
    }
}

/// Raw input handed over by the conversational front end: the utterance
/// text plus any slot values its entity extraction pulled out (crop,
/// location, ...). Entities are merged into the query text here, in sorted
/// key order, so the same input always produces the same query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryInput {
    pub text: String,
    pub entities: BTreeMap<String, String>,
}

impl QueryInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: BTreeMap::new(),
        }
    }

    pub fn with_entity(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.entities.insert(slot.into(), value.into());
        self
    }

    /// Canned query form for fertilizer lookups when the front end
    /// extracted a crop entity but the utterance itself is noise.
    pub fn fertilizer_recommendation(crop: &str) -> Self {
        Self::text(format!(
            "fertilizer recommendation for {}",
            crop.to_lowercase()
        ))
    }

    /// Entity values prepended to the utterance, then lowercased and
    /// trimmed. This is the text the matcher actually sees.
    pub fn normalized(&self) -> String {
        let mut parts: Vec<&str> = self
            .entities
            .values()
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .collect();
        parts.push(self.text.as_str());
        parts.join(" ").to_lowercase().trim().to_string()
    }
}
