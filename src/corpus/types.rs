use serde::{Deserialize, Serialize};

/// A single historical helpline record: the farmer's question as logged by
/// the call centre, and the answer the operator gave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Lowercased question text. Never empty once loaded.
    pub query_text: String,
    /// Operator answer, verbatim from the dataset. May still be a
    /// placeholder like "N/A" — the validity filter catches those at
    /// query time, not here.
    pub answer_text: String,
}

/// The full ordered set of Q/A records, built once at startup and read-only
/// afterwards. Entries are identified by position — the vector index keys
/// its document vectors by the same offsets.
#[derive(Debug, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn from_entries(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter()
    }
}
