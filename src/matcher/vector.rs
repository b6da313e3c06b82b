use std::collections::HashMap;

use tracing::debug;

use crate::corpus::Corpus;

/// Longest word sequence used as a vocabulary unit. Units are all
/// contiguous 1-, 2- and 3-word sequences of a question.
const MAX_NGRAM: usize = 3;

/// Unit-length sparse vector in vocabulary space: (term id, weight) pairs
/// sorted by term id. Cosine similarity between two of these is a plain
/// sparse dot product.
#[derive(Debug, Clone, Default)]
pub struct SparseVector(Vec<(u32, f64)>);

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Dot product by merge-join over the sorted term ids. Both sides are
    /// unit length, so this is their cosine similarity directly. An empty
    /// (zero) vector dots to 0 against everything.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].0.cmp(&other.0[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.0[i].1 * other.0[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// TF-IDF index over every corpus question.
///
/// Fit exactly once at startup and read-only afterwards. Incoming queries
/// are projected through the same fitted vocabulary and IDF weights;
/// refitting per query would make the document vectors incomparable.
pub struct VectorIndex {
    /// Vocabulary unit -> term id, ids assigned in lexicographic order so
    /// the index is identical across runs.
    vocabulary: HashMap<String, u32>,
    /// Smoothed inverse document frequency per term id.
    idf: Vec<f64>,
    /// One unit-length vector per corpus entry, same offsets as the corpus.
    doc_vectors: Vec<SparseVector>,
}

impl VectorIndex {
    /// Build the index in a single pass over the corpus.
    pub fn fit(corpus: &Corpus) -> Self {
        let doc_counts: Vec<HashMap<String, usize>> = corpus
            .iter()
            .map(|entry| ngram_counts(&entry.query_text))
            .collect();

        // Document frequency per unit.
        let mut df: HashMap<&str, usize> = HashMap::new();
        for counts in &doc_counts {
            for term in counts.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        // Deterministic term ids: sort the vocabulary.
        let mut terms: Vec<&str> = df.keys().copied().collect();
        terms.sort_unstable();

        let n_docs = doc_counts.len() as f64;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (id, term) in terms.iter().enumerate() {
            // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. Keeps terms that
            // appear everywhere at a positive weight.
            let weight = ((1.0 + n_docs) / (1.0 + df[term] as f64)).ln() + 1.0;
            vocabulary.insert((*term).to_string(), id as u32);
            idf.push(weight);
        }

        let doc_vectors = doc_counts
            .iter()
            .map(|counts| weigh(counts, &vocabulary, &idf))
            .collect();

        debug!(
            terms = idf.len(),
            documents = corpus.len(),
            "vector index fitted"
        );

        Self {
            vocabulary,
            idf,
            doc_vectors,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    /// Project a normalized query into the fitted vocabulary space. Units
    /// never seen during fit are dropped; a query made only of unseen
    /// units projects to the zero vector.
    pub fn project(&self, normalized_query: &str) -> SparseVector {
        weigh(&ngram_counts(normalized_query), &self.vocabulary, &self.idf)
    }

    /// Index and cosine score of the best-matching corpus entry. Ties keep
    /// the lowest index; a zero query vector scores 0 against everything
    /// and therefore reports the first entry with score 0. Returns None
    /// only for an empty corpus.
    pub fn best_match(&self, query: &SparseVector) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, doc) in self.doc_vectors.iter().enumerate() {
            let score = query.dot(doc);
            match best {
                Some((_, s)) if score <= s => {}
                _ => best = Some((idx, score)),
            }
        }
        best
    }
}

/// Counts of all 1..=3-word sequences of a lowercased text. Tokens are
/// alphanumeric/underscore runs of at least two characters; shorter runs
/// and punctuation are skipped.
fn ngram_counts(text: &str) -> HashMap<String, usize> {
    let tokens: Vec<&str> = text
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .collect();

    let mut counts = HashMap::new();
    for n in 1..=MAX_NGRAM {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            *counts.entry(window.join(" ")).or_insert(0) += 1;
        }
    }
    counts
}

/// TF × IDF weighting of one unit-count map, L2-normalized into a sparse
/// vector. Unknown units are skipped.
fn weigh(
    counts: &HashMap<String, usize>,
    vocabulary: &HashMap<String, u32>,
    idf: &[f64],
) -> SparseVector {
    let mut pairs: Vec<(u32, f64)> = counts
        .iter()
        .filter_map(|(term, &tf)| {
            let id = *vocabulary.get(term)?;
            Some((id, tf as f64 * idf[id as usize]))
        })
        .collect();

    let norm = pairs.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut pairs {
            *w /= norm;
        }
    }
    pairs.sort_unstable_by_key(|(id, _)| *id);
    SparseVector(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusEntry;

    fn corpus(questions: &[&str]) -> Corpus {
        Corpus::from_entries(
            questions
                .iter()
                .map(|q| CorpusEntry {
                    query_text: q.to_string(),
                    answer_text: "answer".to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_exact_query_scores_one() {
        let index = VectorIndex::fit(&corpus(&[
            "what is the fertilizer for paddy",
            "weather in guntur tomorrow",
            "pest control in cotton",
        ]));
        let query = index.project("what is the fertilizer for paddy");
        let (idx, score) = index.best_match(&query).unwrap();
        assert_eq!(idx, 0);
        assert!((score - 1.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_tie_break_picks_first_entry() {
        let index = VectorIndex::fit(&corpus(&[
            "sowing time for maize",
            "sowing time for maize",
        ]));
        let query = index.project("sowing time for maize");
        let (idx, score) = index.best_match(&query).unwrap();
        assert_eq!(idx, 0);
        assert!(score > 0.99);
    }

    #[test]
    fn test_unseen_terms_project_to_zero_vector() {
        let index = VectorIndex::fit(&corpus(&["fertilizer for paddy"]));
        let query = index.project("capital of france");
        assert!(query.is_zero());
        let (idx, score) = index.best_match(&query).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_corpus_has_no_match() {
        let index = VectorIndex::fit(&corpus(&[]));
        assert!(index.best_match(&index.project("anything")).is_none());
    }

    #[test]
    fn test_partial_overlap_scores_below_exact() {
        let index = VectorIndex::fit(&corpus(&[
            "fertilizer dose for paddy crop",
            "irrigation schedule for sugarcane",
        ]));
        let query = index.project("fertilizer dose for cotton");
        let (idx, score) = index.best_match(&query).unwrap();
        assert_eq!(idx, 0);
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_single_short_token_is_ignored() {
        // Tokens under two characters are not vocabulary units.
        assert!(ngram_counts("a b c").is_empty());
        assert_eq!(ngram_counts("ab cd").len(), 3); // ab, cd, "ab cd"
    }
}
