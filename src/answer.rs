//! Answer validity filtering and the fixed user-facing responses.
//!
//! Every answer the user sees passes through [`resolve`] — it is the single
//! chokepoint that guarantees a placeholder or empty answer from the
//! dataset is never shown verbatim.

use tracing::debug;

use crate::corpus::Corpus;
use crate::matcher::{MatchMethod, MatchResult};

/// KCC toll-free helpline, embedded in every referral response.
pub const HELPLINE_NUMBER: &str = "1800-180-1551";

/// Stored answers that carry no information. Compared after trimming and
/// lowercasing.
const VAGUE_ANSWERS: &[&str] = &["given as per data", "n/a", "na", ""];

/// Reply for empty or whitespace-only input. The matcher is never invoked
/// in that case.
pub const EMPTY_QUERY_REPLY: &str = "I couldn't understand your query. Please ask again.";

/// Reply when neither matching stage clears its threshold.
pub fn no_match_reply() -> String {
    format!(
        "I'm sorry, I couldn't find an answer to your query. \
         Please try rephrasing or contact the KCC helpline at {HELPLINE_NUMBER}."
    )
}

/// Reply when the matched entry's answer is a known placeholder.
pub fn vague_answer_reply() -> String {
    format!(
        "The answer to your query isn't available at the moment. \
         Please contact the KCC helpline at {HELPLINE_NUMBER} for more information."
    )
}

/// Reply for questions outside agriculture and weather topics.
pub fn out_of_scope_reply() -> String {
    "I'm specialized in agriculture and weather-related topics. \
     Please consult an appropriate source for other inquiries."
        .to_string()
}

/// Resolve a match into the text shown as the primary-language answer.
///
/// A no-match becomes the referral reply; a resolved entry whose answer is
/// empty, whitespace, or in the vague-placeholder set becomes the
/// vague-answer referral; anything else is returned verbatim.
pub fn resolve(corpus: &Corpus, result: &MatchResult) -> String {
    let entry = match (result.method, result.entry_index) {
        (MatchMethod::None, _) | (_, None) => return no_match_reply(),
        (_, Some(index)) => match corpus.get(index) {
            Some(entry) => entry,
            None => return no_match_reply(),
        },
    };

    if VAGUE_ANSWERS.contains(&entry.answer_text.trim().to_lowercase().as_str()) {
        debug!(
            entry_index = result.entry_index,
            "vague answer replaced with referral"
        );
        return vague_answer_reply();
    }
    entry.answer_text.clone()
}

/// Final response shape: primary-language answer and the secondary
/// rendering, one labeled line each.
pub fn format_response(english: &str, telugu: &str) -> String {
    format!("English: {english}\nTelugu: {telugu}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusEntry;
    use crate::matcher::MatchResult;

    fn corpus_with_answer(answer: &str) -> Corpus {
        Corpus::from_entries(vec![CorpusEntry {
            query_text: "question".to_string(),
            answer_text: answer.to_string(),
        }])
    }

    #[test]
    fn test_real_answer_passes_verbatim() {
        let corpus = corpus_with_answer("Apply urea at 50kg per acre.");
        let resolved = resolve(&corpus, &MatchResult::vector(0, 0.9));
        assert_eq!(resolved, "Apply urea at 50kg per acre.");
    }

    #[test]
    fn test_placeholder_answers_become_referral() {
        for placeholder in ["N/A", " na ", "Given As Per Data", "", "   "] {
            let corpus = corpus_with_answer(placeholder);
            let resolved = resolve(&corpus, &MatchResult::fuzzy(0, 80.0));
            assert_eq!(resolved, vague_answer_reply(), "for {placeholder:?}");
        }
    }

    #[test]
    fn test_no_match_becomes_referral() {
        let corpus = corpus_with_answer("unused");
        assert_eq!(resolve(&corpus, &MatchResult::none()), no_match_reply());
    }

    #[test]
    fn test_out_of_range_index_becomes_referral() {
        let corpus = corpus_with_answer("unused");
        assert_eq!(
            resolve(&corpus, &MatchResult::vector(7, 0.9)),
            no_match_reply()
        );
    }

    #[test]
    fn test_referrals_carry_helpline_number() {
        assert!(no_match_reply().contains(HELPLINE_NUMBER));
        assert!(vague_answer_reply().contains(HELPLINE_NUMBER));
    }

    #[test]
    fn test_response_format_labels_both_languages() {
        let formatted = format_response("apply urea", "యూరియా వేయండి");
        assert_eq!(formatted, "English: apply urea\nTelugu: యూరియా వేయండి");
    }
}
