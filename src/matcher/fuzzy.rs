//! Approximate-substring scoring for the fallback scan.
//!
//! Scores the best alignment of the shorter string inside the longer one on
//! a 0–100 scale: every window of the longer string with the shorter
//! string's length is compared by edit distance and the best window wins.

/// Partial similarity ratio between two strings, 0–100.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if shorter.is_empty() {
        return if longer.is_empty() { 100.0 } else { 0.0 };
    }

    let mut best = 0.0f64;
    for start in 0..=(longer.len() - shorter.len()) {
        let window = &longer[start..start + shorter.len()];
        let distance = levenshtein(shorter, window);
        let ratio = 100.0 * (1.0 - distance as f64 / shorter.len() as f64);
        if ratio > best {
            best = ratio;
        }
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Edit distance between two char slices, two-row dynamic programming.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(partial_ratio("fertilizer", "fertilizer"), 100.0);
    }

    #[test]
    fn test_substring_scores_100() {
        assert_eq!(partial_ratio("paddy", "fertilizer for paddy crop"), 100.0);
    }

    #[test]
    fn test_typos_score_above_threshold() {
        let ratio = partial_ratio("fertlizer for paady", "what is the fertilizer for paddy");
        assert!(ratio > 50.0, "ratio was {ratio}");
    }

    #[test]
    fn test_unrelated_text_scores_low() {
        let ratio = partial_ratio("capital of france", "fertilizer dose for paddy");
        assert!(ratio < 50.0, "ratio was {ratio}");
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(partial_ratio("", "anything"), 0.0);
        assert_eq!(partial_ratio("", ""), 100.0);
    }

    #[test]
    fn test_levenshtein_basics() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("abc")), 0);
    }
}
