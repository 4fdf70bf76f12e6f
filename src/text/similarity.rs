/// A string-similarity function returning a score in [0, 1], where 1 means
/// identical. The dedup logic depends only on this signature, so the
/// underlying metric can be swapped without touching the extractors.
pub type SimilarityFn = fn(&str, &str) -> f64;

/// Two texts at or above this similarity are treated as the same item
/// (normalized edit distance of 0.3 or less).
pub const DEDUP_THRESHOLD: f64 = 0.7;

/// Default similarity metric: normalized Levenshtein ratio over
/// punctuation-stripped lowercase text, so candidates differing only by
/// casing, whitespace, or punctuation score as identical.
pub fn normalized_levenshtein(a: &str, b: &str) -> f64 {
    let a = canonical(a);
    let b = canonical(b);
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    strsim::normalized_levenshtein(&a, &b)
}

fn canonical(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        assert_eq!(normalized_levenshtein("fix the bug", "fix the bug"), 1.0);
    }

    #[test]
    fn test_punctuation_and_case_ignored() {
        let sim = normalized_levenshtein("John will fix the login bug!", "john will fix the login bug");
        assert_eq!(sim, 1.0);
    }

    #[test]
    fn test_near_paraphrase_above_threshold() {
        let sim = normalized_levenshtein(
            "We will update the deployment scripts",
            "We will update the deployment script",
        );
        assert!(sim >= DEDUP_THRESHOLD);
    }

    #[test]
    fn test_unrelated_below_threshold() {
        let sim = normalized_levenshtein(
            "John will fix the login bug",
            "The budget review is postponed",
        );
        assert!(sim < DEDUP_THRESHOLD);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(normalized_levenshtein("", ""), 1.0);
        assert!(normalized_levenshtein("something", "") < DEDUP_THRESHOLD);
    }
}
