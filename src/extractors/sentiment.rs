use std::sync::LazyLock;

use regex::Regex;

// Substring matching on purpose: "successful", "blocked", and "failure"
// should count toward their root words.
static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)good|great|excellent|positive|success|complete|done|resolved").unwrap()
});

static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bad|problem|issue|fail|block|stuck|difficult|concern").unwrap()
});

/// Lexical polarity score in [-1, 1], normalized by text length so a long
/// transcript with a few positive words stays near neutral. Empty input
/// scores 0.0.
pub fn score_sentiment(text: &str) -> f64 {
    let word_count = text.split_whitespace().count();
    if word_count == 0 {
        return 0.0;
    }

    let positives = POSITIVE.find_iter(text).count() as f64;
    let negatives = NEGATIVE.find_iter(text).count() as f64;
    let net = positives - negatives;

    let norm = (word_count as f64 * 0.1).max(1.0);
    (net / norm).clamp(-1.0, 1.0)
}
