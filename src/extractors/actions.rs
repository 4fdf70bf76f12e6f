use std::sync::LazyLock;

use regex::Regex;

use crate::models::ActionItem;
use crate::text::sentences::{context_window, normalize_whitespace};
use crate::text::similarity::SimilarityFn;

use super::{CONTEXT_RADIUS, Scored, dedup_by_similarity, keyword_spans, score_confidence};

/// Action-oriented vocabulary. Doubles as the indicator list for
/// confidence scoring.
pub(crate) const ACTION_VOCAB: &[&str] = &[
    "will",
    "should",
    "must",
    "need to",
    "have to",
    "going to",
    "action",
    "todo",
    "follow up",
    "assign",
    "responsible",
    "owner",
    "due",
];

/// Capitalized words that pass the name shape but are never names
const NAME_STOPLIST: &[&str] = &[
    "We", "The", "This", "That", "They", "It", "You", "He", "She", "And", "But", "Also", "So",
    "If", "Then", "Let", "Our", "Team", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
    "Saturday", "Sunday",
];

static NAME_BEFORE_MODAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]{1,18})\s+(?:will|should|must|needs?\s+to)\b").unwrap());

static NAME_AFTER_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?i:assign(?:ed)?\s+to|responsible|owner)\s*:?\s+([A-Z][a-z]{1,18})\b").unwrap()
});

static LEADING_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z]{1,18})\b").unwrap());

fn is_probable_name(word: &str) -> bool {
    let len = word.chars().count();
    (2..20).contains(&len) && !NAME_STOPLIST.contains(&word)
}

/// Pull a responsible-party name out of an action sentence, if any of the
/// name-before-modal / assigned-to shapes match.
fn extract_responsible(sentence: &str) -> Option<String> {
    for regex in [&NAME_BEFORE_MODAL, &NAME_AFTER_ASSIGNMENT] {
        if let Some(caps) = regex.captures(sentence) {
            let name = &caps[1];
            if is_probable_name(name) {
                return Some(name.to_string());
            }
        }
    }

    // "John said he will ..." puts a pronoun before the modal; fall back
    // to a leading name when the sentence carries a modal at all.
    let lower = sentence.to_lowercase();
    let has_modal = ["will", "should", "must", "need"]
        .iter()
        .any(|m| lower.contains(m));
    if has_modal {
        if let Some(caps) = LEADING_NAME.captures(sentence) {
            let name = &caps[1];
            if is_probable_name(name) {
                return Some(name.to_string());
            }
        }
    }

    None
}

/// Extract deduplicated action items, highest confidence first, capped at
/// `limit`.
pub fn extract_action_items(text: &str, limit: usize, similarity: SimilarityFn) -> Vec<ActionItem> {
    let normalized = normalize_whitespace(text);

    let candidates: Vec<ActionItem> = keyword_spans(&normalized, ACTION_VOCAB)
        .into_iter()
        .map(|span| {
            let context = context_window(&normalized, span.start, span.end, CONTEXT_RADIUS);
            let confidence = score_confidence(0.3, &context, ACTION_VOCAB);
            ActionItem {
                responsible: extract_responsible(&span.text),
                action: span.text,
                confidence,
                context,
            }
        })
        .collect();

    let mut items: Vec<ActionItem> = dedup_by_similarity(candidates, similarity)
        .into_iter()
        .filter(|item| item.confidence > 0.3)
        .collect();
    items.truncate(limit);
    items
}

impl Scored for ActionItem {
    fn text(&self) -> &str {
        &self.action
    }
    fn confidence(&self) -> f64 {
        self.confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::similarity::normalized_levenshtein;

    fn extract(text: &str) -> Vec<ActionItem> {
        extract_action_items(text, 10, normalized_levenshtein)
    }

    #[test]
    fn test_extracts_modal_sentence_with_responsible() {
        let items = extract("Sarah will update the deployment scripts before the release.");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].responsible.as_deref(), Some("Sarah"));
        assert!(items[0].action.contains("update the deployment scripts"));
    }

    #[test]
    fn test_responsible_from_assigned_to() {
        let items = extract("The migration task is assigned to Priya for next sprint.");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].responsible.as_deref(), Some("Priya"));
    }

    #[test]
    fn test_responsible_falls_back_to_leading_name() {
        let items = extract("John said he will fix PROJ-45 by Friday.");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].responsible.as_deref(), Some("John"));
    }

    #[test]
    fn test_pronoun_subject_is_unassigned() {
        let items = extract("We will revisit the caching layer next quarter.");
        assert_eq!(items.len(), 1);
        assert!(items[0].responsible.is_none());
    }

    #[test]
    fn test_short_match_rejected() {
        // "Will do" trims to 7 characters, below the 10-character floor
        let items = extract("Will do. Ok.");
        assert!(items.is_empty());
    }

    #[test]
    fn test_near_duplicates_collapse() {
        let items = extract(
            "Tom will update the onboarding doc. Later on: Tom will update the onboarding doc!",
        );
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_confidence_bounds_and_ordering() {
        let items = extract(
            "Ana will follow up on the audit, owner of the action. \
             Someone should look at the flaky test eventually.",
        );
        assert!(items.len() >= 2);
        for item in &items {
            assert!(item.confidence > 0.3 && item.confidence <= 1.0);
        }
        assert!(items[0].confidence >= items[1].confidence);
    }

    #[test]
    fn test_no_action_language_yields_empty() {
        assert!(extract("The weather was pleasant throughout the afternoon.").is_empty());
    }
}
