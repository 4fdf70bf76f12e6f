use crate::models::Decision;
use crate::text::sentences::{context_window, normalize_whitespace};
use crate::text::similarity::SimilarityFn;

use super::{CONTEXT_RADIUS, Scored, dedup_by_similarity, keyword_spans, score_confidence};

/// Decision-oriented vocabulary. Doubles as the indicator list for
/// confidence scoring. Stronger signal than action vocabulary, so
/// decisions start from a higher confidence base.
pub(crate) const DECISION_VOCAB: &[&str] = &[
    "decided",
    "agreed",
    "concluded",
    "determined",
    "resolved",
    "final",
    "consensus",
    "approved",
    "chosen",
    "going with",
];

/// Extract deduplicated decisions, highest confidence first, capped at
/// `limit`.
pub fn extract_decisions(text: &str, limit: usize, similarity: SimilarityFn) -> Vec<Decision> {
    let normalized = normalize_whitespace(text);

    let candidates: Vec<Decision> = keyword_spans(&normalized, DECISION_VOCAB)
        .into_iter()
        .map(|span| {
            let context = context_window(&normalized, span.start, span.end, CONTEXT_RADIUS);
            let confidence = score_confidence(0.4, &context, DECISION_VOCAB);
            Decision {
                decision: span.text,
                confidence,
                context,
            }
        })
        .collect();

    let mut decisions: Vec<Decision> = dedup_by_similarity(candidates, similarity)
        .into_iter()
        .filter(|d| d.confidence > 0.4)
        .collect();
    decisions.truncate(limit);
    decisions
}

impl Scored for Decision {
    fn text(&self) -> &str {
        &self.decision
    }
    fn confidence(&self) -> f64 {
        self.confidence
    }
}
