pub mod actions;
pub mod decisions;
pub mod participants;
pub mod sentiment;
pub mod summary;
pub mod tickets;
pub mod topics;

pub use actions::*;
pub use decisions::*;
pub use participants::*;
pub use sentiment::*;
pub use summary::*;
pub use tickets::*;
pub use topics::*;

use std::cmp::Ordering;

use crate::text::similarity::{DEDUP_THRESHOLD, SimilarityFn};

/// Radius of the character window attached as `context` to extracted items
pub const CONTEXT_RADIUS: usize = 150;

/// Confidence step added per corroborating indicator found in context
pub const CONFIDENCE_STEP: f64 = 0.1;

/// A sentence-like span found during a keyword scan
#[derive(Debug, Clone)]
pub(crate) struct SpanCandidate {
    /// Trimmed span text
    pub text: String,
    /// Byte offset of the span start in the scanned text
    pub start: usize,
    /// Byte offset just past the span end
    pub end: usize,
}

/// Scan for sentence-like spans (bounded by `.`, `;`, start, end) that
/// contain at least one vocabulary keyword. Spans whose trimmed length
/// falls outside (10, 300) characters are rejected.
pub(crate) fn keyword_spans(text: &str, vocabulary: &[&str]) -> Vec<SpanCandidate> {
    let mut candidates = Vec::new();
    let mut span_start = 0;

    let push_span = |raw_start: usize, raw_end: usize, candidates: &mut Vec<SpanCandidate>| {
        let raw = &text[raw_start..raw_end];
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len <= 10 || len >= 300 {
            return;
        }
        let lower = trimmed.to_lowercase();
        if vocabulary.iter().any(|kw| lower.contains(kw)) {
            let offset = raw_start + (raw.len() - raw.trim_start().len());
            candidates.push(SpanCandidate {
                text: trimmed.to_string(),
                start: offset,
                end: offset + trimmed.len(),
            });
        }
    };

    for (i, ch) in text.char_indices() {
        if ch == '.' || ch == ';' {
            push_span(span_start, i, &mut candidates);
            span_start = i + ch.len_utf8();
        }
    }
    push_span(span_start, text.len(), &mut candidates);

    candidates
}

/// Base-plus-increment confidence: start at `base`, add a step for each
/// indicator present in the (lowercased) context, clamp to [0, 1].
pub(crate) fn score_confidence(base: f64, context: &str, indicators: &[&str]) -> f64 {
    let lower = context.to_lowercase();
    let hits = indicators.iter().filter(|kw| lower.contains(*kw)).count();
    (base + hits as f64 * CONFIDENCE_STEP).clamp(0.0, 1.0)
}

/// An extracted item that competes in fuzzy dedup
pub(crate) trait Scored {
    fn text(&self) -> &str;
    fn confidence(&self) -> f64;
}

/// Collapse near-duplicate items, keeping the highest-confidence member of
/// each similarity cluster. Output is sorted confidence-descending.
pub(crate) fn dedup_by_similarity<T: Scored>(mut items: Vec<T>, similarity: SimilarityFn) -> Vec<T> {
    items.sort_by(|a, b| {
        b.confidence()
            .partial_cmp(&a.confidence())
            .unwrap_or(Ordering::Equal)
    });

    let mut kept: Vec<T> = Vec::new();
    for item in items {
        let duplicate = kept
            .iter()
            .any(|k| similarity(k.text(), item.text()) >= DEDUP_THRESHOLD);
        if !duplicate {
            kept.push(item);
        }
    }
    kept
}
