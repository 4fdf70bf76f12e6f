use std::panic::{AssertUnwindSafe, catch_unwind};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::extractors::{
    TicketConfig, extract_action_items, extract_decisions, extract_participants,
    extract_ticket_mentions, extract_topics, fallback_summary, score_sentiment, summarize,
};
use crate::models::{TicketAnalysis, Tier, TierConfig, TranscriptAnalysis};
use crate::text::similarity::{SimilarityFn, normalized_levenshtein};

/// Appended to a transcript cut down to the tier's length ceiling
pub const TRUNCATION_MARKER: &str = " [transcript truncated]";

/// Errors surfaced to callers. Anything else degrades to partial output.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The transcript argument was missing or blank after trimming
    #[error("transcript is empty or not analyzable text")]
    InvalidInput,
}

/// Knobs for one analysis run. The defaults match the basic tier with the
/// standard similarity metric; callers can swap the similarity function or
/// enable the looser ticket patterns without touching the engine.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub tier: TierConfig,
    pub tickets: TicketConfig,
    pub similarity: SimilarityFn,
}

impl AnalysisOptions {
    pub fn for_tier(tier: Tier) -> Self {
        Self {
            tier: tier.config(),
            ..Self::default()
        }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            tier: TierConfig::default(),
            tickets: TicketConfig::default(),
            similarity: normalized_levenshtein,
        }
    }
}

/// Run the full extraction pipeline over one transcript.
///
/// The only caller-visible failure is [`AnalysisError::InvalidInput`]. A
/// fault inside any single extractor is caught, logged, and replaced with
/// an empty result for that field.
pub fn analyze(transcript: &str, tier: Tier) -> Result<TranscriptAnalysis, AnalysisError> {
    analyze_with_options(transcript, &AnalysisOptions::for_tier(tier))
}

pub fn analyze_with_options(
    transcript: &str,
    options: &AnalysisOptions,
) -> Result<TranscriptAnalysis, AnalysisError> {
    if transcript.trim().is_empty() {
        return Err(AnalysisError::InvalidInput);
    }

    let (text, truncated) = truncate_to_tier(transcript, &options.tier);
    let raw_length = text.chars().count();
    let word_count = text.split_whitespace().count();

    let ticket_mentions = guarded("tickets", &text, Vec::new(), || {
        extract_ticket_mentions(&text, &options.tickets)
    });
    let action_items = guarded("actions", &text, Vec::new(), || {
        extract_action_items(&text, options.tier.max_action_items, options.similarity)
    });
    let key_decisions = guarded("decisions", &text, Vec::new(), || {
        extract_decisions(&text, options.tier.max_decisions, options.similarity)
    });
    let participants = guarded("participants", &text, Vec::new(), || {
        extract_participants(&text)
    });
    let sentiment_score = guarded("sentiment", &text, 0.0, || score_sentiment(&text));
    let topics = guarded("topics", &text, Vec::new(), || extract_topics(&text));

    let summary_fallback = fallback_summary(&text, options.tier.summary_max_length);
    let summary = guarded("summary", &text, summary_fallback, || {
        summarize(
            &text,
            options.tier.summary_max_length,
            options.tier.max_summary_sentences,
        )
    });

    Ok(TranscriptAnalysis {
        raw_length,
        word_count,
        ticket_mentions,
        action_items,
        key_decisions,
        participants,
        summary,
        sentiment_score,
        topics,
        truncated,
        processed_at: Utc::now(),
    })
}

/// Run the pipeline and narrow the result to a single ticket id.
///
/// When the transcript never mentions the ticket, the view is marked
/// `relevant: false` and the summary is replaced with a placeholder.
pub fn analyze_for_ticket(
    transcript: &str,
    tier: Tier,
    ticket_id: &str,
) -> Result<TicketAnalysis, AnalysisError> {
    analyze_for_ticket_with_options(transcript, ticket_id, &AnalysisOptions::for_tier(tier))
}

pub fn analyze_for_ticket_with_options(
    transcript: &str,
    ticket_id: &str,
    options: &AnalysisOptions,
) -> Result<TicketAnalysis, AnalysisError> {
    let target = ticket_id.trim().to_uppercase();
    let analysis = analyze_with_options(transcript, options)?;

    let mentions: Vec<_> = analysis
        .ticket_mentions
        .into_iter()
        .filter(|m| m.ticket_id == target)
        .collect();
    let relevant = !mentions.is_empty();

    let target_lower = target.to_lowercase();
    let references_target = |text: &str| {
        let lower = text.to_lowercase();
        lower.contains(&target_lower) || lower.contains("ticket") || lower.contains("issue")
    };

    let action_items: Vec<_> = analysis
        .action_items
        .into_iter()
        .filter(|a| references_target(&a.action))
        .collect();
    let key_decisions: Vec<_> = analysis
        .key_decisions
        .into_iter()
        .filter(|d| references_target(&d.decision))
        .collect();

    let summary = if relevant {
        analysis.summary
    } else {
        format!("No discussion of {} found in this transcript.", target)
    };

    Ok(TicketAnalysis {
        ticket_id: target,
        relevant,
        mentions,
        action_items,
        key_decisions,
        summary,
        processed_at: analysis.processed_at,
    })
}

/// Cut the transcript down to the tier ceiling, marking the cut. The
/// reported lengths downstream include the marker.
fn truncate_to_tier(transcript: &str, tier: &TierConfig) -> (String, bool) {
    if transcript.chars().count() <= tier.max_transcript_length {
        return (transcript.to_string(), false);
    }
    debug!(
        limit = tier.max_transcript_length,
        "transcript over tier ceiling, truncating"
    );
    let mut text: String = transcript.chars().take(tier.max_transcript_length).collect();
    text.push_str(TRUNCATION_MARKER);
    (text, true)
}

/// Isolate one extractor: a panic inside `f` is logged with the extractor
/// name and an input snippet, and `fallback` is returned instead.
fn guarded<T>(extractor: &str, input: &str, fallback: T, f: impl FnOnce() -> T) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            let snippet: String = input.chars().take(80).collect();
            warn!(extractor, snippet = %snippet, "extractor failed, substituting empty result");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "We discussed PROJ-45 today. John said he will fix PROJ-45 by \
                            Friday. We decided to use the new API. Jane mentioned the tests \
                            are failing.";

    #[test]
    fn test_rejects_blank_input() {
        assert!(matches!(
            analyze("", Tier::Basic),
            Err(AnalysisError::InvalidInput)
        ));
        assert!(matches!(
            analyze("   \n\t ", Tier::Basic),
            Err(AnalysisError::InvalidInput)
        ));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let analysis = analyze(SCENARIO, Tier::Basic).unwrap();

        assert_eq!(analysis.ticket_mentions.len(), 1);
        assert_eq!(analysis.ticket_mentions[0].ticket_id, "PROJ-45");
        assert!(analysis.ticket_mentions[0].confidence > 0.0);

        let fix_item = analysis
            .action_items
            .iter()
            .find(|a| a.action.contains("fix PROJ-45"))
            .expect("fix action item present");
        assert_eq!(fix_item.responsible.as_deref(), Some("John"));

        assert!(
            analysis
                .key_decisions
                .iter()
                .any(|d| d.decision.contains("decided to use the new API"))
        );

        assert!(analysis.participants.contains(&"John".to_string()));
        assert!(analysis.participants.contains(&"Jane".to_string()));

        // "failing" is the only polarity word in the text
        assert!(analysis.sentiment_score <= 0.0);
        assert!(analysis.sentiment_score >= -1.0);
        assert!(!analysis.truncated);
    }

    #[test]
    fn test_idempotent_modulo_timestamp() {
        let a = analyze(SCENARIO, Tier::Basic).unwrap();
        let b = analyze(SCENARIO, Tier::Basic).unwrap();

        assert_eq!(
            serde_json::to_value(&a.ticket_mentions).unwrap(),
            serde_json::to_value(&b.ticket_mentions).unwrap()
        );
        assert_eq!(
            serde_json::to_value(&a.action_items).unwrap(),
            serde_json::to_value(&b.action_items).unwrap()
        );
        assert_eq!(
            serde_json::to_value(&a.key_decisions).unwrap(),
            serde_json::to_value(&b.key_decisions).unwrap()
        );
        assert_eq!(a.participants, b.participants);
        assert_eq!(a.sentiment_score, b.sentiment_score);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_truncation_accounting() {
        let long = "word ".repeat(3_000); // 15,000 chars
        let analysis = analyze(&long, Tier::Basic).unwrap();
        let tier = Tier::Basic.config();

        assert!(analysis.truncated);
        assert_eq!(
            analysis.raw_length,
            tier.max_transcript_length + TRUNCATION_MARKER.chars().count()
        );
        // Word count reflects the truncated text, not the original
        assert!(analysis.word_count < 3_000);
    }

    #[test]
    fn test_higher_tier_avoids_truncation() {
        let long = "word ".repeat(3_000);
        let analysis = analyze(&long, Tier::Ai).unwrap();
        assert!(!analysis.truncated);
        assert_eq!(analysis.raw_length, long.chars().count());
    }

    #[test]
    fn test_confidence_bounds_hold_everywhere() {
        let analysis = analyze(SCENARIO, Tier::Basic).unwrap();
        for m in &analysis.ticket_mentions {
            assert!((0.0..=1.0).contains(&m.confidence));
        }
        for a in &analysis.action_items {
            assert!((0.0..=1.0).contains(&a.confidence));
        }
        for d in &analysis.key_decisions {
            assert!((0.0..=1.0).contains(&d.confidence));
        }
        assert!((-1.0..=1.0).contains(&analysis.sentiment_score));
    }

    #[test]
    fn test_ticket_scoped_view_relevant() {
        let view = analyze_for_ticket(SCENARIO, Tier::Basic, "proj-45").unwrap();
        assert_eq!(view.ticket_id, "PROJ-45");
        assert!(view.relevant);
        assert_eq!(view.mentions.len(), 1);
        assert!(view.action_items.iter().any(|a| a.action.contains("PROJ-45")));
        assert!(!view.summary.starts_with("No discussion"));
    }

    #[test]
    fn test_ticket_scoped_view_irrelevant() {
        let view = analyze_for_ticket(SCENARIO, Tier::Basic, "OTHER-9").unwrap();
        assert!(!view.relevant);
        assert!(view.mentions.is_empty());
        assert_eq!(
            view.summary,
            "No discussion of OTHER-9 found in this transcript."
        );
    }

    #[test]
    fn test_summary_never_exceeds_tier_cap() {
        let text = "We agreed the replatforming effort will continue through the quarter. "
            .repeat(40);
        let analysis = analyze(&text, Tier::Basic).unwrap();
        assert!(analysis.summary.chars().count() <= Tier::Basic.config().summary_max_length);
    }

    #[test]
    fn test_guarded_catches_panics() {
        let value = guarded("boom", "input text", 7, || -> i32 { panic!("synthetic") });
        assert_eq!(value, 7);
    }
}
