use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::TicketMention;
use crate::text::sentences::context_window;

use super::{CONTEXT_RADIUS, score_confidence};

/// Words that corroborate a ticket mention when found near it
const TICKET_INDICATORS: &[&str] = &[
    "fix", "close", "resolve", "complete", "implement", "review", "bug", "issue", "task", "story",
    "epic", "ticket", "card", "assigned", "responsible", "owner",
];

/// Configuration for ticket-id scanning
#[derive(Debug, Clone)]
pub struct TicketConfig {
    /// Also match the space-separated `PROJECT 123` form. Off by default:
    /// it false-positives on ordinary capitalized-word-then-number text.
    pub match_separated_format: bool,
    /// Radius of the character context window around a mention
    pub context_radius: usize,
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            match_separated_format: false,
            context_radius: CONTEXT_RADIUS,
        }
    }
}

/// One recognized ticket-id shape: a pattern plus the normalizer that maps
/// its captures to a canonical `KEY-123` id. Adding a shape is a data
/// change, not a code change.
struct TicketPattern {
    regex: &'static LazyLock<Regex>,
    normalize: fn(&Captures) -> String,
    separated: bool,
}

static STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z]{2,10})-(\d+)\b").unwrap());

static PREFIXED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:ticket|issue)\s+#?([A-Za-z]{2,10})-(\d+)\b").unwrap()
});

static SEPARATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{2,10})\s+(\d{1,6})\b").unwrap());

/// Whether text contains a strict-form ticket id
pub(crate) fn contains_ticket_id(text: &str) -> bool {
    STRICT.is_match(text)
}

fn join_key_number(caps: &Captures) -> String {
    format!("{}-{}", caps[1].to_uppercase(), &caps[2])
}

static TICKET_PATTERNS: LazyLock<Vec<TicketPattern>> = LazyLock::new(|| {
    vec![
        TicketPattern {
            regex: &STRICT,
            normalize: join_key_number,
            separated: false,
        },
        TicketPattern {
            regex: &PREFIXED,
            normalize: join_key_number,
            separated: false,
        },
        TicketPattern {
            regex: &SEPARATED,
            normalize: join_key_number,
            separated: true,
        },
    ]
});

/// Scan raw transcript text for ticket identifiers.
///
/// Returns one mention per unique id (case-insensitive, first occurrence
/// wins) in first-seen order. The scan runs over the unsplit text so ids
/// straddling sentence boundaries are still found.
pub fn extract_ticket_mentions(text: &str, config: &TicketConfig) -> Vec<TicketMention> {
    let mut raw_matches: Vec<(usize, usize, String)> = Vec::new();

    for pattern in TICKET_PATTERNS.iter() {
        if pattern.separated && !config.match_separated_format {
            continue;
        }
        for caps in pattern.regex.captures_iter(text) {
            let id_span = caps.get(1).unwrap().start()..caps.get(2).unwrap().end();
            raw_matches.push((id_span.start, id_span.end, (pattern.normalize)(&caps)));
        }
    }

    raw_matches.sort_by_key(|(start, _, _)| *start);

    let mut mentions: Vec<TicketMention> = Vec::new();
    for (start, end, ticket_id) in raw_matches {
        if mentions.iter().any(|m| m.ticket_id == ticket_id) {
            continue;
        }
        let context = context_window(text, start, end, config.context_radius);
        let confidence = score_confidence(0.5, &context, TICKET_INDICATORS);
        mentions.push(TicketMention {
            ticket_id,
            context,
            confidence,
            position: start,
        });
    }

    mentions
}
