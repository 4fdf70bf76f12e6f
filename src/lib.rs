pub mod extractors;
pub mod io;
pub mod limits;
pub mod models;
pub mod pipeline;
pub mod text;

pub use extractors::{
    TicketConfig, extract_action_items, extract_decisions, extract_participants,
    extract_ticket_mentions, extract_topics, score_sentiment, summarize,
};
pub use io::{AnalysisReport, write_json};
pub use limits::RateLimiter;
pub use models::{
    ActionItem, Decision, TicketAnalysis, TicketMention, Tier, TierConfig, TranscriptAnalysis,
};
pub use pipeline::{
    AnalysisError, AnalysisOptions, TRUNCATION_MARKER, analyze, analyze_for_ticket,
    analyze_for_ticket_with_options, analyze_with_options,
};
pub use text::{SimilarityFn, normalized_levenshtein, split_sentences};
