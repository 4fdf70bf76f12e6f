use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference to an issue-tracker ticket found in the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketMention {
    /// Normalized ticket identifier (upper-case project key, e.g. "PROJ-123")
    pub ticket_id: String,
    /// Transcript text surrounding the first occurrence
    pub context: String,
    /// Heuristic confidence (0-1)
    pub confidence: f64,
    /// Character offset of the first occurrence
    pub position: usize,
}

/// An action item extracted from the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    /// The sentence carrying the action
    pub action: String,
    /// Name of the responsible party, if one could be extracted
    pub responsible: Option<String>,
    /// Heuristic confidence (0-1)
    pub confidence: f64,
    /// Local text window around the action
    pub context: String,
}

/// A decision extracted from the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// The sentence carrying the decision
    pub decision: String,
    /// Heuristic confidence (0-1)
    pub confidence: f64,
    /// Local text window around the decision
    pub context: String,
}

/// Complete analysis of one transcript. Produced once per call, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptAnalysis {
    /// Character count of the analyzed text (after any tier truncation)
    pub raw_length: usize,
    /// Word count of the analyzed text
    pub word_count: usize,
    /// Unique ticket mentions in first-seen order
    pub ticket_mentions: Vec<TicketMention>,
    /// Deduplicated action items, highest confidence first
    pub action_items: Vec<ActionItem>,
    /// Deduplicated decisions, highest confidence first
    pub key_decisions: Vec<Decision>,
    /// Participant names in order of first appearance (max 10)
    pub participants: Vec<String>,
    /// Extractive summary, bounded by the tier's summary length
    pub summary: String,
    /// Lexical sentiment score in [-1, 1]
    pub sentiment_score: f64,
    /// Most frequent significant words (max 5)
    pub topics: Vec<String>,
    /// Whether the input exceeded the tier's length ceiling and was cut
    pub truncated: bool,
    /// When the analysis was produced
    pub processed_at: DateTime<Utc>,
}

/// Ticket-scoped view of an analysis: the subset of extracted signal that
/// concerns one ticket id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketAnalysis {
    /// The ticket id the view was filtered to (normalized)
    pub ticket_id: String,
    /// False when the transcript never mentions the ticket
    pub relevant: bool,
    /// Mentions of this ticket only
    pub mentions: Vec<TicketMention>,
    /// Action items referencing this ticket or tracker vocabulary
    pub action_items: Vec<ActionItem>,
    /// Decisions referencing this ticket or tracker vocabulary
    pub key_decisions: Vec<Decision>,
    /// General summary, or a placeholder when not relevant
    pub summary: String,
    /// When the analysis was produced
    pub processed_at: DateTime<Utc>,
}
