use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subscription tier. Selects length ceilings only; extraction rules are
/// identical across tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Ai,
    Enterprise,
}

impl Tier {
    /// The length ceilings for this tier
    pub fn config(&self) -> TierConfig {
        match self {
            Tier::Basic => TierConfig {
                max_transcript_length: 10_000,
                summary_max_length: 500,
                max_summary_sentences: 3,
                max_action_items: 10,
                max_decisions: 8,
            },
            Tier::Ai => TierConfig {
                max_transcript_length: 50_000,
                summary_max_length: 1_500,
                max_summary_sentences: 5,
                max_action_items: 10,
                max_decisions: 8,
            },
            Tier::Enterprise => TierConfig {
                max_transcript_length: 200_000,
                summary_max_length: 3_000,
                max_summary_sentences: 5,
                max_action_items: 10,
                max_decisions: 8,
            },
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Basic => write!(f, "basic"),
            Tier::Ai => write!(f, "ai"),
            Tier::Enterprise => write!(f, "enterprise"),
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Tier::Basic),
            "ai" => Ok(Tier::Ai),
            "enterprise" => Ok(Tier::Enterprise),
            other => Err(format!(
                "unknown tier '{}' (expected basic, ai, or enterprise)",
                other
            )),
        }
    }
}

/// Per-tier extraction limits
#[derive(Debug, Clone)]
pub struct TierConfig {
    /// Transcripts longer than this are truncated before extraction
    pub max_transcript_length: usize,
    /// Maximum summary length in characters
    pub summary_max_length: usize,
    /// Upper bound on sentences selected into the summary
    pub max_summary_sentences: usize,
    /// Maximum surviving action items
    pub max_action_items: usize,
    /// Maximum surviving decisions
    pub max_decisions: usize,
}

impl Default for TierConfig {
    fn default() -> Self {
        Tier::Basic.config()
    }
}
