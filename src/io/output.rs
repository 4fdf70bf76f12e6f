use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::TranscriptAnalysis;

/// Write an analysis as pretty-printed JSON
pub fn write_json(analysis: &TranscriptAnalysis, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, analysis).context("Failed to write JSON")?;
    Ok(())
}

/// Human-readable rendering of an analysis
pub struct AnalysisReport<'a> {
    analysis: &'a TranscriptAnalysis,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(analysis: &'a TranscriptAnalysis) -> Self {
        Self { analysis }
    }

    pub fn format(&self) -> String {
        let a = self.analysis;
        let mut out = String::new();

        out.push_str("Meeting Analysis\n");
        out.push_str("================\n");
        out.push_str(&format!(
            "{} words, {} characters, sentiment {:+.2}{}\n\n",
            a.word_count,
            a.raw_length,
            a.sentiment_score,
            if a.truncated { " (input truncated)" } else { "" }
        ));

        out.push_str("Summary\n-------\n");
        out.push_str(&wrap_text(&a.summary, 80));
        out.push_str("\n\n");

        if !a.ticket_mentions.is_empty() {
            out.push_str("Ticket Mentions\n---------------\n");
            for m in &a.ticket_mentions {
                out.push_str(&format!(
                    "{}  (confidence {:.2}, position {})\n",
                    m.ticket_id, m.confidence, m.position
                ));
            }
            out.push('\n');
        }

        if !a.action_items.is_empty() {
            out.push_str("Action Items\n------------\n");
            for item in &a.action_items {
                let who = item.responsible.as_deref().unwrap_or("unassigned");
                out.push_str(&format!(
                    "- [{}] {} (confidence {:.2})\n",
                    who, item.action, item.confidence
                ));
            }
            out.push('\n');
        }

        if !a.key_decisions.is_empty() {
            out.push_str("Decisions\n---------\n");
            for d in &a.key_decisions {
                out.push_str(&format!(
                    "- {} (confidence {:.2})\n",
                    d.decision, d.confidence
                ));
            }
            out.push('\n');
        }

        if !a.participants.is_empty() {
            out.push_str("Participants\n------------\n");
            out.push_str(&a.participants.join(", "));
            out.push('\n');
        }

        if !a.topics.is_empty() {
            out.push_str("\nTopics: ");
            out.push_str(&a.topics.join(", "));
            out.push('\n');
        }

        out
    }

    /// Write the report to a text file
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        if line_len + word.len() + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word.len();
    }

    result
}
