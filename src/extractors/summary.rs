use crate::text::sentences::split_sentences;

use super::actions::ACTION_VOCAB;
use super::decisions::DECISION_VOCAB;
use super::tickets::contains_ticket_id;

/// Fraction of sentences carried into the summary before the cap applies
const SELECTION_RATIO: f64 = 0.3;

/// Floor on selected sentences (when enough qualify)
const MIN_SELECTED: usize = 3;

/// Build an extractive summary of at most `max_length` characters,
/// selecting up to `max_sentences` sentences.
///
/// Sentences are scored (position, signal vocabulary, length), the top
/// scorers are picked, and the picks are put back into transcript order so
/// the summary reads chronologically. Output over `max_length` is cut with
/// a trailing ellipsis.
pub fn summarize(text: &str, max_length: usize, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return String::new();
    }

    if sentences.len() <= MIN_SELECTED {
        return truncate_with_ellipsis(&join_sentences(&sentences), max_length);
    }

    let n = sentences.len();
    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(i, s)| (i, score_sentence(s, i, n)))
        .collect();

    let count = ((n as f64 * SELECTION_RATIO).ceil() as usize).clamp(MIN_SELECTED, max_sentences);

    // Highest score first; ties go to the earlier sentence
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0)));
    let mut selected: Vec<usize> = scored.iter().take(count).map(|(i, _)| *i).collect();

    // Back into transcript order: the summary must read chronologically
    // even though selection was by score.
    selected.sort_unstable();

    let picks: Vec<String> = selected.into_iter().map(|i| sentences[i].clone()).collect();
    truncate_with_ellipsis(&join_sentences(&picks), max_length)
}

/// First one or two sentences, verbatim. Used as the degraded output when
/// summary scoring fails.
pub fn fallback_summary(text: &str, max_length: usize) -> String {
    let sentences = split_sentences(text);
    let picks: Vec<String> = sentences.into_iter().take(2).collect();
    if picks.is_empty() {
        return String::new();
    }
    truncate_with_ellipsis(&join_sentences(&picks), max_length)
}

fn score_sentence(sentence: &str, index: usize, total: usize) -> f64 {
    let mut score = 0.0;
    let position = index as f64 / total as f64;

    // Openings set context, closings carry wrap-up and next steps
    if position < 0.3 {
        score += 0.2;
    }
    if position >= 0.7 {
        score += 0.15;
    }

    let lower = sentence.to_lowercase();
    let has_signal_vocab = ACTION_VOCAB
        .iter()
        .chain(DECISION_VOCAB.iter())
        .any(|kw| lower.contains(kw));
    if has_signal_vocab || contains_ticket_id(sentence) {
        score += 0.3;
    }

    let chars = sentence.chars().count();
    if (20..=200).contains(&chars) {
        score += 0.2;
    } else {
        score -= 0.2;
    }

    score
}

fn join_sentences(sentences: &[String]) -> String {
    let mut joined = sentences.join(". ");
    joined.push('.');
    joined
}

fn truncate_with_ellipsis(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let keep = max_length.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
