/// Minimum trimmed length for a sentence to carry signal
pub const MIN_SENTENCE_LEN: usize = 10;

/// Collapse runs of whitespace (including newlines) to single spaces
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into non-empty trimmed sentences.
///
/// Whitespace is collapsed first, then the text is split on runs of
/// terminal punctuation (`.`, `!`, `?`). Sentences at or under
/// [`MIN_SENTENCE_LEN`] characters are discarded; raw pattern scans
/// (ticket ids) operate on the unsplit text instead.
pub fn split_sentences(text: &str) -> Vec<String> {
    normalize_whitespace(text)
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_LEN)
        .map(str::to_string)
        .collect()
}

/// Step `index` back to the nearest char boundary at or before it
pub fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while i > 0 && !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Step `index` forward to the nearest char boundary at or after it
pub fn ceil_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    let mut i = index;
    while i < text.len() && !text.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// A fixed-radius character window around `[start, end)`, trimmed
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let lo = floor_char_boundary(text, start.saturating_sub(radius));
    let hi = ceil_char_boundary(text, (end + radius).min(text.len()));
    text[lo..hi].trim().to_string()
}
