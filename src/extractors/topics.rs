use std::collections::HashMap;

/// Maximum number of topics reported per transcript
pub const MAX_TOPICS: usize = 5;

/// Minimum word length for a token to be topic-worthy
const MIN_TOPIC_LEN: usize = 5;

/// Frequent conversational words that carry no topical signal
const STOPWORDS: &[&str] = &[
    "about", "after", "again", "agreed", "along", "also", "among", "around", "because", "been",
    "before", "being", "between", "called", "could", "doing", "during", "every", "first", "going",
    "gonna", "great", "having", "little", "make", "many", "maybe", "meeting", "might", "more",
    "most", "much", "need", "other", "people", "pretty", "probably", "really", "right", "said",
    "should", "since", "some", "something", "still", "such", "thanks", "that", "their", "them",
    "then", "there", "these", "they", "thing", "things", "think", "this", "those", "through",
    "today", "under", "until", "very", "want", "wanted", "week", "were", "what", "when", "where",
    "which", "while", "will", "with", "would", "yeah", "your",
];

/// Most frequent significant words in the transcript, capped at
/// [`MAX_TOPICS`]. Ties break toward the word seen earlier, keeping the
/// output deterministic.
pub fn extract_topics(text: &str) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (index, raw) in text.split_whitespace().enumerate() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if word.chars().count() < MIN_TOPIC_LEN
            || !word.chars().all(|c| c.is_alphabetic())
            || STOPWORDS.contains(&word.as_str())
        {
            continue;
        }
        *counts.entry(word.clone()).or_insert(0) += 1;
        first_seen.entry(word).or_insert(index);
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by_key(|(word, count)| (std::cmp::Reverse(*count), first_seen[word]));
    ranked
        .into_iter()
        .take(MAX_TOPICS)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_ranking() {
        let text = "The database migration is risky. The database rollback plan covers the \
                    migration. Database snapshots help.";
        let topics = extract_topics(text);
        assert_eq!(topics[0], "database");
        assert_eq!(topics[1], "migration");
    }

    #[test]
    fn test_stopwords_and_short_words_excluded() {
        let topics = extract_topics("They said this would be fine and we all agreed about that.");
        assert!(topics.is_empty());
    }

    #[test]
    fn test_capped_at_five() {
        let text = "alpha alpha bravo bravo charlie charlie deltaword deltaword echoes echoes \
                    foxtrot foxtrot";
        let topics = extract_topics(text);
        assert_eq!(topics.len(), MAX_TOPICS);
    }

    #[test]
    fn test_deterministic_tie_break() {
        let topics = extract_topics("kernel compiler kernel compiler runtime");
        assert_eq!(topics, vec!["kernel", "compiler", "runtime"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_topics("").is_empty());
    }
}
