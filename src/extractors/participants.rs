use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of participants reported per transcript
pub const MAX_PARTICIPANTS: usize = 10;

// Speaker-label conventions found in meeting transcripts. Name shape is a
// plain capitalized-word heuristic, no named-entity recognition.
static SPEAKER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*([A-Z][a-z]{1,18})\s*:").unwrap());

static REPORTED_SPEECH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]{1,18})\s+(?:said|mentioned|asked|suggested|noted|stated)\b").unwrap()
});

static THANKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?i:thanks|thank\s+you),?\s+([A-Z][a-z]{1,18})\b").unwrap());

/// Whether a captured token qualifies as a name: 2 to 19 characters,
/// uppercase first letter, lowercase tail. The regexes already enforce the
/// shape; this re-checks the length bound.
fn qualifies_as_name(token: &str) -> bool {
    let len = token.chars().count();
    (2..20).contains(&len)
}

/// Extract up to [`MAX_PARTICIPANTS`] distinct participant names, in order
/// of first appearance. Runs on unnormalized text so line-start speaker
/// labels still anchor.
pub fn extract_participants(text: &str) -> Vec<String> {
    let mut participants: Vec<String> = Vec::new();

    let mut matches: Vec<(usize, String)> = Vec::new();
    for regex in [&SPEAKER_LABEL, &REPORTED_SPEECH, &THANKED] {
        for caps in regex.captures_iter(text) {
            let name = caps.get(1).unwrap();
            if qualifies_as_name(name.as_str()) {
                matches.push((name.start(), name.as_str().to_string()));
            }
        }
    }
    matches.sort_by_key(|(pos, _)| *pos);

    for (_, name) in matches {
        if participants.len() >= MAX_PARTICIPANTS {
            break;
        }
        if !participants.contains(&name) {
            participants.push(name);
        }
    }

    participants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_labels() {
        let text = "Alice: let's get started.\nBob: sounds good to me.\nAlice: great.";
        assert_eq!(extract_participants(text), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_reported_speech() {
        let text = "John said he will look into it. Later Jane mentioned the failing tests.";
        assert_eq!(extract_participants(text), vec!["John", "Jane"]);
    }

    #[test]
    fn test_thanks_convention() {
        let text = "That wraps it up, thanks Maria for the demo. Thank you Pedro as well.";
        assert_eq!(extract_participants(text), vec!["Maria", "Pedro"]);
    }

    #[test]
    fn test_insertion_order_and_cap() {
        let mut text = String::new();
        for name in [
            "Ada", "Ben", "Cleo", "Dan", "Elif", "Finn", "Gita", "Hugo", "Iris", "Jack", "Kiri",
            "Liam",
        ] {
            text.push_str(&format!("{}: checking in.\n", name));
        }
        let participants = extract_participants(&text);
        assert_eq!(participants.len(), MAX_PARTICIPANTS);
        assert_eq!(participants[0], "Ada");
        assert!(!participants.contains(&"Kiri".to_string()));
    }

    #[test]
    fn test_non_name_tokens_rejected() {
        // lowercase subject, all-caps token, single letter
        let text = "someone said it works. HQ: roll call. A: here.";
        assert!(extract_participants(text).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_participants("").is_empty());
    }
}
