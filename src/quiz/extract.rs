use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::QuizError;

fn array_regex() -> &'static Regex {
    static ARRAY: OnceLock<Regex> = OnceLock::new();
    // greedy: first '[' through the last ']' in the text
    ARRAY.get_or_init(|| Regex::new(r"(?s)\[.*\]").unwrap())
}

/// Pulls a JSON array out of a model reply that may be wrapped in prose or
/// markdown fences.
///
/// The span from the first `[` to the last `]` is parsed when present,
/// otherwise the whole text is. Malformed JSON is not repaired, and a reply
/// holding several bracketed fragments with text between them fails rather
/// than picking one. Anything that does not parse as an array is a
/// [`QuizError::Parse`].
pub fn extract_json_array(content: &str) -> Result<Vec<Value>, QuizError> {
    let candidate = array_regex()
        .find(content)
        .map_or(content, |m| m.as_str());

    serde_json::from_str::<Vec<Value>>(candidate).map_err(|source| QuizError::Parse { source })
}
