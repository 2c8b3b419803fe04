//! Structured Response Interpreter — turns raw model text into recommendations.
//!
//! A malformed answer is an expected outcome, not an error: it comes back as
//! `Interpretation::Unparsed` carrying the raw text so the caller can still
//! show it. Only transport/auth failures use the error channel.

use serde::{Deserialize, Serialize};

/// One suggested problem, as decoded from the model's JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub problem_name: String,
    pub topic: String,
    pub difficulty: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Parsed(Vec<RecommendationItem>),
    Unparsed {
        /// The generated text exactly as received.
        raw_text: String,
        diagnostic: String,
    },
}

/// Strips a surrounding ``` fence and its optional language tag
/// (```json, ```JSON, ```javascript, ...). Unfenced text is only trimmed.
pub fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // The language tag, if any, runs to the end of the opening line.
    let body = match rest.find('\n') {
        Some(newline) if is_language_tag(&rest[..newline]) => &rest[newline + 1..],
        Some(_) => rest,
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

fn is_language_tag(s: &str) -> bool {
    s.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
}

/// Decodes the model's answer into recommendation items.
pub fn interpret(raw_text: &str) -> Interpretation {
    match serde_json::from_str::<Vec<RecommendationItem>>(strip_fences(raw_text)) {
        Ok(items) => Interpretation::Parsed(items),
        Err(e) => Interpretation::Unparsed {
            raw_text: raw_text.to_string(),
            diagnostic: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &str = r#"[
        {"problem_name": "Longest Substring Without Repeating Characters", "topic": "Sliding Window", "difficulty": "Medium", "reason": "Builds on Two Sum hashing"},
        {"problem_name": "Merge Intervals", "topic": "Sorting", "difficulty": "Medium", "reason": "No interval problems solved yet"}
    ]"#;

    #[test]
    fn test_strip_fences_with_json_tag() {
        let input = "```json\n[1, 2]\n```";
        assert_eq!(strip_fences(input), "[1, 2]");
    }

    #[test]
    fn test_strip_fences_without_tag() {
        let input = "```\n[1, 2]\n```";
        assert_eq!(strip_fences(input), "[1, 2]");
    }

    #[test]
    fn test_strip_fences_with_other_tag_and_padding() {
        let input = "  \n```JavaScript\n[1, 2]\n```\n\n";
        assert_eq!(strip_fences(input), "[1, 2]");
    }

    #[test]
    fn test_strip_fences_single_line() {
        assert_eq!(strip_fences("```json[1, 2]```"), "[1, 2]");
    }

    #[test]
    fn test_strip_fences_no_fences() {
        assert_eq!(strip_fences("  [1, 2] "), "[1, 2]");
    }

    #[test]
    fn test_strip_fences_missing_closing_fence() {
        assert_eq!(strip_fences("```json\n[1, 2]"), "[1, 2]");
    }

    #[test]
    fn test_fenced_output_decodes_like_bare_output() {
        let fenced = format!("```json\n{ITEMS}\n```");
        assert_eq!(interpret(&fenced), interpret(ITEMS));
        match interpret(&fenced) {
            Interpretation::Parsed(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].problem_name, "Merge Intervals");
            }
            other => panic!("expected parsed items, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_output_keeps_raw_text() {
        let raw = "```json\n[{\"problem_name\": \"Two Sum\",]\n```";
        match interpret(raw) {
            Interpretation::Unparsed { raw_text, diagnostic } => {
                assert_eq!(raw_text, raw);
                assert!(!diagnostic.is_empty());
            }
            other => panic!("expected unparsed, got {other:?}"),
        }
    }

    #[test]
    fn test_prose_answer_is_unparsed() {
        let raw = "Sure! Here are some problems you might enjoy: Two Sum, 3Sum.";
        assert!(matches!(interpret(raw), Interpretation::Unparsed { .. }));
    }

    #[test]
    fn test_items_missing_fields_are_unparsed() {
        let raw = r#"[{"problem_name": "Two Sum", "topic": "Hashing"}]"#;
        assert!(matches!(interpret(raw), Interpretation::Unparsed { .. }));
    }

    #[test]
    fn test_empty_array_is_parsed() {
        assert_eq!(interpret("[]"), Interpretation::Parsed(vec![]));
    }
}
