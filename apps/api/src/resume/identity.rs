//! Candidate name resolution for resume analysis.
//!
//! The first lines of a resume usually hold the name, but not reliably, so a
//! single LLM call picks it out of them. Any doubt resolves to a fallback
//! instead of failing the analysis.

use tracing::{debug, warn};

use crate::llm_client::TextGenerator;
use crate::resume::prompts::build_name_prompt;

/// Returned when no usable name could be resolved.
pub const FALLBACK_NAME: &str = "the candidate";
/// What the name prompt tells the model to answer when it sees no name.
/// Passes validation and is returned as-is.
pub const MODEL_SENTINEL: &str = "Candidate";

const HEAD_LINES: usize = 5;
const PROMPT_LINES: usize = 3;
const MAX_NAME_WORDS: usize = 4;
const MAX_NAME_CHARS: usize = 50;

/// The first few non-blank, trimmed lines of the document.
pub fn leading_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(HEAD_LINES)
        .collect()
}

/// 1–4 words and fewer than 50 characters.
pub fn is_plausible_name(candidate: &str) -> bool {
    let words = candidate.split_whitespace().count();
    (1..=MAX_NAME_WORDS).contains(&words) && candidate.chars().count() < MAX_NAME_CHARS
}

/// Resolves a display name from extracted resume text. Never fails.
pub async fn resolve_candidate_name(llm: &dyn TextGenerator, text: &str) -> String {
    let lines = leading_lines(text);
    if lines.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    let head: Vec<&str> = lines.into_iter().take(PROMPT_LINES).collect();
    let prompt = build_name_prompt(&head);

    match llm.generate(&prompt).await {
        Ok(answer) => {
            let name = answer.trim();
            if is_plausible_name(name) {
                debug!("Resolved candidate name: {name}");
                name.to_string()
            } else {
                warn!("Rejected implausible candidate name ({} chars)", name.chars().count());
                FALLBACK_NAME.to_string()
            }
        }
        Err(e) => {
            warn!("Candidate name resolution failed, using fallback: {e}");
            FALLBACK_NAME.to_string()
        }
    }
}
