// Resume analysis prompt templates.

use crate::llm_client::prompts::fill_template;
use crate::resume::identity::MODEL_SENTINEL;

/// Resume text beyond this many characters is dropped before prompting.
pub const MAX_RESUME_CHARS: usize = 15_000;

/// Name extraction prompt. Replace `{lines}` and `{sentinel}` before sending.
pub const NAME_PROMPT_TEMPLATE: &str = r#"Below are the first lines of a resume. Identify the candidate's full name.

Return ONLY the name, nothing else: no labels, no punctuation, no explanation.
If no person's name is present, return exactly: {sentinel}

RESUME START:
{lines}"#;

/// Critique prompt. Replace `{candidate_name}` and `{resume_text}` before sending.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"You are a senior technical recruiter and career coach reviewing a software engineering resume.
Address the candidate as {candidate_name} throughout the review.

Write the review in Markdown with these sections:

## Overall Impression
Two or three sentences on how the resume reads at a glance.

## Strengths
What works well, with specific references to the resume.

## Areas for Improvement
Concrete weaknesses: vague bullets, missing metrics, gaps, irrelevant content.

## Technical Skills Assessment
How the listed skills and projects position the candidate for software roles.

## Format & Readability
Layout, length, ordering and consistency.

## Actionable Recommendations
A numbered list of the most valuable changes, most important first.

RESUME TEXT:
{resume_text}"#;

/// Keeps the first `MAX_RESUME_CHARS` characters. Shorter text is returned unchanged.
pub fn truncate_resume(text: &str) -> &str {
    match text.char_indices().nth(MAX_RESUME_CHARS) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

pub fn build_name_prompt(lines: &[&str]) -> String {
    let lines = lines.join("\n");
    fill_template(
        NAME_PROMPT_TEMPLATE,
        &[("lines", lines.as_str()), ("sentinel", MODEL_SENTINEL)],
    )
}

pub fn build_review_prompt(candidate_name: &str, resume_text: &str) -> String {
    fill_template(
        REVIEW_PROMPT_TEMPLATE,
        &[
            ("candidate_name", candidate_name),
            ("resume_text", truncate_resume(resume_text)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_not_truncated() {
        let text = "Ada Lovelace\nMathematician";
        assert_eq!(truncate_resume(text), text);
    }

    #[test]
    fn test_text_at_limit_is_not_truncated() {
        let text = "a".repeat(MAX_RESUME_CHARS);
        assert_eq!(truncate_resume(&text).len(), MAX_RESUME_CHARS);
    }

    #[test]
    fn test_long_text_keeps_exactly_first_chars() {
        let text = format!("{}{}", "a".repeat(MAX_RESUME_CHARS), "TAIL");
        let truncated = truncate_resume(&text);
        assert_eq!(truncated.chars().count(), MAX_RESUME_CHARS);
        assert!(!truncated.contains("TAIL"));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_RESUME_CHARS + 10);
        let truncated = truncate_resume(&text);
        assert_eq!(truncated.chars().count(), MAX_RESUME_CHARS);
        assert_eq!(truncated.len(), MAX_RESUME_CHARS * 2);
    }

    #[test]
    fn test_review_prompt_truncates_resume() {
        let text = format!("{}{}", "b".repeat(MAX_RESUME_CHARS), "OVERFLOW");
        let prompt = build_review_prompt("Ada Lovelace", &text);
        assert!(prompt.contains("Address the candidate as Ada Lovelace"));
        assert!(!prompt.contains("OVERFLOW"));
    }

    #[test]
    fn test_review_prompt_is_deterministic() {
        assert_eq!(
            build_review_prompt("the candidate", "resume"),
            build_review_prompt("the candidate", "resume")
        );
    }

    #[test]
    fn test_resume_text_is_not_treated_as_template() {
        let prompt = build_review_prompt("{resume_text}", "Skills: {candidate_name}");
        assert!(prompt.contains("Address the candidate as {resume_text} throughout"));
        assert!(prompt.ends_with("RESUME TEXT:\nSkills: {candidate_name}"));
    }

    #[test]
    fn test_name_prompt_lists_lines() {
        let prompt = build_name_prompt(&["Ada Lovelace", "London"]);
        assert!(prompt.ends_with("RESUME START:\nAda Lovelace\nLondon"));
        assert!(prompt.contains(&format!("return exactly: {MODEL_SENTINEL}\n")));
    }
}
