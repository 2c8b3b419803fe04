//! Renders the client-held transcript into the context block of a prompt.
//!
//! The header/footer tell the model which turns it wrote itself. Without them
//! the model tends to treat its own earlier hints as the student's ideas.

use crate::mentor::models::{ConversationTurn, Role};

pub const TRANSCRIPT_HEADER: &str = "\
=== CONVERSATION SO FAR ===
Lines tagged [YOU (MENTOR) SAID] are YOUR OWN earlier replies, not the student's work.
Lines tagged [STUDENT SAID] are the student's messages.";

pub const TRANSCRIPT_FOOTER: &str = "\
=== END OF CONVERSATION ===
Remember: anything tagged [YOU (MENTOR) SAID] was written by you. Do not credit it to the student.";

const STUDENT_TAG: &str = "[STUDENT SAID]";
const MENTOR_TAG: &str = "[YOU (MENTOR) SAID]";

/// Returns the context block for `history`, or `None` when it holds no turn
/// with a recognised role.
pub fn render_transcript(history: &[ConversationTurn]) -> Option<String> {
    let lines: Vec<String> = history
        .iter()
        .filter_map(|turn| {
            let tag = match turn.role {
                Role::User => STUDENT_TAG,
                Role::Mentor => MENTOR_TAG,
                Role::Unknown => return None,
            };
            Some(format!("{tag}: {}", turn.content))
        })
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(format!(
        "{TRANSCRIPT_HEADER}\n{}\n{TRANSCRIPT_FOOTER}",
        lines.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_has_no_block() {
        assert!(render_transcript(&[]).is_none());
    }

    #[test]
    fn test_turns_are_tagged_in_order() {
        let history = vec![
            ConversationTurn::user("Can I have a hint?"),
            ConversationTurn::mentor("Think about complements."),
            ConversationTurn::user("Use a hash map?"),
        ];
        let block = render_transcript(&history).unwrap();

        let expected_body = "[STUDENT SAID]: Can I have a hint?\n\
                             [YOU (MENTOR) SAID]: Think about complements.\n\
                             [STUDENT SAID]: Use a hash map?";
        assert!(block.starts_with(TRANSCRIPT_HEADER));
        assert!(block.ends_with(TRANSCRIPT_FOOTER));
        assert!(block.contains(expected_body));
    }

    #[test]
    fn test_unknown_roles_are_skipped() {
        let history = vec![
            ConversationTurn {
                role: Role::Unknown,
                content: "Session started".to_string(),
            },
            ConversationTurn::user("hello"),
        ];
        let block = render_transcript(&history).unwrap();
        assert!(!block.contains("Session started"));
        assert!(block.contains("[STUDENT SAID]: hello"));
    }

    #[test]
    fn test_only_unknown_roles_has_no_block() {
        let history = vec![ConversationTurn {
            role: Role::Unknown,
            content: "Session started".to_string(),
        }];
        assert!(render_transcript(&history).is_none());
    }
}
