//! Hint progression — derived from the transcript on every request, never stored.

use crate::mentor::models::{ConversationTurn, Role};

/// How many hints the student has already asked for in this transcript.
///
/// Counts prior user turns whose content contains "hint" in any case. This is
/// a plain substring test, so unrelated words such as "hinty" also count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HintLevel(pub usize);

/// The instruction tier selected by a hint level. Levels 3 and above share
/// the final tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTier {
    /// Vague nudge, no named technique.
    First,
    /// Names the approach or pattern.
    Second,
    /// Implementation detail.
    Third,
    /// Near-complete approach with pseudocode.
    Final,
}

impl HintLevel {
    pub fn from_history(history: &[ConversationTurn]) -> Self {
        let asked = history
            .iter()
            .filter(|turn| turn.role == Role::User)
            .filter(|turn| turn.content.to_lowercase().contains("hint"))
            .count();
        HintLevel(asked)
    }

    pub fn tier(self) -> HintTier {
        match self.0 {
            0 => HintTier::First,
            1 => HintTier::Second,
            2 => HintTier::Third,
            _ => HintTier::Final,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint_requests(k: usize) -> Vec<ConversationTurn> {
        let mut history = Vec::new();
        for i in 0..k {
            history.push(ConversationTurn::user("Can I have a hint?"));
            history.push(ConversationTurn::mentor(format!("Hint number {i}")));
        }
        history
    }

    #[test]
    fn test_level_counts_user_hint_requests() {
        for k in 0..=2 {
            assert_eq!(HintLevel::from_history(&hint_requests(k)), HintLevel(k));
        }
    }

    #[test]
    fn test_tiers_for_first_three_levels() {
        assert_eq!(HintLevel(0).tier(), HintTier::First);
        assert_eq!(HintLevel(1).tier(), HintTier::Second);
        assert_eq!(HintLevel(2).tier(), HintTier::Third);
    }

    #[test]
    fn test_level_three_and_beyond_collapse_to_final_tier() {
        for k in [3, 4, 10] {
            let level = HintLevel::from_history(&hint_requests(k));
            assert_eq!(level, HintLevel(k));
            assert_eq!(level.tier(), HintTier::Final);
        }
    }

    #[test]
    fn test_single_request_selects_second_tier() {
        let history = vec![ConversationTurn::user("can I get a hint")];
        assert_eq!(HintLevel::from_history(&history).tier(), HintTier::Second);
    }

    #[test]
    fn test_mentor_turns_mentioning_hint_are_not_counted() {
        let history = vec![ConversationTurn::mentor("Here is your first HINT: think about sums.")];
        assert_eq!(HintLevel::from_history(&history), HintLevel(0));
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let history = vec![
            ConversationTurn::user("HINT please"),
            ConversationTurn::user("this looks hinty"),
            ConversationTurn::user("no help wanted"),
        ];
        assert_eq!(HintLevel::from_history(&history), HintLevel(2));
    }

    #[test]
    fn test_unknown_roles_are_ignored() {
        let history = vec![ConversationTurn {
            role: Role::Unknown,
            content: "hint".to_string(),
        }];
        assert_eq!(HintLevel::from_history(&history), HintLevel(0));
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let history = hint_requests(2);
        assert_eq!(
            HintLevel::from_history(&history),
            HintLevel::from_history(&history)
        );
    }
}
