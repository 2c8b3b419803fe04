// Guided solver prompt templates.
// Every function here is pure: same inputs, byte-identical prompt.

use crate::llm_client::prompts::with_preamble;
use crate::mentor::hints::{HintLevel, HintTier};
use crate::mentor::models::{ConversationTurn, Stage};
use crate::mentor::transcript::render_transcript;

/// Fixed preamble placed before every stage prompt.
pub const MENTOR_SYSTEM: &str = "\
You are an experienced, patient coding mentor helping a student work through a \
data structures and algorithms problem. Guide the student's own thinking; never \
hand over more than the current stage asks for. Format replies in Markdown and \
keep them focused.";

pub const EXPLAIN_INSTRUCTION: &str = "\
Explain this problem simply. Restate what is being asked in plain language, walk \
through one of the examples by hand, and point out the constraints that matter. \
Do NOT suggest an approach or algorithm yet.";

pub const FIRST_HINT_INSTRUCTION: &str = "\
Give the student their FIRST hint. Keep it vague: a gentle nudge about what to \
notice in the problem. Do NOT name a specific algorithm, data structure or technique.";

pub const SECOND_HINT_INSTRUCTION: &str = "\
Give the student their SECOND hint. The first hint was not enough, so name the \
approach or pattern that fits (for example two pointers, sliding window, hashing, \
BFS/DFS, dynamic programming) and say why it fits. Do NOT describe the implementation.";

pub const THIRD_HINT_INSTRUCTION: &str = "\
Give the student their THIRD hint. Be direct about implementation: which data \
structure to keep, what to store in it, and how each step updates it. Do NOT write code.";

pub const FINAL_HINT_INSTRUCTION: &str = "\
Give the student a FINAL hint. Lay out the near-complete approach step by step and \
include short pseudocode, including edge cases. Still do NOT write the full solution \
in a real programming language.";

pub const FEEDBACK_INSTRUCTION: &str = "\
The student has shared their idea for solving the problem. Give constructive \
feedback: say what is right, point out flaws or missed edge cases, and comment on \
its time and space complexity. Do NOT reveal the full solution; ask a guiding \
question if they are off track.";

pub const SOLUTION_INSTRUCTION: &str = "\
Present the complete solution. Include: the key insight, a step-by-step explanation, \
clean well-commented code, time and space complexity analysis, and alternative \
approaches with their trade-offs.";

/// The stage-specific instruction. `hint_level` only matters for `Stage::Hint`.
pub fn stage_instruction(stage: Stage, hint_level: HintLevel) -> &'static str {
    match stage {
        Stage::Explain => EXPLAIN_INSTRUCTION,
        Stage::Hint => match hint_level.tier() {
            HintTier::First => FIRST_HINT_INSTRUCTION,
            HintTier::Second => SECOND_HINT_INSTRUCTION,
            HintTier::Third => THIRD_HINT_INSTRUCTION,
            HintTier::Final => FINAL_HINT_INSTRUCTION,
        },
        Stage::Feedback => FEEDBACK_INSTRUCTION,
        Stage::Solution => SOLUTION_INSTRUCTION,
    }
}

/// Builds the full prompt for one tutoring turn: preamble, problem,
/// optional transcript block, student idea (feedback only), instruction.
pub fn build_stage_prompt(
    stage: Stage,
    problem: &str,
    user_input: Option<&str>,
    history: &[ConversationTurn],
    hint_level: HintLevel,
) -> String {
    let mut sections = vec![format!("PROBLEM:\n{problem}")];

    if let Some(transcript) = render_transcript(history) {
        sections.push(transcript);
    }

    if stage == Stage::Feedback {
        if let Some(idea) = user_input {
            sections.push(format!("STUDENT'S IDEA:\n{idea}"));
        }
    }

    sections.push(format!(
        "YOUR TASK:\n{}",
        stage_instruction(stage, hint_level)
    ));

    with_preamble(MENTOR_SYSTEM, &sections.join("\n\n"))
}
