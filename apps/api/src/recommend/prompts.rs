// Problem recommendation prompt templates.

use crate::llm_client::prompts::{fill_template, JSON_ONLY_INSTRUCTION};

/// How many problems the model is asked to suggest.
pub const RECOMMENDATION_COUNT: usize = 5;

/// Replace `{count}`, `{solved}`, `{focus}` and `{json_only}` before sending.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"You are a coding interview coach. Based on the problems the student has already solved, recommend {count} LeetCode-style problems they should practice next.

PROBLEMS ALREADY SOLVED:
{solved}

FOCUS:
{focus}

Pick problems that fill gaps in the topics covered and step difficulty up gradually. Do not recommend problems that are already solved.

Return a JSON array with exactly this shape:
[
  {
    "problem_name": "Longest Substring Without Repeating Characters",
    "topic": "Sliding Window",
    "difficulty": "Medium",
    "reason": "One sentence on why this problem is the right next step"
  }
]

difficulty must be one of "Easy", "Medium", "Hard".

{json_only}"#;

pub fn build_recommend_prompt(solved: &[String], topic: Option<&str>) -> String {
    let solved = if solved.is_empty() {
        "None yet: the student is just starting out.".to_string()
    } else {
        solved
            .iter()
            .map(|name| format!("- {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let focus = match topic {
        Some(topic) => format!("Concentrate on the topic: {topic}"),
        None => "Any topic; choose what best rounds out the student's practice.".to_string(),
    };

    let count = RECOMMENDATION_COUNT.to_string();

    fill_template(
        RECOMMEND_PROMPT_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("solved", solved.as_str()),
            ("focus", focus.as_str()),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}
