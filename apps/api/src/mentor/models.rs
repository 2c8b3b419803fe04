use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Who authored a turn in the client-held transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Mentor,
    /// Any other label, a non-string value or a missing role. Skipped when
    /// building context.
    #[default]
    Unknown,
}

impl Role {
    /// `assistant` is what the web client sends for mentor turns.
    pub fn from_label(label: &str) -> Self {
        match label {
            "user" => Role::User,
            "mentor" | "assistant" => Role::Mentor,
            _ => Role::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(label) => Role::from_label(&label),
            _ => Role::Unknown,
        })
    }
}

/// One prior turn of the tutoring dialogue, echoed back by the client on
/// every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    #[serde(default)]
    pub role: Role,
    pub content: String,
}

#[cfg(test)]
impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn mentor(content: impl Into<String>) -> Self {
        Self {
            role: Role::Mentor,
            content: content.into(),
        }
    }
}

/// One phase of the guided solving flow. Each request names exactly one;
/// no ordering between them is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Explain,
    Hint,
    Feedback,
    Solution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStage(pub String);

impl fmt::Display for UnknownStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown stage '{}' (expected one of: explain, hint, feedback, solution)",
            self.0
        )
    }
}

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "explain" => Ok(Stage::Explain),
            "hint" => Ok(Stage::Hint),
            "feedback" => Ok(Stage::Feedback),
            "solution" => Ok(Stage::Solution),
            other => Err(UnknownStage(other.to_string())),
        }
    }
}

/// Request body for POST /api/solve-problem.
///
/// `stage` stays a string on the wire so an unknown value is reported as a
/// validation error in the API's own error format.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub user_input: Option<String>,
    #[serde(default, alias = "conversation_history")]
    pub history: Vec<ConversationTurn>,
}

/// The mentor's answer for one turn. `response` is the model's Markdown,
/// returned unmodified.
#[derive(Debug, Clone, Serialize)]
pub struct MentorReply {
    pub response: String,
    pub stage: Stage,
    pub hint_level: usize,
}
