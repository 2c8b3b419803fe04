//! Guided solver session — one stateless turn per request.
//!
//! Flow: validate → hint level from transcript → stage prompt → one LLM call.
//! Nothing is stored; the next turn arrives with the whole transcript again.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::mentor::hints::HintLevel;
use crate::mentor::models::{MentorReply, SessionRequest, Stage};
use crate::mentor::prompts::build_stage_prompt;

/// Checks the request and resolves its stage. Runs before any LLM call.
pub fn validate_request(request: &SessionRequest) -> Result<Stage, AppError> {
    if request.problem.trim().is_empty() {
        return Err(AppError::Validation("problem cannot be empty".to_string()));
    }

    if request.stage.trim().is_empty() {
        return Err(AppError::Validation("stage is required".to_string()));
    }

    let stage: Stage = request
        .stage
        .parse()
        .map_err(|e| AppError::Validation(format!("{e}")))?;

    if stage == Stage::Feedback && feedback_idea(request).is_none() {
        return Err(AppError::Validation(
            "user_input is required for the feedback stage".to_string(),
        ));
    }

    Ok(stage)
}

fn feedback_idea(request: &SessionRequest) -> Option<&str> {
    request
        .user_input
        .as_deref()
        .filter(|idea| !idea.trim().is_empty())
}

/// Produces the mentor's reply for one turn of the guided session.
pub async fn resolve_session_turn(
    llm: &dyn TextGenerator,
    request: &SessionRequest,
) -> Result<MentorReply, AppError> {
    let stage = validate_request(request)?;
    let hint_level = HintLevel::from_history(&request.history);

    info!(
        "Guided session turn: stage={stage:?}, history_len={}, hint_level={}",
        request.history.len(),
        hint_level.0
    );

    let prompt = build_stage_prompt(
        stage,
        &request.problem,
        feedback_idea(request),
        &request.history,
        hint_level,
    );

    let response = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Guided session {stage:?} failed: {e}")))?;

    Ok(MentorReply {
        response,
        stage,
        hint_level: hint_level.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedGenerator;
    use crate::mentor::models::ConversationTurn;
    use crate::mentor::prompts::{SECOND_HINT_INSTRUCTION, MENTOR_SYSTEM};

    fn request(stage: &str, user_input: Option<&str>, history: Vec<ConversationTurn>) -> SessionRequest {
        SessionRequest {
            problem: "Two Sum".to_string(),
            stage: stage.to_string(),
            user_input: user_input.map(String::from),
            history,
        }
    }

    #[tokio::test]
    async fn test_hint_turn_uses_transcript_level() {
        let llm = ScriptedGenerator::replying("**Hint:** name the pattern.");
        let req = request("hint", None, vec![ConversationTurn::user("can I get a hint")]);

        let reply = resolve_session_turn(&llm, &req).await.unwrap();

        assert_eq!(reply.stage, Stage::Hint);
        assert_eq!(reply.hint_level, 1);
        assert_eq!(reply.response, "**Hint:** name the pattern.");
        assert_eq!(llm.calls(), 1);
        let prompt = &llm.prompts()[0];
        assert!(prompt.starts_with(MENTOR_SYSTEM));
        assert!(prompt.contains(SECOND_HINT_INSTRUCTION));
    }

    #[tokio::test]
    async fn test_reply_is_returned_unmodified() {
        let markdown = "## Solution\n\n```python\nreturn []\n```\n";
        let llm = ScriptedGenerator::replying(markdown);
        let reply = resolve_session_turn(&llm, &request("solution", None, vec![]))
            .await
            .unwrap();
        assert_eq!(reply.response, markdown);
    }

    #[tokio::test]
    async fn test_unknown_stage_is_rejected_without_llm_call() {
        let llm = ScriptedGenerator::replying("unused");
        let err = resolve_session_turn(&llm, &request("review", None, vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_feedback_without_idea_is_rejected_without_llm_call() {
        let llm = ScriptedGenerator::replying("unused");
        for input in [None, Some(""), Some("   ")] {
            let err = resolve_session_turn(&llm, &request("feedback", input, vec![]))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_problem_is_rejected() {
        let llm = ScriptedGenerator::replying("unused");
        let mut req = request("explain", None, vec![]);
        req.problem = "  \n".to_string();
        let err = resolve_session_turn(&llm, &req).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn test_solution_allowed_with_empty_history() {
        let llm = ScriptedGenerator::replying("full solution");
        let reply = resolve_session_turn(&llm, &request("solution", None, vec![]))
            .await
            .unwrap();
        assert_eq!(reply.stage, Stage::Solution);
        assert_eq!(reply.hint_level, 0);
    }

    #[tokio::test]
    async fn test_generation_failure_is_reported_once() {
        let llm = ScriptedGenerator::failing();
        let err = resolve_session_turn(&llm, &request("explain", None, vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(llm.calls(), 1);
    }
}
