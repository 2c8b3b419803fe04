//! Axum route handler for the guided solver.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::mentor::models::{MentorReply, SessionRequest};
use crate::mentor::session::resolve_session_turn;
use crate::state::AppState;

/// POST /api/solve-problem
///
/// Runs one turn of the guided session. The client sends the full transcript
/// each time; the reply is the mentor's Markdown.
pub async fn handle_solve_problem(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<MentorReply>, AppError> {
    let llm = state.generator()?;
    let reply = resolve_session_turn(llm, &request).await?;
    Ok(Json(reply))
}
