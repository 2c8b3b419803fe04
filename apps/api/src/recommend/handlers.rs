use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommend::recommender::{recommend_problems, Recommendations};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    /// When set, the user's tracked problems are added to the solved list.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub solved_problems: Vec<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Merges explicit and tracked problem names, dropping blanks and duplicates
/// while keeping first-seen order.
pub fn merge_solved(explicit: Vec<String>, tracked: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for name in explicit.into_iter().chain(tracked) {
        let name = name.trim().to_string();
        if !name.is_empty() && !merged.iter().any(|m| m.eq_ignore_ascii_case(&name)) {
            merged.push(name);
        }
    }
    merged
}

/// POST /api/recommend-problems
///
/// Always answers 200 once the model has replied; an undecodable answer comes
/// back as `raw_response` with an empty `recommendations` list.
pub async fn handle_recommend_problems(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<Recommendations>, AppError> {
    let llm = state.generator()?;

    let tracked = match request.user_id {
        Some(user_id) => {
            sqlx::query_scalar::<_, String>(
                "SELECT name FROM problems WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(user_id)
            .fetch_all(&state.db)
            .await?
        }
        None => Vec::new(),
    };

    let solved = merge_solved(request.solved_problems, tracked);
    let result = recommend_problems(llm, &solved, request.topic.as_deref()).await?;
    Ok(Json(result))
}
