//! Solved-problem log: CRUD scoped to the owning user.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::problem::{Difficulty, ProblemRow};
use crate::models::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProblemRequest {
    pub user_id: Option<Uuid>,
    pub number: Option<i32>,
    #[serde(default)]
    pub name: String,
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProblemRequest {
    pub number: Option<i32>,
    pub name: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub topic: Option<String>,
    pub summary: Option<String>,
}

impl UpdateProblemRequest {
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
            && self.name.is_none()
            && self.difficulty.is_none()
            && self.topic.is_none()
            && self.summary.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct CreateProblemResponse {
    pub message: String,
    pub id: Uuid,
    pub points: i32,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// A validated new problem entry.
#[derive(Debug, PartialEq)]
pub struct NewProblem {
    pub user_id: Uuid,
    pub number: i32,
    pub name: String,
    pub difficulty: Difficulty,
    pub topic: String,
    pub summary: String,
}

impl TryFrom<CreateProblemRequest> for NewProblem {
    type Error = AppError;

    fn try_from(req: CreateProblemRequest) -> Result<Self, Self::Error> {
        let missing = || AppError::Validation("All fields except summary are required".to_string());

        let name = req.name.trim().to_string();
        let topic = req.topic.trim().to_string();
        if name.is_empty() || topic.is_empty() {
            return Err(missing());
        }

        Ok(NewProblem {
            user_id: req.user_id.ok_or_else(missing)?,
            number: req.number.ok_or_else(missing)?,
            name,
            difficulty: req.difficulty.ok_or_else(missing)?,
            topic,
            summary: req.summary,
        })
    }
}

/// GET /api/problems?user_id=
pub async fn handle_list_problems(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ProblemRow>>, AppError> {
    let problems = sqlx::query_as::<_, ProblemRow>(
        "SELECT * FROM problems WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(problems))
}

/// POST /api/problems
pub async fn handle_create_problem(
    State(state): State<AppState>,
    Json(req): Json<CreateProblemRequest>,
) -> Result<(StatusCode, Json<CreateProblemResponse>), AppError> {
    let problem = NewProblem::try_from(req)?;
    let id = Uuid::new_v4();
    let points = problem.difficulty.points();

    sqlx::query(
        r#"
        INSERT INTO problems (id, user_id, number, name, difficulty, topic, summary, points)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(problem.user_id)
    .bind(problem.number)
    .bind(&problem.name)
    .bind(problem.difficulty.as_str())
    .bind(&problem.topic)
    .bind(&problem.summary)
    .bind(points)
    .execute(&state.db)
    .await?;

    info!("User {} logged problem #{} ({points} pts)", problem.user_id, problem.number);

    Ok((
        StatusCode::CREATED,
        Json(CreateProblemResponse {
            message: "Problem added successfully".to_string(),
            id,
            points,
        }),
    ))
}

/// PUT /api/problems/:id?user_id=
///
/// Partial update. Changing the difficulty recomputes the points.
pub async fn handle_update_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<UpdateProblemRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if req.is_empty() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let result = sqlx::query(
        r#"
        UPDATE problems SET
            number     = COALESCE($1, number),
            name       = COALESCE($2, name),
            difficulty = COALESCE($3, difficulty),
            points     = COALESCE($4, points),
            topic      = COALESCE($5, topic),
            summary    = COALESCE($6, summary)
        WHERE id = $7 AND user_id = $8
        "#,
    )
    .bind(req.number)
    .bind(req.name.as_deref().map(str::trim))
    .bind(req.difficulty.map(Difficulty::as_str))
    .bind(req.difficulty.map(Difficulty::points))
    .bind(req.topic.as_deref().map(str::trim))
    .bind(req.summary.as_deref())
    .bind(id)
    .bind(params.user_id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Problem {id} not found")));
    }

    Ok(Json(MessageResponse {
        message: "Problem updated successfully".to_string(),
    }))
}

/// DELETE /api/problems/:id?user_id=
pub async fn handle_delete_problem(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let result = sqlx::query("DELETE FROM problems WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(params.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Problem {id} not found")));
    }

    Ok(Json(MessageResponse {
        message: "Problem deleted successfully".to_string(),
    }))
}
