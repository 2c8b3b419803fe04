//! Dashboard analytics and the global leaderboard.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use crate::errors::AppError;
use crate::state::AppState;
use crate::models::UserIdQuery;

const LEADERBOARD_SIZE: i64 = 10;

#[derive(Debug, Serialize, FromRow)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct TopicCount {
    pub topic: String,
    pub count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct DailyPoints {
    pub date: NaiveDate,
    pub total_points: i64,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PointsOnDate {
    /// `YYYY-MM-DD`
    pub date: String,
    /// Running total up to and including `date`.
    pub points: i64,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total_problems: i64,
    pub total_points: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct LeaderboardEntry {
    pub name: String,
    pub email: String,
    pub total_points: i64,
    pub total_problems: i64,
}

/// Turns per-day sums (ascending by date) into a cumulative series.
pub fn accumulate_points(days: &[DailyPoints]) -> Vec<PointsOnDate> {
    days.iter()
        .scan(0i64, |total, day| {
            *total += day.total_points;
            Some(PointsOnDate {
                date: day.date.format("%Y-%m-%d").to_string(),
                points: *total,
            })
        })
        .collect()
}

/// GET /api/analytics/difficulty?user_id=
pub async fn handle_by_difficulty(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<DifficultyCount>>, AppError> {
    let rows = sqlx::query_as::<_, DifficultyCount>(
        "SELECT difficulty, COUNT(*) AS count FROM problems WHERE user_id = $1 GROUP BY difficulty",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/analytics/topic?user_id=
pub async fn handle_by_topic(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<TopicCount>>, AppError> {
    let rows = sqlx::query_as::<_, TopicCount>(
        r#"
        SELECT topic, COUNT(*) AS count
        FROM problems
        WHERE user_id = $1
        GROUP BY topic
        ORDER BY count DESC
        "#,
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/analytics/points?user_id=
pub async fn handle_points_over_time(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<PointsOnDate>>, AppError> {
    let days = sqlx::query_as::<_, DailyPoints>(
        r#"
        SELECT created_at::date AS date, SUM(points)::BIGINT AS total_points
        FROM problems
        WHERE user_id = $1
        GROUP BY created_at::date
        ORDER BY date ASC
        "#,
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(accumulate_points(&days)))
}

/// GET /api/analytics/summary?user_id=
pub async fn handle_summary(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Summary>, AppError> {
    let (total_problems, total_points): (i64, i64) = sqlx::query_as(
        "SELECT COUNT(*), COALESCE(SUM(points), 0)::BIGINT FROM problems WHERE user_id = $1",
    )
    .bind(params.user_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(Summary {
        total_problems,
        total_points,
    }))
}

/// GET /api/leaderboard
pub async fn handle_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let rows = sqlx::query_as::<_, LeaderboardEntry>(
        r#"
        SELECT u.name, u.email,
               COALESCE(SUM(p.points), 0)::BIGINT AS total_points,
               COUNT(p.id) AS total_problems
        FROM users u
        LEFT JOIN problems p ON u.id = p.user_id
        GROUP BY u.id, u.name, u.email
        ORDER BY total_points DESC, total_problems DESC
        LIMIT $1
        "#,
    )
    .bind(LEADERBOARD_SIZE)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}
