pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers as auth;
use crate::mentor::handlers as mentor;
use crate::recommend::handlers as recommend;
use crate::resume::handlers::{self as resume, MAX_RESUME_BYTES};
use crate::state::AppState;
use crate::tracker::{analytics, problems};

/// Headroom over the PDF limit for multipart framing. The handlers enforce
/// the exact file size themselves.
const RESUME_BODY_LIMIT: usize = MAX_RESUME_BYTES + 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let resume_routes = Router::new()
        .route("/api/upload-resume", post(resume::handle_upload_resume))
        .route("/api/analyze-resume", post(resume::handle_analyze_resume))
        .layer(DefaultBodyLimit::max(RESUME_BODY_LIMIT));

    Router::new()
        .route("/api/health", get(health::health_handler))
        // Accounts
        .route("/api/register", post(auth::handle_register))
        .route("/api/login", post(auth::handle_login))
        // Problem log
        .route(
            "/api/problems",
            get(problems::handle_list_problems).post(problems::handle_create_problem),
        )
        .route(
            "/api/problems/:id",
            put(problems::handle_update_problem).delete(problems::handle_delete_problem),
        )
        // Analytics
        .route("/api/analytics/difficulty", get(analytics::handle_by_difficulty))
        .route("/api/analytics/topic", get(analytics::handle_by_topic))
        .route("/api/analytics/points", get(analytics::handle_points_over_time))
        .route("/api/analytics/summary", get(analytics::handle_summary))
        .route("/api/leaderboard", get(analytics::handle_leaderboard))
        // Resumes
        .route("/api/resumes", get(resume::handle_list_resumes))
        .merge(resume_routes)
        // AI mentor
        .route("/api/solve-problem", post(mentor::handle_solve_problem))
        .route(
            "/api/recommend-problems",
            post(recommend::handle_recommend_problems),
        )
        .with_state(state)
}
