// Problem tracker: the user's solved-problem log, dashboard analytics and the
// leaderboard. Plain CRUD over PostgreSQL; no LLM calls.

pub mod analytics;
pub mod problems;
