use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored resume. The download URL is not persisted; a fresh presigned
/// link is generated whenever resumes are listed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub s3_key: String,
    pub uploaded_at: DateTime<Utc>,
}
