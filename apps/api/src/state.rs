use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no conversation state: tutoring sessions are rebuilt from the
/// client-supplied transcript on every request.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    /// `None` when GEMINI_API_KEY is not set.
    pub llm: Option<Arc<dyn TextGenerator>>,
    pub config: Config,
}

impl AppState {
    /// Returns the configured text generator, or the precondition error the
    /// AI endpoints report before doing any other work.
    pub fn generator(&self) -> Result<&dyn TextGenerator, AppError> {
        self.llm.as_deref().ok_or(AppError::LlmUnavailable)
    }
}
