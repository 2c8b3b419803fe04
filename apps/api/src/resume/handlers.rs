//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::models::UserIdQuery;
use crate::resume::analysis::{analyze_document, ResumeAnalysis};
use crate::resume::storage::{discard_orphan, presigned_url, put_pdf, resume_object_key};
use crate::state::AppState;

/// Largest accepted resume upload.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub message: String,
    pub resume_id: Uuid,
    pub file_url: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeListItem {
    #[serde(flatten)]
    pub resume: ResumeRow,
    pub file_url: String,
}

/// The parts of a resume form this API reads.
#[derive(Default)]
struct ResumeForm {
    filename: Option<String>,
    file: Option<Bytes>,
    user_id: Option<String>,
}

/// Accepts `.pdf` in any letter case.
pub fn is_pdf_filename(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

async fn read_resume_form(mut multipart: Multipart) -> Result<ResumeForm, AppError> {
    let mut form = ResumeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                form.filename = Some(field.file_name().unwrap_or_default().to_string());
                form.file = Some(field.bytes().await?);
            }
            "user_id" => form.user_id = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}

/// Validates the uploaded file part and returns `(filename, bytes)`.
fn checked_pdf(form: &mut ResumeForm) -> Result<(String, Bytes), AppError> {
    let file = form
        .file
        .take()
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    let filename = form.filename.take().unwrap_or_default();

    if filename.trim().is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !is_pdf_filename(&filename) {
        return Err(AppError::Validation("Only PDF files allowed".to_string()));
    }
    if file.len() > MAX_RESUME_BYTES {
        return Err(AppError::Validation(format!(
            "File exceeds the {} MB limit",
            MAX_RESUME_BYTES / (1024 * 1024)
        )));
    }

    Ok((filename, file))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-resume
///
/// Multipart field `file` (PDF). Nothing is stored.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let llm = state.generator()?;

    let mut form = read_resume_form(multipart).await?;
    let (_, pdf) = checked_pdf(&mut form)?;

    let analysis = analyze_document(llm, pdf).await?;
    Ok(Json(analysis))
}

/// POST /api/upload-resume
///
/// Multipart fields `file` (PDF) and `user_id`. Stores the PDF in S3 and
/// records it for the user.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResumeResponse>), AppError> {
    let mut form = read_resume_form(multipart).await?;

    let user_id = form
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation("user_id required".to_string()))?;
    let user_id = Uuid::parse_str(user_id)
        .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?;

    let (filename, pdf) = checked_pdf(&mut form)?;

    let resume_id = Uuid::new_v4();
    let key = resume_object_key(user_id, resume_id);
    let bucket = &state.config.s3_bucket;

    put_pdf(&state.s3, bucket, &key, pdf).await?;
    let file_url = presigned_url(&state.s3, bucket, &key).await?;

    let inserted = sqlx::query(
        "INSERT INTO resumes (id, user_id, filename, s3_key) VALUES ($1, $2, $3, $4)",
    )
    .bind(resume_id)
    .bind(user_id)
    .bind(&filename)
    .bind(&key)
    .execute(&state.db)
    .await;

    if let Err(e) = inserted {
        discard_orphan(&state.s3, bucket, &key).await;
        return Err(e.into());
    }

    Ok((
        StatusCode::CREATED,
        Json(UploadResumeResponse {
            message: "Resume uploaded successfully".to_string(),
            resume_id,
            file_url,
        }),
    ))
}

/// GET /api/resumes?user_id=
///
/// Newest first, each with a freshly presigned download link.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeListItem>>, AppError> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY uploaded_at DESC",
    )
    .bind(params.user_id)
    .fetch_all(&state.db)
    .await?;

    let mut items = Vec::with_capacity(rows.len());
    for resume in rows {
        let file_url = presigned_url(&state.s3, &state.config.s3_bucket, &resume.s3_key).await?;
        items.push(ResumeListItem { resume, file_url });
    }

    Ok(Json(items))
}
