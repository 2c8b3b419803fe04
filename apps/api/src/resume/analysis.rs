//! Resume analysis — PDF text → candidate name → critique.
//!
//! Two single-shot LLM calls at most: the name lookup (whose failure only
//! degrades the greeting) and the critique (whose failure fails the request).

use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::resume::extract::extract_text_blocking;
use crate::resume::identity::resolve_candidate_name;
use crate::resume::prompts::build_review_prompt;

#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub analysis: String,
    pub candidate_name: String,
}

/// Analyzes an already-extracted resume text.
pub async fn analyze_text(llm: &dyn TextGenerator, text: &str) -> Result<ResumeAnalysis, AppError> {
    let candidate_name = resolve_candidate_name(llm, text).await;

    let prompt = build_review_prompt(&candidate_name, text);
    let analysis = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;

    Ok(ResumeAnalysis {
        analysis,
        candidate_name,
    })
}

/// Extracts text from the uploaded PDF and analyzes it.
pub async fn analyze_document(
    llm: &dyn TextGenerator,
    pdf: Bytes,
) -> Result<ResumeAnalysis, AppError> {
    let text = extract_text_blocking(pdf)
        .await
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    info!("Extracted {} characters of resume text", text.chars().count());

    analyze_text(llm, &text).await
}
