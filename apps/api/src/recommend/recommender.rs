//! Problem recommendation — one LLM call, defensively decoded.

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::recommend::interpreter::{interpret, Interpretation, RecommendationItem};
use crate::recommend::prompts::build_recommend_prompt;

const UNPARSED_MESSAGE: &str = "Could not parse AI response";

/// Successful outcome of a recommendation request, whether or not the model's
/// answer could be decoded.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub recommendations: Vec<RecommendationItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl From<Interpretation> for Recommendations {
    fn from(interpretation: Interpretation) -> Self {
        match interpretation {
            Interpretation::Parsed(recommendations) => Recommendations {
                recommendations,
                raw_response: None,
                parse_error: None,
            },
            Interpretation::Unparsed { raw_text, .. } => Recommendations {
                recommendations: Vec::new(),
                raw_response: Some(raw_text),
                parse_error: Some(UNPARSED_MESSAGE.to_string()),
            },
        }
    }
}

pub async fn recommend_problems(
    llm: &dyn TextGenerator,
    solved: &[String],
    topic: Option<&str>,
) -> Result<Recommendations, AppError> {
    let topic = topic.map(str::trim).filter(|t| !t.is_empty());
    let prompt = build_recommend_prompt(solved, topic);

    let raw = llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Problem recommendation failed: {e}")))?;

    let interpretation = interpret(&raw);
    match &interpretation {
        Interpretation::Parsed(items) => info!("Decoded {} recommendations", items.len()),
        Interpretation::Unparsed { diagnostic, .. } => {
            warn!("Recommendation output was not valid JSON: {diagnostic}")
        }
    }

    Ok(interpretation.into())
}
