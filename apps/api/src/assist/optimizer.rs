//! CV optimization: asks the LLM to rewrite a CV for a given job description.

use tracing::{error, info};

use crate::assist::prompts::{CV_OPTIMIZE_PROMPT_TEMPLATE, CV_OPTIMIZE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

const LLM_FAILURE_MESSAGE: &str =
    "Failed to get response from AI. Please check your API key and network connection.";

/// Returns the optimized CV text. The caller validates that both inputs are non-empty.
pub async fn optimize_cv(
    cv_text: &str,
    jd_text: &str,
    llm: Option<&LlmClient>,
) -> Result<String, AppError> {
    let llm = llm.ok_or(AppError::LlmUnavailable)?;
    let prompt = build_optimize_prompt(cv_text, jd_text);

    let optimized = llm
        .call_text(&prompt, CV_OPTIMIZE_SYSTEM)
        .await
        .map_err(|e| {
            error!("CV optimization failed: {e}");
            AppError::Llm(LLM_FAILURE_MESSAGE.to_string())
        })?;

    info!(
        input_chars = cv_text.len(),
        output_chars = optimized.len(),
        "CV optimized"
    );

    Ok(optimized)
}

fn build_optimize_prompt(cv_text: &str, jd_text: &str) -> String {
    CV_OPTIMIZE_PROMPT_TEMPLATE
        .replace("{jd_text}", jd_text)
        .replace("{cv_text}", cv_text)
}
