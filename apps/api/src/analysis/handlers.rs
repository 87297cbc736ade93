//! Axum route handlers for the Analysis API.
//!
//! Keyword classification is quadratic in token count, so each text field is
//! capped at `Config::max_analysis_chars` and scoring runs on the blocking pool.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::formatting::{analyze_formatting, FormattingResult};
use crate::analysis::report::{generate_comprehensive_report, generate_improvement_tips};
use crate::analysis::scorer::{analyze_cv, analyze_standalone_cv, AnalysisResult, StandaloneAnalysisResult};
use crate::analysis::taxonomy::JobDomain;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub cv_text: String,
    pub jd_text: String,
    /// Skips domain detection when set.
    #[serde(default)]
    pub domain: Option<JobDomain>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub domain: JobDomain,
    pub analysis: AnalysisResult,
    pub formatting: FormattingResult,
    pub tips: Vec<String>,
    pub report: String,
}

#[derive(Debug, Deserialize)]
pub struct StandaloneRequest {
    pub cv_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/compare
///
/// Scores a CV against a job description and returns the analysis, the
/// formatting review, improvement tips and the rendered report.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let limit = state.config.max_analysis_chars;
    require_cv(&request.cv_text, limit)?;
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide the Job Description content for comparison.".to_string(),
        ));
    }
    check_length("jd_text", &request.jd_text, limit)?;

    let domain = match request.domain {
        Some(domain) => domain,
        None => state.classifier.classify(&request.jd_text).await,
    };

    let CompareRequest { cv_text, jd_text, .. } = request;
    let response = tokio::task::spawn_blocking(move || {
        let analysis = analyze_cv(&cv_text, &jd_text, domain);
        let formatting = analyze_formatting(&cv_text);
        let tips = generate_improvement_tips(&analysis, &formatting);
        let report = generate_comprehensive_report(&analysis, &formatting);
        CompareResponse {
            domain,
            analysis,
            formatting,
            tips,
            report,
        }
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in compare: {e}")))?;

    info!(
        %domain,
        final_score = response.analysis.final_score,
        format_score = response.formatting.overall_format_score,
        "CV compared against job description"
    );

    Ok(Json(response))
}

/// POST /api/v1/analysis/standalone
pub async fn handle_standalone(
    State(state): State<AppState>,
    Json(request): Json<StandaloneRequest>,
) -> Result<Json<StandaloneAnalysisResult>, AppError> {
    require_cv(&request.cv_text, state.config.max_analysis_chars)?;

    let cv_text = request.cv_text;
    let result = tokio::task::spawn_blocking(move || analyze_standalone_cv(&cv_text))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in standalone: {e}"))
        })?;

    info!(
        top_domain = result.top_skill_domain.map(|d| d.label()).unwrap_or("none"),
        format_score = result.formatting_result.overall_format_score,
        "Standalone CV analyzed"
    );

    Ok(Json(result))
}

fn require_cv(cv_text: &str, limit: usize) -> Result<(), AppError> {
    if cv_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide your CV content.".to_string(),
        ));
    }
    check_length("cv_text", cv_text, limit)
}

fn check_length(field: &str, text: &str, limit: usize) -> Result<(), AppError> {
    if text.chars().count() > limit {
        return Err(AppError::PayloadTooLarge(format!(
            "{field} exceeds the {limit} character limit for analysis"
        )));
    }
    Ok(())
}
