//! Axum route handlers for domain detection and CV optimization.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::JobDomain;
use crate::assist::optimizer::optimize_cv;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DetectDomainRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct DetectDomainResponse {
    pub domain: JobDomain,
    pub backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub cv_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimized_cv: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/domains/detect
pub async fn handle_detect_domain(
    State(state): State<AppState>,
    Json(request): Json<DetectDomainRequest>,
) -> Result<Json<DetectDomainResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide the Job Description content.".to_string(),
        ));
    }

    let domain = state.classifier.classify(&request.jd_text).await;

    Ok(Json(DetectDomainResponse {
        domain,
        backend: state.classifier.backend(),
    }))
}

/// POST /api/v1/cv/optimize
///
/// Rewrites the CV for the JD via the LLM. 503 when no API key is configured.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.cv_text.trim().is_empty() || request.jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide both CV and Job Description to use AI optimization.".to_string(),
        ));
    }

    let optimized_cv = optimize_cv(&request.cv_text, &request.jd_text, state.llm.as_ref()).await?;

    Ok(Json(OptimizeResponse { optimized_cv }))
}
