//! Axum route handlers for document ingestion.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::metrics::word_count;
use crate::errors::AppError;
use crate::ingest::{extract_text, DocumentFormat, IngestError};
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub format: DocumentFormat,
    pub text: String,
    pub word_count: usize,
}

/// POST /api/v1/documents/extract
///
/// Accepts a multipart upload (field `file`) and returns its plain text,
/// ready to be sent as `cv_text` or `jd_text` to the analysis endpoints.
pub async fn handle_extract(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let limit = state.config.max_upload_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes: Bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;

        if bytes.len() > limit {
            return Err(IngestError::TooLarge { limit }.into());
        }

        // PDF parsing is CPU-bound; keep it off the async workers
        let document = tokio::task::spawn_blocking(move || {
            extract_text(&file_name, content_type.as_deref(), &bytes)
        })
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

        info!(
            file_name = %document.file_name,
            format = ?document.format,
            "Document extracted"
        );

        return Ok(Json(ExtractResponse {
            word_count: word_count(&document.text),
            file_name: document.file_name,
            format: document.format,
            text: document.text,
        }));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}

fn multipart_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        IngestError::TooLarge { limit }.into()
    } else {
        AppError::Validation(format!("Invalid multipart body: {err}"))
    }
}
