//! Document ingestion: turns uploaded PDF, DOCX or TXT bytes into plain text.
//!
//! The analysis engine only ever sees the extracted string.

pub mod handlers;

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const DOCX_BODY: &str = "word/document.xml";

static RE_XML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("Invalid regex"));

static RE_PARAGRAPH_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</w:p>|<w:br\s*/>").expect("Invalid regex"));

static RE_TAB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<w:tab\s*/>").expect("Invalid regex"));

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported file type for '{file_name}'. Please upload a PDF, DOCX, or TXT file.")]
    Unsupported { file_name: String },

    #[error("File exceeds the {limit} byte upload limit")]
    TooLarge { limit: usize },

    #[error("Failed to read the file. It might be corrupted or protected. ({0})")]
    Extraction(String),

    #[error("No text could be extracted from the file")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Extension first, then MIME type.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            return Some(DocumentFormat::Pdf);
        }
        if lower.ends_with(".docx") {
            return Some(DocumentFormat::Docx);
        }
        if lower.ends_with(".txt") {
            return Some(DocumentFormat::Txt);
        }

        match content_type? {
            "application/pdf" => Some(DocumentFormat::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DocumentFormat::Docx)
            }
            ct if ct.starts_with("text/plain") => Some(DocumentFormat::Txt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub file_name: String,
    pub format: DocumentFormat,
    pub text: String,
}

/// Extracts plain text from an uploaded document.
pub fn extract_text(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<ExtractedDocument, IngestError> {
    let format = DocumentFormat::detect(file_name, content_type).ok_or_else(|| {
        IngestError::Unsupported {
            file_name: file_name.to_string(),
        }
    })?;

    let text = match format {
        DocumentFormat::Pdf => extract_pdf(bytes)?,
        DocumentFormat::Docx => extract_docx(bytes)?,
        DocumentFormat::Txt => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        return Err(IngestError::Empty);
    }

    debug!(
        file_name,
        ?format,
        chars = text.len(),
        "Extracted document text"
    );

    Ok(ExtractedDocument {
        file_name: file_name.to_string(),
        format,
        text,
    })
}

/// The PDF parser can panic on malformed fonts; that is reported as a corrupt file.
fn extract_pdf(bytes: &[u8]) -> Result<String, IngestError> {
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| IngestError::Extraction("PDF parser aborted".to_string()))?
        .map_err(|e| IngestError::Extraction(e.to_string()))
}

fn extract_docx(bytes: &[u8]) -> Result<String, IngestError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| IngestError::Extraction(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| IngestError::Extraction(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| IngestError::Extraction(e.to_string()))?;

    Ok(docx_xml_to_text(&xml))
}

/// Paragraph ends and breaks become newlines, tabs stay tabs, all other markup is dropped.
fn docx_xml_to_text(xml: &str) -> String {
    let with_breaks = RE_PARAGRAPH_END.replace_all(xml, "\n");
    let with_tabs = RE_TAB.replace_all(&with_breaks, "\t");
    let stripped = RE_XML_TAG.replace_all(&with_tabs, "");
    decode_xml_entities(&stripped).trim().to_string()
}

fn decode_xml_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
