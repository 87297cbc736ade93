//! Structural quality of a CV, independent of any job description.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*•]\s").expect("Invalid regex"));

static RE_NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+[.)]\s").expect("Invalid regex"));

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("Invalid regex")
});

static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("Invalid regex")
});

static RE_WEB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://[^\s]+|www\.[^\s]+|linkedin\.com/in/[^\s]+")
        .expect("Invalid regex")
});

/// Paragraphs with more words than this count as long.
const LONG_PARAGRAPH_WORDS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: bool,
    pub phone: bool,
    /// 50 per detected channel.
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingResult {
    pub structure_score: u32,
    pub long_paragraphs: usize,
    pub bullet_usage: usize,
    pub numbered_usage: usize,
    /// Non-blank lines.
    pub line_count: usize,
    /// Non-blank blocks separated by an empty line.
    pub paragraph_count: usize,
    pub contact_info: ContactInfo,
    pub web_presence: bool,
    /// 0 – 100
    pub overall_format_score: u32,
}

pub fn analyze_formatting(cv_text: &str) -> FormattingResult {
    let lines: Vec<&str> = cv_text.split('\n').collect();
    let line_count = lines.iter().filter(|l| !l.trim().is_empty()).count();
    let paragraphs: Vec<&str> = cv_text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect();

    let long_paragraphs = paragraphs
        .iter()
        .filter(|p| p.split_whitespace().count() > LONG_PARAGRAPH_WORDS)
        .count();
    let bullet_usage = lines.iter().filter(|l| RE_BULLET.is_match(l)).count();
    let numbered_usage = lines.iter().filter(|l| RE_NUMBERED.is_match(l)).count();

    let structure_score = ((bullet_usage + numbered_usage) * 5).min(100) as u32;

    let email = RE_EMAIL.is_match(cv_text);
    let phone = RE_PHONE.is_match(cv_text);
    let contact_score = (u32::from(email) + u32::from(phone)) * 50;

    let web_presence = RE_WEB.is_match(cv_text);

    let paragraph_score = 100.0_f64 - long_paragraphs as f64 * 10.0;
    let raw = structure_score as f64 * 0.3
        + contact_score as f64 * 0.4
        + if web_presence { 100.0 } else { 0.0 } * 0.1
        + paragraph_score.max(0.0) * 0.2;
    let overall_format_score = raw.round().clamp(0.0, 100.0) as u32;

    FormattingResult {
        structure_score,
        long_paragraphs,
        bullet_usage,
        numbered_usage,
        line_count,
        paragraph_count: paragraphs.len(),
        contact_info: ContactInfo {
            email,
            phone,
            score: contact_score,
        },
        web_presence,
        overall_format_score,
    }
}
