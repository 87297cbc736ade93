//! Basic CV metrics: word count, quantified achievements and section coverage.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::SECTIONS;

/// Patterns that signal a quantified result. Each is counted independently,
/// so one sentence may contribute to several.
const MEASURABLE_PATTERNS: &[&str] = &[
    r"\d+%",
    r"\$\d+",
    r"\d+k",
    r"\d+m",
    r"\d+\s*million",
    r"increased.*\d+",
    r"improved.*\d+",
    r"reduced.*\d+",
    r"achieved.*\d+",
    r"exceeded.*\d+",
    r"generated.*\d+",
    r"\d+\s*years?\s+of\s+experience",
    r"\d+\+\s*years?",
];

static RE_MEASURABLE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MEASURABLE_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("Invalid regex"))
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvMetrics {
    pub word_count: usize,
    pub measurable_count: usize,
    /// Canonical section ids in table order.
    pub sections_found: Vec<String>,
}

impl CvMetrics {
    pub fn sections_missing(&self) -> Vec<String> {
        missing_sections(&self.sections_found)
    }
}

pub fn base_metrics(cv_text: &str) -> CvMetrics {
    CvMetrics {
        word_count: word_count(cv_text),
        measurable_count: measurable_count(cv_text),
        sections_found: find_sections(cv_text),
    }
}

/// Whitespace-delimited chunks. Empty or blank text counts as zero.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn measurable_count(text: &str) -> usize {
    RE_MEASURABLE
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum()
}

/// A section is present when any of its synonyms is a substring of the lower-cased text.
pub fn find_sections(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    SECTIONS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(section, _)| section.to_string())
        .collect()
}

pub fn missing_sections(found: &[String]) -> Vec<String> {
    SECTIONS
        .iter()
        .map(|(section, _)| *section)
        .filter(|section| !found.iter().any(|f| f == section))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_whitespace_chunks() {
        assert_eq!(word_count("Senior analyst,  5 years\n\nSQL"), 5);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t"), 0);
    }

    #[test]
    fn test_measurable_percent_and_dollars() {
        assert_eq!(measurable_count("Cut costs 20% and saved $500"), 2);
    }

    #[test]
    fn test_measurable_is_case_insensitive() {
        assert_eq!(measurable_count("INCREASED revenue"), 0);
        // matches "increased.*\d+" only
        assert_eq!(measurable_count("INCREASED revenue by 3 times"), 1);
    }

    #[test]
    fn test_measurable_counts_across_patterns() {
        // "\d+%" and "increased.*\d+"
        assert_eq!(measurable_count("Increased sales by 30%"), 2);
        // "\d+\s*years?\s+of\s+experience" and "\d+\+\s*years?"
        assert_eq!(measurable_count("5 years of experience and 10+ years in retail"), 2);
    }

    #[test]
    fn test_measurable_k_and_million() {
        // "\d+k", "\d+m" and "\d+\s*million" on separate figures
        assert_eq!(measurable_count("Managed 50k users; budget 2 million; 3m downloads"), 3);
    }

    #[test]
    fn test_no_measurable_patterns() {
        assert_eq!(measurable_count("Responsible for reporting to the team."), 0);
    }

    #[test]
    fn test_sections_found_by_synonym() {
        let found = find_sections("PROFILE\n...\nWork History\n...\nDegree in Economics");
        assert_eq!(found, vec!["summary", "experience", "education"]);
    }

    #[test]
    fn test_sections_empty_text() {
        assert!(find_sections("").is_empty());
        assert_eq!(missing_sections(&[]).len(), 6);
    }

    #[test]
    fn test_base_metrics_and_missing_sections() {
        let metrics = base_metrics("Skills: SQL\nProjects: dashboard that improved retention 12%");
        assert_eq!(metrics.sections_found, vec!["skills", "projects"]);
        assert_eq!(
            metrics.sections_missing(),
            vec!["summary", "experience", "education", "certifications"]
        );
        // "\d+%" and "improved.*\d+"
        assert_eq!(metrics.measurable_count, 2);
        assert_eq!(metrics.word_count, 8);
    }
}
