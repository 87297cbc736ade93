//! Improvement tips and the plain-text analysis report.
//!
//! Both are pure functions of an [`AnalysisResult`] and a [`FormattingResult`];
//! every applicable rule fires, always in the same order.

use crate::analysis::formatting::FormattingResult;
use crate::analysis::scorer::{AnalysisResult, HIGH_WORD_COUNT, LOW_WORD_COUNT};

const TIP_HARD_SKILLS: usize = 5;
const TIP_SOFT_SKILLS: usize = 3;
const TIP_SECTIONS: usize = 3;
const TIP_KEYWORDS: usize = 5;
const MIN_MEASURABLE: usize = 3;
const MAX_LONG_PARAGRAPHS: usize = 2;
const MIN_BULLETS: usize = 5;
/// Missing-keyword count above which the keyword tip fires.
const MISSING_KEYWORD_ALERT: usize = 10;

const REPORT_KEYWORDS: usize = 15;
const REPORT_HARD_SKILLS: usize = 15;
const REPORT_SOFT_SKILLS: usize = 10;

/// Ordered list of human-readable suggestions.
pub fn generate_improvement_tips(
    analysis: &AnalysisResult,
    formatting: &FormattingResult,
) -> Vec<String> {
    let mut tips = Vec::new();

    if analysis.issues.hard_skills > 0 {
        tips.push(format!(
            "Add these key technical skills: {}",
            head(&analysis.hard_skills_missing, TIP_HARD_SKILLS).join(", ")
        ));
    }
    if analysis.issues.soft_skills > 0 {
        tips.push(format!(
            "Include these soft skills: {}",
            head(&analysis.soft_skills_missing, TIP_SOFT_SKILLS).join(", ")
        ));
    }
    if analysis.measurable_count < MIN_MEASURABLE {
        tips.push("Add more quantified achievements (e.g., %, $, numbers).".to_string());
    }
    if analysis.word_count < LOW_WORD_COUNT {
        tips.push(
            "Expand your CV content to provide more detail (aim for 800-1000 words).".to_string(),
        );
    } else if analysis.word_count > HIGH_WORD_COUNT {
        tips.push(
            "Your CV is quite long. Consider condensing it for better readability.".to_string(),
        );
    }
    if !analysis.issues.sections_missing.is_empty() {
        tips.push(format!(
            "Add missing sections like: {}",
            head(&analysis.issues.sections_missing, TIP_SECTIONS).join(", ")
        ));
    }
    if formatting.long_paragraphs > MAX_LONG_PARAGRAPHS {
        tips.push("Break down long paragraphs into smaller, more readable chunks.".to_string());
    }
    if formatting.bullet_usage < MIN_BULLETS {
        tips.push(
            "Use more bullet points to highlight achievements and responsibilities.".to_string(),
        );
    }
    if !formatting.contact_info.email {
        tips.push("Include your email address.".to_string());
    }
    if !formatting.contact_info.phone {
        tips.push("Include your phone number.".to_string());
    }
    if !formatting.web_presence {
        tips.push("Add your LinkedIn profile or portfolio website.".to_string());
    }
    if analysis.keywords_missing.len() > MISSING_KEYWORD_ALERT {
        tips.push(format!(
            "Weave in these important keywords from the job description: {}",
            head(&analysis.keywords_missing, TIP_KEYWORDS).join(", ")
        ));
    }

    tips
}

/// Narrative sentence for the overall score band.
pub fn score_narrative(final_score: u32) -> &'static str {
    match final_score {
        85.. => "This is an excellent score. Your CV is highly optimized for Applicant Tracking Systems.",
        70..=84 => "This is a good score. Your CV has strong potential but could be improved for better ATS performance.",
        _ => "This score indicates there are significant opportunities for improvement to pass through ATS filters effectively.",
    }
}

/// Seven-section markdown-style report. Blocks are separated by a blank line.
pub fn generate_comprehensive_report(
    analysis: &AnalysisResult,
    formatting: &FormattingResult,
) -> String {
    let found_missing = |label: &str, found: usize, missing: usize| {
        format!("- {label} Found: {found}\n\n- {label} Missing: {missing}")
    };

    let mut blocks = vec![
        "# CV Analysis Report".to_string(),
        format!(
            "## 1. Overall ATS Compatibility Score: {}%",
            analysis.final_score
        ),
        score_narrative(analysis.final_score).to_string(),
        "## 2. Keyword Analysis".to_string(),
        found_missing(
            "Keywords",
            analysis.keywords_present.len(),
            analysis.keywords_missing.len(),
        ),
        "\n### Top Missing Keywords to Include:".to_string(),
        bullet_list(head(&analysis.keywords_missing, REPORT_KEYWORDS)),
        "## 3. Hard Skills Analysis".to_string(),
        found_missing(
            "Relevant Skills",
            analysis.hard_skills_found.len(),
            analysis.hard_skills_missing.len(),
        ),
        "\n### Critical Hard Skills to Add:".to_string(),
        bullet_list(head(&analysis.hard_skills_missing, REPORT_HARD_SKILLS)),
        "## 4. Soft Skills Analysis".to_string(),
        found_missing(
            "Relevant Skills",
            analysis.soft_skills_found.len(),
            analysis.soft_skills_missing.len(),
        ),
        "\n### Important Soft Skills to Emphasize:".to_string(),
        bullet_list(head(&analysis.soft_skills_missing, REPORT_SOFT_SKILLS)),
        "## 5. Content & Structure Review".to_string(),
        format!(
            "- Word Count: {} (Optimal is 800-1000 words)",
            analysis.word_count
        ),
        format!(
            "- Quantified Achievements: {} found",
            analysis.measurable_count
        ),
        format!(
            "- Sections Found: {}",
            join_or_none(&analysis.sections_found)
        ),
        format!(
            "- Sections Missing: {}",
            join_or_none(&analysis.issues.sections_missing)
        ),
        "## 6. Formatting & Readability".to_string(),
        format!(
            "- Overall Formatting Score: {}%",
            formatting.overall_format_score
        ),
        format!(
            "- Contact Info: {}, {}",
            if formatting.contact_info.email {
                "Email found"
            } else {
                "Email missing"
            },
            if formatting.contact_info.phone {
                "Phone found"
            } else {
                "Phone missing"
            }
        ),
        format!(
            "- Web Presence (LinkedIn/Portfolio): {}",
            if formatting.web_presence {
                "Found"
            } else {
                "Missing"
            }
        ),
        format!(
            "- Long Paragraphs: {} (should be minimal)",
            formatting.long_paragraphs
        ),
        "## 7. Actionable Recommendations".to_string(),
    ];

    blocks.extend(
        generate_improvement_tips(analysis, formatting)
            .into_iter()
            .map(|tip| format!("- {tip}")),
    );

    blocks.join("\n\n")
}

fn head(items: &[String], n: usize) -> &[String] {
    &items[..items.len().min(n)]
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "None".to_string();
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}
