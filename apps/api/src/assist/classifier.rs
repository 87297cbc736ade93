//! Domain classification: labels a job description with one [`JobDomain`].
//!
//! `AppState` holds an `Arc<dyn DomainClassifier>`, chosen at startup:
//! `LlmDomainClassifier` when an Anthropic key is configured, otherwise
//! `FallbackDomainClassifier`. Classification never fails; every problem
//! degrades to GENERAL_TECH.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::analysis::taxonomy::JobDomain;
use crate::assist::prompts::{DOMAIN_DETECT_PROMPT_TEMPLATE, DOMAIN_DETECT_SYSTEM};
use crate::llm_client::LlmClient;

/// Characters of the JD sent to the model.
const JD_EXCERPT_CHARS: usize = 2000;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait DomainClassifier: Send + Sync {
    async fn classify(&self, jd_text: &str) -> JobDomain;

    /// "llm" | "fallback"
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackDomainClassifier
// ────────────────────────────────────────────────────────────────────────────

/// Used when no LLM is configured. Always answers GENERAL_TECH.
pub struct FallbackDomainClassifier;

#[async_trait]
impl DomainClassifier for FallbackDomainClassifier {
    async fn classify(&self, _jd_text: &str) -> JobDomain {
        JobDomain::GeneralTech
    }

    fn backend(&self) -> &'static str {
        "fallback"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmDomainClassifier
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmDomainClassifier(pub LlmClient);

#[async_trait]
impl DomainClassifier for LlmDomainClassifier {
    async fn classify(&self, jd_text: &str) -> JobDomain {
        let prompt = build_domain_prompt(jd_text);

        let reply = match self.0.call_text(&prompt, DOMAIN_DETECT_SYSTEM).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Domain detection failed, using GENERAL_TECH: {e}");
                return JobDomain::GeneralTech;
            }
        };

        match parse_domain_reply(&reply) {
            Some(domain) => {
                debug!(%domain, "Domain detected");
                domain
            }
            None => {
                warn!(reply = %reply, "Unrecognized domain label, using GENERAL_TECH");
                JobDomain::GeneralTech
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

fn build_domain_prompt(jd_text: &str) -> String {
    let domains = JobDomain::ALL
        .iter()
        .map(JobDomain::label)
        .collect::<Vec<_>>()
        .join(", ");
    let excerpt: String = jd_text.chars().take(JD_EXCERPT_CHARS).collect();

    DOMAIN_DETECT_PROMPT_TEMPLATE
        .replace("{domains}", &domains)
        .replace("{jd_text}", &excerpt)
}

/// Trims and upper-cases the model reply, then matches it against the labels.
fn parse_domain_reply(reply: &str) -> Option<JobDomain> {
    reply.trim().to_uppercase().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_domain_reply_normalizes_case_and_whitespace() {
        assert_eq!(
            parse_domain_reply("  human_resources\n"),
            Some(JobDomain::HumanResources)
        );
        assert_eq!(parse_domain_reply("STATISTICS"), Some(JobDomain::Statistics));
    }

    #[test]
    fn test_parse_domain_reply_rejects_prose() {
        assert_eq!(parse_domain_reply("The best fit is DATA_ANALYSIS."), None);
        assert_eq!(parse_domain_reply(""), None);
    }

    #[test]
    fn test_domain_prompt_lists_labels_and_truncates_jd() {
        let jd = "x".repeat(JD_EXCERPT_CHARS + 500);
        let prompt = build_domain_prompt(&jd);

        assert!(prompt.contains(
            "DATA_ANALYSIS, ECONOMICS_BUSINESS, HUMAN_RESOURCES, POLITICS_PUBLIC_RELATIONS, STATISTICS, GENERAL_TECH"
        ));
        assert!(prompt.contains(&"x".repeat(JD_EXCERPT_CHARS)));
        assert!(!prompt.contains(&"x".repeat(JD_EXCERPT_CHARS + 1)));
    }

    #[tokio::test]
    async fn test_fallback_classifier_is_general_tech() {
        let classifier = FallbackDomainClassifier;
        assert_eq!(
            classifier.classify("Recruiter with payroll experience").await,
            JobDomain::GeneralTech
        );
        assert_eq!(classifier.backend(), "fallback");
    }
}
