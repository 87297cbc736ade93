//! Skill extraction against a taxonomy list.
//!
//! Multi-word skills are found by exact phrase containment in the normalized
//! text. Every skill that is not found that way falls back to token-set
//! membership, then to fuzzy matching against the token set. Multi-word
//! phrases whose word order differs in the text will not match; that is the
//! established behaviour and callers rely on it.

use std::collections::HashSet;

use crate::analysis::similarity::fuzzy_match_normalized;
use crate::analysis::text::{normalize, tokenize};

/// Returns the entries of `skills` that appear in `text`, in list order, each at most once.
pub fn extract_skills<S: AsRef<str>>(text: &str, skills: &[S]) -> Vec<String> {
    let text_normalized = normalize(text);
    let tokens = tokenize(text);

    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for skill in skills {
        let skill = skill.as_ref();
        if seen.contains(skill) {
            continue;
        }

        let skill_normalized = normalize(skill);
        let is_phrase = skill_normalized.split(' ').count() > 1;

        let matched = (is_phrase && text_normalized.contains(&skill_normalized))
            || tokens.contains(&skill_normalized)
            || fuzzy_match_normalized(&skill_normalized, tokens.as_slice());

        if matched {
            seen.insert(skill);
            found.push(skill.to_string());
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::taxonomy::{JobDomain, SOFT_SKILLS};

    #[test]
    fn test_single_word_exact_token() {
        let found = extract_skills("Daily work in Python and SQL.", &["python", "sql", "java"]);
        assert_eq!(found, vec!["python", "sql"]);
    }

    #[test]
    fn test_multi_word_phrase_containment() {
        let found = extract_skills(
            "Built Power-BI dashboards; strong in data visualization",
            &["power bi", "data visualization", "deep learning"],
        );
        assert_eq!(found, vec!["power bi", "data visualization"]);
    }

    #[test]
    fn test_multi_word_reordered_does_not_match() {
        let found = extract_skills("bi power tools", &["power bi"]);
        assert!(found.is_empty());
    }

    #[test]
    fn test_single_word_typo_tolerance() {
        let found = extract_skills("Experienced with Tensorflw and Kubernetes", &["tensorflow"]);
        assert_eq!(found, vec!["tensorflow"]);
    }

    #[test]
    fn test_case_insensitive_skill_list() {
        let found = extract_skills("postgresql admin", &["PostgreSQL"]);
        assert_eq!(found, vec!["PostgreSQL"]);
    }

    #[test]
    fn test_output_preserves_list_order_without_duplicates() {
        let found = extract_skills(
            "strategic thinking and teamwork",
            &["teamwork", "strategic thinking", "teamwork", "strategic thinking"],
        );
        assert_eq!(found, vec!["teamwork", "strategic thinking"]);
    }

    #[test]
    fn test_slash_skill_matches_after_normalization() {
        let found = extract_skills(
            "Owned the CI/CD pipeline and ran A/B testing",
            JobDomain::GeneralTech.skills(),
        );
        assert!(found.contains(&"ci/cd".to_string()));
    }

    #[test]
    fn test_soft_skill_phrase_found() {
        let found = extract_skills("Known for problem solving and mentoring juniors", SOFT_SKILLS);
        assert!(found.contains(&"problem solving".to_string()));
        assert!(found.contains(&"mentoring".to_string()));
    }

    #[test]
    fn test_empty_text_finds_nothing() {
        assert!(extract_skills("", JobDomain::DataAnalysis.skills()).is_empty());
    }
}
