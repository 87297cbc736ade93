//! CV scoring: comparison against a job description, and standalone quality.
//!
//! Comparison score = 100 × weighted sum of five sub-scores in [0, 1]:
//!
//! | component                         | weight |
//! |-----------------------------------|--------|
//! | JD keyword coverage               | 0.35   |
//! | relevant hard skills found        | 0.30   |
//! | relevant soft skills found        | 0.15   |
//! | canonical sections present        | 0.10   |
//! | length (60%) + achievements (40%) | 0.10   |
//!
//! Sub-scores whose denominator would be zero count as 1.0.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::formatting::{analyze_formatting, FormattingResult};
use crate::analysis::metrics::{base_metrics, missing_sections};
use crate::analysis::similarity::fuzzy_match_normalized;
use crate::analysis::skills::extract_skills;
use crate::analysis::taxonomy::{JobDomain, SECTIONS, SOFT_SKILLS};
use crate::analysis::text::tokenize;

const KEYWORD_WEIGHT: f64 = 0.35;
const HARD_SKILL_WEIGHT: f64 = 0.30;
const SOFT_SKILL_WEIGHT: f64 = 0.15;
const SECTION_WEIGHT: f64 = 0.10;
const LENGTH_ACHIEVEMENT_WEIGHT: f64 = 0.10;

/// Partial credit for a JD keyword only fuzzily present in the CV.
const FUZZY_KEYWORD_CREDIT: f64 = 0.6;
/// JD tokens shorter than this are not classified at all.
const MIN_KEYWORD_LEN: usize = 3;
const OPTIMAL_WORD_COUNT: f64 = 800.0;
/// Achievements needed for a full measurable sub-score.
const MEASURABLE_TARGET: f64 = 5.0;

pub const LOW_WORD_COUNT: usize = 600;
pub const HIGH_WORD_COUNT: usize = 1200;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Counts and flags the tips generator keys off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issues {
    pub hard_skills: usize,
    pub soft_skills: usize,
    pub sections_missing: Vec<String>,
    pub low_word_count: bool,
    pub missing_measurable: bool,
    pub too_long: bool,
}

/// Sub-scores in [0, 1] before weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword: f64,
    pub hard_skills: f64,
    pub soft_skills: f64,
    pub sections: f64,
    pub length: f64,
    pub measurable: f64,
}

impl ScoreBreakdown {
    pub fn length_achievement(&self) -> f64 {
        0.6 * self.length + 0.4 * self.measurable
    }

    pub fn weighted_total(&self) -> f64 {
        KEYWORD_WEIGHT * self.keyword
            + HARD_SKILL_WEIGHT * self.hard_skills
            + SOFT_SKILL_WEIGHT * self.soft_skills
            + SECTION_WEIGHT * self.sections
            + LENGTH_ACHIEVEMENT_WEIGHT * self.length_achievement()
    }
}

/// Result of scoring a CV against a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 0 – 100
    pub final_score: u32,
    pub keywords_present: Vec<String>,
    pub keywords_missing: Vec<String>,
    pub keywords_fuzzy: Vec<String>,
    pub hard_skills_found: Vec<String>,
    pub hard_skills_missing: Vec<String>,
    pub soft_skills_found: Vec<String>,
    pub soft_skills_missing: Vec<String>,
    pub sections_found: Vec<String>,
    pub measurable_results: bool,
    pub measurable_count: usize,
    pub word_count: usize,
    pub issues: Issues,
    pub breakdown: ScoreBreakdown,
}

/// Result of evaluating a CV on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandaloneAnalysisResult {
    pub formatting_result: FormattingResult,
    pub word_count: usize,
    pub measurable_count: usize,
    pub sections_found: Vec<String>,
    pub sections_missing: Vec<String>,
    /// Domain with the most detected skills; serialized as `"none"` when nothing matched.
    #[serde(with = "dominant_domain")]
    pub top_skill_domain: Option<JobDomain>,
    pub detected_skills: BTreeMap<JobDomain, Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Comparison scorer
// ────────────────────────────────────────────────────────────────────────────

/// Scores `cv_text` against `jd_text` using the hard-skill table of `domain`
/// plus the general-tech table.
pub fn analyze_cv(cv_text: &str, jd_text: &str, domain: JobDomain) -> AnalysisResult {
    let cv_tokens = tokenize(cv_text);
    let jd_tokens = tokenize(jd_text);

    let domain_hard = hard_skills_for(domain);
    let relevant_hard = extract_skills(jd_text, &domain_hard);
    let relevant_soft = extract_skills(jd_text, SOFT_SKILLS);

    let hard_skills_found = extract_skills(cv_text, &relevant_hard);
    let hard_skills_missing = subtract(&relevant_hard, &hard_skills_found);
    let soft_skills_found = extract_skills(cv_text, &relevant_soft);
    let soft_skills_missing = subtract(&relevant_soft, &soft_skills_found);

    let mut keywords_present = Vec::new();
    let mut keywords_fuzzy = Vec::new();
    let mut keywords_missing = Vec::new();
    for keyword in jd_tokens.iter() {
        if keyword.chars().count() < MIN_KEYWORD_LEN {
            continue;
        }
        if cv_tokens.contains(keyword) {
            keywords_present.push(keyword.to_string());
        } else if fuzzy_match_normalized(keyword, cv_tokens.as_slice()) {
            keywords_fuzzy.push(keyword.to_string());
        } else {
            keywords_missing.push(keyword.to_string());
        }
    }

    let metrics = base_metrics(cv_text);

    let classified = keywords_present.len() + keywords_fuzzy.len() + keywords_missing.len();
    let breakdown = ScoreBreakdown {
        keyword: ratio_or_one(
            keywords_present.len() as f64 + FUZZY_KEYWORD_CREDIT * keywords_fuzzy.len() as f64,
            classified,
        ),
        hard_skills: ratio_or_one(hard_skills_found.len() as f64, relevant_hard.len()),
        soft_skills: ratio_or_one(soft_skills_found.len() as f64, relevant_soft.len()),
        sections: metrics.sections_found.len() as f64 / SECTIONS.len() as f64,
        length: (metrics.word_count as f64 / OPTIMAL_WORD_COUNT).min(1.0) * 0.8 + 0.2,
        measurable: (metrics.measurable_count as f64 / MEASURABLE_TARGET).min(1.0),
    };

    let final_score = (breakdown.weighted_total() * 100.0).round().clamp(0.0, 100.0) as u32;

    debug!(
        %domain,
        final_score,
        cv_tokens = cv_tokens.len(),
        jd_tokens = jd_tokens.len(),
        keyword = breakdown.keyword,
        hard = breakdown.hard_skills,
        soft = breakdown.soft_skills,
        "CV comparison scored"
    );

    AnalysisResult {
        final_score,
        issues: Issues {
            hard_skills: hard_skills_missing.len(),
            soft_skills: soft_skills_missing.len(),
            sections_missing: missing_sections(&metrics.sections_found),
            low_word_count: metrics.word_count < LOW_WORD_COUNT,
            missing_measurable: metrics.measurable_count == 0,
            too_long: metrics.word_count > HIGH_WORD_COUNT,
        },
        keywords_present,
        keywords_missing,
        keywords_fuzzy,
        hard_skills_found,
        hard_skills_missing,
        soft_skills_found,
        soft_skills_missing,
        sections_found: metrics.sections_found,
        measurable_results: metrics.measurable_count > 0,
        measurable_count: metrics.measurable_count,
        word_count: metrics.word_count,
        breakdown,
    }
}

/// Domain skills followed by general-tech skills not already listed.
fn hard_skills_for(domain: JobDomain) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    domain
        .skills()
        .iter()
        .chain(JobDomain::GeneralTech.skills())
        .copied()
        .filter(|s| seen.insert(*s))
        .collect()
}

fn subtract(all: &[String], found: &[String]) -> Vec<String> {
    all.iter().filter(|s| !found.contains(s)).cloned().collect()
}

fn ratio_or_one(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        1.0
    } else {
        numerator / denominator as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Standalone scorer
// ────────────────────────────────────────────────────────────────────────────

/// Evaluates a CV without a job description and picks its dominant skill domain.
///
/// Domains are visited in [`JobDomain::ALL`] order; a later domain replaces the
/// current leader only with a strictly greater count, so ties go to the earlier one.
pub fn analyze_standalone_cv(cv_text: &str) -> StandaloneAnalysisResult {
    let formatting_result = analyze_formatting(cv_text);
    let metrics = base_metrics(cv_text);

    let mut detected_skills = BTreeMap::new();
    let mut top_skill_domain = None;
    let mut max_skills = 0;

    for domain in JobDomain::ALL {
        let found = extract_skills(cv_text, domain.skills());
        if found.len() > max_skills {
            max_skills = found.len();
            top_skill_domain = Some(domain);
        }
        detected_skills.insert(domain, found);
    }

    debug!(
        top_domain = top_skill_domain.map(|d| d.label()).unwrap_or("none"),
        max_skills,
        format_score = formatting_result.overall_format_score,
        "Standalone CV analyzed"
    );

    StandaloneAnalysisResult {
        formatting_result,
        word_count: metrics.word_count,
        measurable_count: metrics.measurable_count,
        sections_missing: metrics.sections_missing(),
        sections_found: metrics.sections_found,
        top_skill_domain,
        detected_skills,
    }
}

mod dominant_domain {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::analysis::taxonomy::JobDomain;

    const NONE: &str = "none";

    pub fn serialize<S: Serializer>(value: &Option<JobDomain>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map(|d| d.label()).unwrap_or(NONE))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<JobDomain>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw == NONE {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(D::Error::custom)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "Senior Data Analyst\n\
        We need strong Python, SQL and Tableau skills. Experience with machine learning \
        and data visualization is a plus. Excellent communication and teamwork required.";

    const CV: &str = "Jane Doe\njane@x.com | (555) 123-4567 | linkedin.com/in/jane\n\n\
        Summary\nData analyst with 6 years of experience.\n\n\
        Experience\n\
        - Built Tableau dashboards that reduced reporting time by 40%\n\
        - Automated SQL pipelines in Python, saving $20k per year\n\
        - Led teamwork across 3 departments\n\n\
        Education\nBSc Statistics\n\n\
        Skills\nPython, SQL, Tableau, Excel";

    #[test]
    fn test_spec_example_python_sql_communication() {
        let result = analyze_cv(
            "I used Python and SQL daily",
            "Python, SQL, and strong communication skills required",
            JobDomain::DataAnalysis,
        );
        assert!(result.hard_skills_found.contains(&"python".to_string()));
        assert!(result.hard_skills_found.contains(&"sql".to_string()));
        assert!(result
            .soft_skills_missing
            .contains(&"communication".to_string()));
    }

    #[test]
    fn test_realistic_cv_scores_well() {
        let result = analyze_cv(CV, JD, JobDomain::DataAnalysis);
        assert!(result.hard_skills_found.contains(&"tableau".to_string()));
        assert!(result
            .hard_skills_missing
            .contains(&"machine learning".to_string()));
        assert!(result.soft_skills_found.contains(&"teamwork".to_string()));
        assert!(result.keywords_present.contains(&"python".to_string()));
        assert!(result.final_score > 40 && result.final_score <= 100);
        assert!(result.measurable_results);
        assert!(result.issues.low_word_count);
        assert!(!result.issues.too_long);
    }

    #[test]
    fn test_missing_equals_relevant_minus_found() {
        let result = analyze_cv(CV, JD, JobDomain::DataAnalysis);
        for skill in &result.hard_skills_missing {
            assert!(!result.hard_skills_found.contains(skill));
        }
        assert_eq!(result.issues.hard_skills, result.hard_skills_missing.len());
        assert_eq!(result.issues.soft_skills, result.soft_skills_missing.len());
    }

    #[test]
    fn test_short_jd_tokens_not_classified() {
        let result = analyze_cv("go to ml", "ml go sql", JobDomain::GeneralTech);
        let all: Vec<&String> = result
            .keywords_present
            .iter()
            .chain(&result.keywords_fuzzy)
            .chain(&result.keywords_missing)
            .collect();
        assert_eq!(all, vec!["sql"]);
    }

    #[test]
    fn test_empty_jd_defaults_sub_scores_to_one() {
        let result = analyze_cv(CV, "", JobDomain::Statistics);
        assert_eq!(result.breakdown.keyword, 1.0);
        assert_eq!(result.breakdown.hard_skills, 1.0);
        assert_eq!(result.breakdown.soft_skills, 1.0);
        assert!(result.keywords_missing.is_empty());
    }

    #[test]
    fn test_empty_inputs_are_well_defined() {
        let result = analyze_cv("", "", JobDomain::GeneralTech);
        assert_eq!(result.word_count, 0);
        assert!(result.sections_found.is_empty());
        // 35 + 30 + 15 + 0 + 10 * (0.6 * 0.2)
        assert_eq!(result.final_score, 81);
    }

    #[test]
    fn test_final_score_always_bounded() {
        let inputs = [("", JD), (CV, JD), (JD, CV), ("random words", "other words")];
        for (cv, jd) in inputs {
            for domain in JobDomain::ALL {
                let result = analyze_cv(cv, jd, domain);
                assert!(result.final_score <= 100);
            }
        }
    }

    #[test]
    fn test_no_achievements_caps_score() {
        let text = "Summary Experience Education Skills Projects Certifications \
                    python sql communication teamwork tableau";
        let result = analyze_cv(text, text, JobDomain::DataAnalysis);
        assert_eq!(result.measurable_count, 0);
        assert_eq!(result.breakdown.keyword, 1.0);
        assert_eq!(result.breakdown.hard_skills, 1.0);
        // measurable half of the length/achievement component is lost
        assert!(result.final_score <= 96, "got {}", result.final_score);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let a = analyze_cv(CV, JD, JobDomain::DataAnalysis);
        let b = analyze_cv(CV, JD, JobDomain::DataAnalysis);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_hard_skills_for_merges_general_tech() {
        let skills = hard_skills_for(JobDomain::Statistics);
        assert!(skills.contains(&"spss"));
        assert!(skills.contains(&"docker"));
        assert_eq!(hard_skills_for(JobDomain::GeneralTech).len(), 28);
    }

    #[test]
    fn test_standalone_empty_cv() {
        let result = analyze_standalone_cv("");
        assert_eq!(result.top_skill_domain, None);
        assert!(result.sections_found.is_empty());
        assert_eq!(result.sections_missing.len(), 6);
        assert_eq!(result.detected_skills.len(), 6);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["top_skill_domain"], "none");
    }

    #[test]
    fn test_standalone_picks_dominant_domain() {
        let result = analyze_standalone_cv(
            "Recruitment, onboarding, payroll and benefits administration. Also used Excel.",
        );
        assert_eq!(result.top_skill_domain, Some(JobDomain::HumanResources));
        assert!(result.detected_skills[&JobDomain::HumanResources].contains(&"payroll".to_string()));
    }

    #[test]
    fn test_standalone_tie_goes_to_earlier_domain() {
        // one DATA_ANALYSIS skill, one GENERAL_TECH skill
        let result = analyze_standalone_cv("tableau docker");
        assert_eq!(result.detected_skills[&JobDomain::DataAnalysis], vec!["tableau"]);
        assert_eq!(result.detected_skills[&JobDomain::GeneralTech], vec!["docker"]);
        assert_eq!(result.top_skill_domain, Some(JobDomain::DataAnalysis));
    }

    #[test]
    fn test_standalone_serde_round_trip() {
        let result = analyze_standalone_cv(CV);
        let json = serde_json::to_string(&result).unwrap();
        let parsed: StandaloneAnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
        assert!(json.contains(r#""DATA_ANALYSIS":["#));
    }
}
