//! Fixed lookup tables: skill domains, soft skills, stopwords and CV section keywords.
//!
//! Everything here is hand-curated and read-only. Skill phrases are authored in
//! lower-case canonical form; matching is case-insensitive because every
//! comparison runs through `text::normalize` first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Job category used to pick the relevant hard-skill table.
///
/// Variant order is the fixed enumeration order used by the standalone scorer
/// when it looks for the dominant domain.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobDomain {
    DataAnalysis,
    EconomicsBusiness,
    HumanResources,
    PoliticsPublicRelations,
    Statistics,
    /// Fallback when no classifier result is available.
    #[default]
    GeneralTech,
}

impl JobDomain {
    pub const ALL: [JobDomain; 6] = [
        JobDomain::DataAnalysis,
        JobDomain::EconomicsBusiness,
        JobDomain::HumanResources,
        JobDomain::PoliticsPublicRelations,
        JobDomain::Statistics,
        JobDomain::GeneralTech,
    ];

    /// Case-exact label, e.g. `DATA_ANALYSIS`.
    pub fn label(&self) -> &'static str {
        match self {
            JobDomain::DataAnalysis => "DATA_ANALYSIS",
            JobDomain::EconomicsBusiness => "ECONOMICS_BUSINESS",
            JobDomain::HumanResources => "HUMAN_RESOURCES",
            JobDomain::PoliticsPublicRelations => "POLITICS_PUBLIC_RELATIONS",
            JobDomain::Statistics => "STATISTICS",
            JobDomain::GeneralTech => "GENERAL_TECH",
        }
    }

    /// Hard-skill phrases for this domain.
    pub fn skills(&self) -> &'static [&'static str] {
        match self {
            JobDomain::DataAnalysis => DATA_ANALYSIS_SKILLS,
            JobDomain::EconomicsBusiness => ECONOMICS_BUSINESS_SKILLS,
            JobDomain::HumanResources => HUMAN_RESOURCES_SKILLS,
            JobDomain::PoliticsPublicRelations => POLITICS_PUBLIC_RELATIONS_SKILLS,
            JobDomain::Statistics => STATISTICS_SKILLS,
            JobDomain::GeneralTech => GENERAL_TECH_SKILLS,
        }
    }
}

impl fmt::Display for JobDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job domain '{0}'")]
pub struct UnknownDomain(pub String);

impl FromStr for JobDomain {
    type Err = UnknownDomain;

    /// Labels are case-exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobDomain::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| UnknownDomain(s.to_string()))
    }
}

pub const STOPWORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "to", "for", "of", "in", "on", "with", "by", "from", "as",
    "is", "are", "be", "that", "this", "we", "our", "you", "your", "at", "it", "using", "use",
    "used", "will", "can", "ability", "including", "was", "were", "been", "have", "has", "had",
    "do", "does", "did", "would", "could", "should", "may", "might", "shall", "must", "need",
    "want", "like", "get", "got", "go", "went", "come", "came",
];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Canonical CV sections and the keyword synonyms that reveal each one.
pub const SECTIONS: &[(&str, &[&str])] = &[
    ("summary", &["summary", "profile", "objective", "about"]),
    (
        "experience",
        &["experience", "employment", "work history", "career"],
    ),
    (
        "education",
        &["education", "academic", "qualifications", "degree"],
    ),
    (
        "skills",
        &["skills", "competencies", "expertise", "abilities"],
    ),
    ("projects", &["projects", "portfolio", "accomplishments"]),
    (
        "certifications",
        &["certifications", "certificates", "credentials", "licenses"],
    ),
];

pub const DATA_ANALYSIS_SKILLS: &[&str] = &[
    "python", "r", "sql", "matlab", "vba", "scala", "java", "javascript",
    "numpy", "pandas", "scipy", "dplyr", "data analysis", "data cleaning", "data wrangling",
    "etl", "data preprocessing", "feature engineering", "data modeling", "data pipelines",
    "data mining", "web scraping", "api development", "json", "xml", "csv handling",
    "scikit-learn", "tensorflow", "keras", "pytorch", "xgboost", "lightgbm", "catboost",
    "statsmodels", "jupyter", "matplotlib", "seaborn", "ggplot2", "plotly", "tableau", "power bi",
    "qlik", "looker", "dash", "data visualization", "dashboarding", "reporting",
    "business intelligence", "google data studio", "machine learning", "deep learning",
    "artificial intelligence", "predictive modeling", "classification", "regression",
    "clustering", "neural networks", "model evaluation", "model deployment", "mlops",
    "natural language processing", "nlp", "computer vision", "time series forecasting",
    "a/b testing", "sql server", "mysql", "postgresql", "oracle", "mongodb", "nosql", "hadoop",
    "spark", "pyspark", "hive", "kafka", "elasticsearch", "big data", "data engineering",
    "data warehousing", "data lakes", "snowflake", "redshift", "bigquery", "databricks",
];

pub const ECONOMICS_BUSINESS_SKILLS: &[&str] = &[
    "financial modeling", "market research", "customer behavior analysis", "business analytics",
    "kpi monitoring", "economics", "microeconomics", "macroeconomics", "sales analytics",
    "marketing analytics", "pricing strategy", "competitive analysis", "product management",
    "operations management", "risk management", "risk analysis", "business strategy",
    "supply chain analytics", "inventory analysis", "sales forecasting", "financial analysis",
    "budgeting", "cost analysis", "profitability analysis", "revenue analysis", "trend analysis",
    "cohort analysis", "funnel analysis", "conversion analysis", "attribution modeling",
    "customer lifetime value", "market sizing", "demand forecasting", "inventory optimization",
    "crm tools", "salesforce", "hubspot", "google analytics", "google ads", "sem", "seo",
    "valuation models", "dcf", "discounted cash flow", "npv", "irr", "capm", "wacc",
    "financial ratios", "credit analysis", "portfolio optimization", "feasibility studies",
    "economic analysis", "cost-benefit analysis", "business case development", "swot analysis",
    "pestle analysis", "porter's five forces", "business model canvas", "go-to-market strategy",
    "agile methodology", "scrum", "six sigma", "lean manufacturing",
];

pub const HUMAN_RESOURCES_SKILLS: &[&str] = &[
    "human resources", "hris", "applicant tracking system", "ats", "recruitment", "sourcing",
    "onboarding", "employee relations", "performance management", "talent management",
    "succession planning", "employee engagement", "compensation and benefits", "payroll",
    "hr policies", "labor law", "compliance", "organizational development",
    "workforce planning", "hr analytics", "people analytics", "training and development",
    "l&d", "change management", "conflict resolution", "diversity and inclusion", "d&i",
    "benefits administration", "job evaluation",
];

pub const POLITICS_PUBLIC_RELATIONS_SKILLS: &[&str] = &[
    "public relations", "pr", "media relations", "crisis communication",
    "corporate communications", "press release", "public speaking", "copywriting",
    "social media management", "brand management", "reputation management",
    "stakeholder relations", "investor relations", "government relations", "public affairs",
    "lobbying", "policy analysis", "political science", "international relations",
    "legislative analysis", "campaign management", "speech writing", "advocacy",
    "community outreach", "event management",
];

pub const STATISTICS_SKILLS: &[&str] = &[
    "statistics", "probability", "linear algebra", "calculus", "bayesian statistics",
    "hypothesis testing", "statistical modeling", "time series analysis", "econometrics",
    "quantitative analysis", "optimization", "regression analysis", "anova", "chi-square",
    "t-test", "confidence intervals", "p-values", "statistical significance",
    "experimental design", "sampling methods", "monte carlo simulation", "survival analysis",
    "multivariate analysis", "spss", "stata", "sas",
];

pub const GENERAL_TECH_SKILLS: &[&str] = &[
    "git", "github", "gitlab", "docker", "kubernetes", "aws", "azure", "gcp", "cloud computing",
    "serverless", "microservices", "ci/cd", "devops", "automation", "api integration", "excel",
    "advanced excel", "power query", "dax", "google sheets", "microsoft office",
    "project management", "jira", "confluence", "asana", "trello", "slack", "teams",
];

/// Domain-agnostic interpersonal and behavioural competencies.
pub const SOFT_SKILLS: &[&str] = &[
    // communication & interpersonal
    "communication", "verbal communication", "written communication", "presentation skills",
    "public speaking", "storytelling", "active listening", "interpersonal skills", "empathy",
    "emotional intelligence", "persuasion", "influencing", "negotiation", "conflict resolution",
    "diplomacy", "tact", "cultural sensitivity", "cross-cultural communication", "multilingual",
    "client communication", "stakeholder communication", "executive communication",
    "technical writing", "business writing", "report writing", "documentation skills",
    // leadership & management
    "leadership", "team leadership", "project leadership", "thought leadership", "mentoring",
    "coaching", "team building", "team management", "people management", "talent development",
    "succession planning", "performance management", "feedback delivery", "motivation",
    "delegation", "empowerment", "change management", "organizational development",
    "strategic leadership", "visionary leadership", "servant leadership",
    "transformational leadership", "decision making", "strategic thinking",
    "executive presence", "board presentation",
    // collaboration
    "teamwork", "collaboration", "cross-functional collaboration", "matrix management",
    "virtual team management", "remote collaboration", "partnership building",
    "relationship building", "networking", "community building", "alliance management",
    "vendor management", "supplier relationship management", "customer relationship management",
    "account management", "stakeholder management", "stakeholder engagement",
    "consensus building",
    // problem solving
    "problem solving", "analytical thinking", "critical thinking", "strategic thinking",
    "systems thinking", "design thinking", "creative thinking", "innovative thinking",
    "logical reasoning", "deductive reasoning", "inductive reasoning", "pattern recognition",
    "root cause analysis", "troubleshooting", "debugging", "hypothesis testing",
    "research skills", "investigative skills", "fact-finding", "information gathering",
    "synthesis", "evaluation", "assessment", "judgment", "decision analysis",
    // project & time management
    "project management", "program management", "portfolio management", "time management",
    "priority management", "resource management", "budget management", "scope management",
    "risk management", "quality management", "change control", "milestone tracking",
    "deadline management", "workflow optimization", "process improvement",
    "efficiency optimization", "productivity enhancement", "multitasking", "organization",
    "planning", "scheduling", "coordination", "logistics", "execution", "monitoring",
    "control", "closure",
    // adaptability & learning
    "adaptability", "flexibility", "agility", "resilience", "stress management", "composure",
    "emotional regulation", "self-awareness", "self-management", "continuous learning",
    "lifelong learning", "curiosity", "growth mindset", "learning agility",
    "knowledge transfer", "skill development", "professional development",
    "career development", "upskilling", "reskilling", "innovation", "creativity",
    "experimentation", "prototyping", "iteration",
    // commercial acumen
    "business acumen", "commercial awareness", "market knowledge", "industry expertise",
    "competitive intelligence", "customer focus", "customer-centricity", "service orientation",
    "quality focus", "excellence orientation", "results orientation", "performance orientation",
    "outcome focus", "value creation", "profit consciousness", "cost awareness", "roi focus",
    "business development", "sales acumen", "marketing acumen", "financial acumen",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_labels_round_trip_case_exact() {
        for domain in JobDomain::ALL {
            assert_eq!(domain.label().parse::<JobDomain>(), Ok(domain));
        }
        assert!("data_analysis".parse::<JobDomain>().is_err());
    }

    #[test]
    fn test_unknown_domain_error_message() {
        let err = "MARKETING".parse::<JobDomain>().unwrap_err();
        assert_eq!(err, UnknownDomain("MARKETING".to_string()));
        assert_eq!(err.to_string(), "unknown job domain 'MARKETING'");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_domain_serde_uses_labels() {
        let json = serde_json::to_string(&JobDomain::PoliticsPublicRelations).unwrap();
        assert_eq!(json, r#""POLITICS_PUBLIC_RELATIONS""#);
        let parsed: JobDomain = serde_json::from_str(r#""GENERAL_TECH""#).unwrap();
        assert_eq!(parsed, JobDomain::GeneralTech);
    }

    #[test]
    fn test_default_domain_is_general_tech() {
        assert_eq!(JobDomain::default(), JobDomain::GeneralTech);
    }

    #[test]
    fn test_six_sections() {
        assert_eq!(SECTIONS.len(), 6);
        assert!(SECTIONS.iter().all(|(_, kws)| !kws.is_empty()));
    }

    #[test]
    fn test_stopwords() {
        assert!(is_stopword("the"));
        assert!(!is_stopword("python"));
    }
}
