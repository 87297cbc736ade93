//! Text normalization and tokenization shared by every matcher.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::taxonomy::is_stopword;

/// Candidate single-word tokens.
static RE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9+#.%]+").expect("Invalid regex"));

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Multi-word phrases injected into the token set alongside their constituent words.
const COMPOUND_PHRASES: &[&str] = &[
    r"data\s+analysis",
    r"machine\s+learning",
    r"business\s+intelligence",
    r"data\s+science",
    r"statistical\s+modeling",
    r"project\s+management",
    r"customer\s+relationship\s+management",
    r"supply\s+chain",
    r"financial\s+modeling",
    r"market\s+research",
    r"competitive\s+analysis",
    r"feasibility\s+studies",
    r"cost\s+benefit\s+analysis",
    r"return\s+on\s+investment",
    r"key\s+performance\s+indicators",
];

static RE_COMPOUNDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    COMPOUND_PHRASES
        .iter()
        .map(|p| Regex::new(p).expect("Invalid regex"))
        .collect()
});

/// Canonicalizes text for comparison.
///
/// Lower-cases, turns separator punctuation into spaces, drops periods that are
/// not touching a digit ("3.5" survives, "U.S." becomes "u s"), then collapses
/// whitespace and trims. Idempotent.
pub fn normalize(text: &str) -> String {
    let lower: Vec<char> = text.to_lowercase().chars().collect();
    let mut out = String::with_capacity(lower.len());

    for (i, &c) in lower.iter().enumerate() {
        let mapped = match c {
            '_' | '-' | '•' | ',' | '(' | ')' | '[' | ']' | '{' | '}' | ':' | ';' | '/' | '\\'
            | '&' => ' ',
            '.' => {
                let prev_digit = i > 0 && lower[i - 1].is_ascii_digit();
                let next_digit = lower.get(i + 1).is_some_and(|n| n.is_ascii_digit());
                if prev_digit || next_digit {
                    '.'
                } else {
                    ' '
                }
            }
            other => other,
        };
        out.push(mapped);
    }

    RE_WHITESPACE.replace_all(&out, " ").trim().to_string()
}

/// Insertion-ordered set of distinct tokens.
///
/// Order follows first appearance in the text (single words first, then
/// compound phrases) so everything derived from it is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the token was already present.
    pub fn insert(&mut self, token: String) -> bool {
        if self.members.contains(&token) {
            return false;
        }
        self.members.insert(token.clone());
        self.order.push(token);
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }
}

/// Builds the token set of a text.
///
/// Two independent passes over the normalized text: a character-class scan for
/// single tokens (stopwords and one-character tokens dropped) and a scan for
/// the fixed compound phrases. A phrase and its words can both be present.
pub fn tokenize(text: &str) -> TokenSet {
    let normalized = normalize(text);
    let mut tokens = TokenSet::new();

    for m in RE_WORD.find_iter(&normalized) {
        let word = m.as_str();
        if word.chars().count() > 1 && !is_stopword(word) {
            tokens.insert(word.to_string());
        }
    }

    for re in RE_COMPOUNDS.iter() {
        for m in re.find_iter(&normalized) {
            tokens.insert(RE_WHITESPACE.replace_all(m.as_str(), " ").into_owned());
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::taxonomy::STOPWORDS;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Data-Analysis, (SQL)/Python & R: [ETL]; {json}"),
            "data analysis sql python r etl json"
        );
    }

    #[test]
    fn test_normalize_keeps_decimal_points() {
        assert_eq!(normalize("GPA 3.5 in the U.S."), "gpa 3.5 in the u s");
    }

    #[test]
    fn test_normalize_keeps_period_next_to_single_digit() {
        assert_eq!(normalize("v2. release"), "v2. release");
        assert_eq!(normalize("node .5"), "node .5");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a\t\tb\n\n\nc  "), "a b c");
        assert_eq!(normalize("• led • team"), "led team");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Senior Data Analyst (U.S.) — 5+ years, 3.5 GPA",
            "C++ / C# developer;  node.js & react\n\n- built ETL",
            "...a..b...",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
            assert_eq!(once, once.to_lowercase());
            assert!(!once.contains("  "));
            assert!(!once.contains('\n') && !once.contains('\t'));
        }
    }

    #[test]
    fn test_tokenize_drops_stopwords_and_single_chars() {
        let tokens = tokenize("I used Python and SQL for the R project");
        assert!(tokens.contains("python"));
        assert!(tokens.contains("sql"));
        assert!(tokens.contains("project"));
        assert!(!tokens.contains("and"));
        assert!(!tokens.contains("used"));
        assert!(!tokens.contains("i"));
        assert!(!tokens.contains("r"));
    }

    #[test]
    fn test_tokenize_keeps_symbols_in_class() {
        let tokens = tokenize("C++ and C# with 40% growth, v3.5");
        assert!(tokens.contains("c++"));
        assert!(tokens.contains("c#"));
        assert!(tokens.contains("40%"));
        assert!(tokens.contains("v3.5"));
    }

    #[test]
    fn test_tokenize_adds_compound_phrases_with_constituents() {
        let tokens = tokenize("Machine   Learning and data-analysis expert");
        assert!(tokens.contains("machine learning"));
        assert!(tokens.contains("data analysis"));
        assert!(tokens.contains("machine"));
        assert!(tokens.contains("learning"));
        assert!(tokens.contains("analysis"));
    }

    #[test]
    fn test_tokenize_deduplicates_and_preserves_order() {
        let tokens = tokenize("sql python sql excel python");
        let collected: Vec<&str> = tokens.iter().collect();
        assert_eq!(collected, vec!["sql", "python", "excel"]);
    }

    #[test]
    fn test_tokenize_invariants() {
        let tokens = tokenize(
            "We are looking for an analyst with project management, supply chain \
             and key performance indicators experience. Must have a B.Sc.",
        );
        for token in tokens.iter() {
            if token.contains(' ') {
                continue;
            }
            assert!(token.chars().count() > 1, "short token {token}");
            assert!(!STOPWORDS.contains(&token), "stopword {token}");
        }
        assert!(tokens.contains("key performance indicators"));
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").len(), 0);
    }
}
