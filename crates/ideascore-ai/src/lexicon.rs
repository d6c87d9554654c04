//! Keyword lexicons, one per insight dimension.
//!
//! Each keyword carries a positive weight. Matching is case-insensitive and
//! bounded by word edges, so `risk` does not match inside `risks` (which is
//! listed separately). Patterns are compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

/// A compiled keyword → weight mapping.
pub struct Lexicon {
    name: &'static str,
    entries: Vec<(String, Regex, f64)>,
}

impl Lexicon {
    /// Compile a lexicon from `(keyword, weight)` pairs.
    ///
    /// Keywords are matched literally; regex metacharacters such as the dot
    /// in `node.js` are escaped.
    pub fn new(name: &'static str, entries: &[(&str, f64)]) -> Self {
        debug_assert!(
            {
                let mut keys: Vec<String> = entries.iter().map(|(k, _)| k.to_lowercase()).collect();
                keys.sort();
                keys.windows(2).all(|w| w[0] != w[1])
            },
            "lexicon {name} has duplicate keywords"
        );

        let entries = entries
            .iter()
            .map(|&(keyword, weight)| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                let re = Regex::new(&pattern).expect("escaped keyword is a valid pattern");
                (keyword.to_string(), re, weight)
            })
            .collect();

        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Sum of `occurrences * weight` over every keyword found in `text`.
    pub fn keyword_credit(&self, text: &str) -> f64 {
        self.entries
            .iter()
            .map(|(_, re, weight)| re.find_iter(text).count() as f64 * weight)
            .sum()
    }

    /// Keywords found in `text` with their occurrence counts.
    pub fn hits(&self, text: &str) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .filter_map(|(k, re, _)| {
                let n = re.find_iter(text).count();
                (n > 0).then_some((k.as_str(), n))
            })
            .collect()
    }
}

// ── Keyword tables ──

const PROBLEM_KEYWORDS: &[(&str, f64)] = &[
    ("pain", 10.0),
    ("pains", 10.0),
    ("costly", 10.0),
    ("expensive", 10.0),
    ("inefficient", 12.0),
    ("manual", 10.0),
    ("slow", 8.0),
    ("delays", 8.0),
    ("delay", 8.0),
    ("fragmented", 12.0),
    ("risk", 10.0),
    ("risks", 10.0),
    ("compliance", 8.0),
    ("uncertainty", 8.0),
];

const MARKET_KEYWORDS: &[(&str, f64)] = &[
    ("market", 8.0),
    ("segment", 10.0),
    ("segmented", 10.0),
    ("niche", 6.0),
    ("b2b", 8.0),
    ("b2c", 8.0),
    ("enterprise", 8.0),
    ("startup", 6.0),
    ("startups", 6.0),
    ("early", 5.0),
    ("adopters", 5.0),
    ("smb", 6.0),
    ("global", 6.0),
    ("tam", 10.0),
    ("sam", 10.0),
    ("som", 10.0),
];

const COMPETITION_KEYWORDS: &[(&str, f64)] = &[
    ("competitor", 10.0),
    ("competitors", 10.0),
    ("alternative", 8.0),
    ("alternatives", 8.0),
    ("incumbent", 10.0),
    ("existing", 6.0),
    ("manual", 6.0),
    ("spreadsheet", 6.0),
    ("excel", 6.0),
    ("marketplace", 6.0),
    ("saturated", 10.0),
    ("crowded", 10.0),
];

const DIFFERENTIATION_KEYWORDS: &[(&str, f64)] = &[
    ("unique", 10.0),
    ("uniquely", 10.0),
    ("different", 8.0),
    ("innovative", 8.0),
    ("innovation", 8.0),
    ("personalized", 6.0),
    ("automated", 6.0),
    ("automation", 6.0),
    ("ai", 8.0),
    ("machine-learning", 8.0),
    ("ml", 8.0),
    ("data-driven", 8.0),
    ("integrated", 6.0),
];

const TECH_KEYWORDS: &[(&str, f64)] = &[
    ("api", 8.0),
    ("apis", 8.0),
    ("microservice", 8.0),
    ("microservices", 8.0),
    ("event", 5.0),
    ("event-driven", 8.0),
    ("queue", 6.0),
    ("kafka", 6.0),
    ("rabbitmq", 6.0),
    ("react", 5.0),
    ("vue", 5.0),
    ("angular", 5.0),
    ("node", 5.0),
    ("node.js", 5.0),
    ("python", 5.0),
    ("django", 5.0),
    ("flask", 5.0),
    ("postgres", 5.0),
    ("mongodb", 5.0),
    ("docker", 5.0),
    ("kubernetes", 5.0),
    ("scalable", 8.0),
    ("scaling", 8.0),
    ("latency", 6.0),
    ("reliability", 6.0),
    ("resilient", 6.0),
];

const RISK_KEYWORDS: &[(&str, f64)] = &[
    ("risk", 10.0),
    ("risks", 10.0),
    ("uncertainty", 10.0),
    ("adoption", 8.0),
    ("churn", 8.0),
    ("regulation", 8.0),
    ("regulatory", 8.0),
    ("compliance", 8.0),
    ("funding", 6.0),
    ("liquidity", 6.0),
    ("go-to-market", 6.0),
    ("competition", 6.0),
    ("dependency", 6.0),
];

pub static PROBLEM: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new("problem", PROBLEM_KEYWORDS));
pub static MARKET: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new("market", MARKET_KEYWORDS));
pub static COMPETITION: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::new("competition", COMPETITION_KEYWORDS));
pub static DIFFERENTIATION: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::new("differentiation", DIFFERENTIATION_KEYWORDS));
pub static TECH: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new("tech", TECH_KEYWORDS));
pub static RISK: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new("risk", RISK_KEYWORDS));
