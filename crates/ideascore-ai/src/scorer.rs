//! Lexical answer scoring.
//!
//! A deterministic proxy for answer quality. Keyword hits and elaboration add
//! credit; answers outside the length window or padded with repeated words
//! lose it.

use std::collections::HashMap;

use ideascore_core::clamp_score;

use crate::lexicon::Lexicon;

const SHORT_PENALTY: f64 = 20.0;
const LONG_PENALTY: f64 = 10.0;
const LENGTH_CREDIT_CAP: f64 = 30.0;
/// A word may appear this many times before each extra use is penalised.
const REPEAT_ALLOWANCE: usize = 3;
const REPEAT_PENALTY: f64 = 5.0;

/// Length thresholds for one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOptions {
    /// Fewer words than this costs [`SHORT_PENALTY`].
    pub min_words: usize,
    /// More words than this costs [`LONG_PENALTY`].
    pub max_words: usize,
    /// Credit per word, capped at 30 in total.
    pub base_length_weight: f64,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            min_words: 15,
            max_words: 120,
            base_length_weight: 0.5,
        }
    }
}

impl ScoreOptions {
    pub fn words(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
            ..Self::default()
        }
    }
}

/// Score one free-text answer against a lexicon. Always in `[0, 100]`.
///
/// Absent or blank text scores 0. Intermediate values may go negative;
/// only the result is clamped.
pub fn score_answer(text: Option<&str>, lexicon: &Lexicon, options: ScoreOptions) -> f64 {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return 0.0;
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();

    let mut score = 0.0;

    if word_count < options.min_words {
        score -= SHORT_PENALTY;
    }
    if word_count > options.max_words {
        score -= LONG_PENALTY;
    }
    score += (word_count as f64 * options.base_length_weight).min(LENGTH_CREDIT_CAP);

    score += lexicon.keyword_credit(text);
    score -= repetition_penalty(&words);

    clamp_score(score)
}

/// `5 * (count - 3)` for every word (case-insensitive) used more than three times.
fn repetition_penalty(words: &[&str]) -> f64 {
    let mut freq: HashMap<String, usize> = HashMap::new();
    for word in words {
        *freq.entry(word.to_lowercase()).or_default() += 1;
    }
    freq.values()
        .filter(|&&count| count > REPEAT_ALLOWANCE)
        .map(|&count| (count - REPEAT_ALLOWANCE) as f64 * REPEAT_PENALTY)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{PROBLEM, RISK, TECH};

    fn opts(min: usize, max: usize) -> ScoreOptions {
        ScoreOptions::words(min, max)
    }

    #[test]
    fn absent_or_blank_scores_zero() {
        for lexicon in [&*PROBLEM, &*TECH, &*RISK] {
            assert_eq!(score_answer(None, lexicon, ScoreOptions::default()), 0.0);
            assert_eq!(score_answer(Some(""), lexicon, ScoreOptions::default()), 0.0);
            assert_eq!(score_answer(Some("  \n\t "), lexicon, ScoreOptions::default()), 0.0);
        }
    }

    #[test]
    fn twelve_word_tech_answer() {
        let text = "We will build a scalable api and ship it with docker containers";
        assert_eq!(text.split_whitespace().count(), 12);
        // 12 * 0.5 length credit + 8 (scalable) + 8 (api) + 5 (docker).
        assert_eq!(score_answer(Some(text), &TECH, opts(10, 150)), 27.0);
    }

    #[test]
    fn short_answer_penalty_floors_at_zero() {
        // 3 words: -20 + 1.5, no keywords.
        assert_eq!(score_answer(Some("it is hard"), &PROBLEM, opts(15, 120)), 0.0);
        // 3 words with a heavy keyword: -20 + 1.5 + 12 + 10 = 3.5.
        assert_eq!(
            score_answer(Some("inefficient manual work"), &PROBLEM, opts(15, 120)),
            3.5
        );
    }

    #[test]
    fn length_credit_is_capped() {
        let text = (0..100).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        // 100 distinct words: 50 capped to 30, no penalties.
        assert_eq!(score_answer(Some(&text), &TECH, opts(10, 150)), 30.0);
    }

    #[test]
    fn verbose_answer_penalty() {
        let text = (0..130).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        // 130 words > 120: 30 - 10.
        assert_eq!(score_answer(Some(&text), &PROBLEM, opts(15, 120)), 20.0);
    }

    #[test]
    fn score_is_clamped_to_hundred() {
        let text = "risk risks uncertainty adoption churn regulation regulatory compliance \
                    funding liquidity go-to-market competition dependency";
        assert_eq!(score_answer(Some(text), &RISK, opts(10, 150)), 100.0);
    }

    #[test]
    fn more_keywords_never_lower_the_score() {
        let plain = "our team plans to ship a service with a database and a frontend app";
        let keyed = "our team plans to ship a scalable service with postgres and a react app";
        assert_eq!(
            plain.split_whitespace().count(),
            keyed.split_whitespace().count()
        );
        let a = score_answer(Some(plain), &TECH, opts(10, 150));
        let b = score_answer(Some(keyed), &TECH, opts(10, 150));
        assert!(b > a, "{b} should exceed {a}");
    }

    #[test]
    fn fourth_repetition_is_penalised() {
        let three = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu \
                     latency latency latency nu";
        let four = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu \
                    latency latency latency latency";
        assert_eq!(three.split_whitespace().count(), 16);
        assert_eq!(four.split_whitespace().count(), 16);

        // 8 + 18 keyword credit vs 8 + 24 - 5.
        let s3 = score_answer(Some(three), &TECH, opts(10, 150));
        let s4 = score_answer(Some(four), &TECH, opts(10, 150));
        assert_eq!(s3, 26.0);
        assert_eq!(s4, 27.0);

        // With a non-keyword filler word the penalty strictly lowers the score.
        let filler3 = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu \
                       very very very nu";
        let filler4 = "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu \
                       very very very very";
        let f3 = score_answer(Some(filler3), &TECH, opts(10, 150));
        let f4 = score_answer(Some(filler4), &TECH, opts(10, 150));
        assert!(f4 < f3, "{f4} should be below {f3}");
    }

    #[test]
    fn repetition_counts_ignore_case() {
        let words = ["Very", "very", "VERY", "vEry", "very"];
        assert_eq!(repetition_penalty(&words), 10.0);
        assert_eq!(repetition_penalty(&["a", "a", "a"]), 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "Manual invoicing is slow and costly for small firms, with delays and compliance risk";
        let first = score_answer(Some(text), &PROBLEM, ScoreOptions::default());
        for _ in 0..5 {
            assert_eq!(score_answer(Some(text), &PROBLEM, ScoreOptions::default()), first);
        }
    }
}
