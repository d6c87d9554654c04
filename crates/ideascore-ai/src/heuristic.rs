//! Heuristic analysis: keyword scoring for the six dimensions and a
//! templated Lean Canvas. Pure and infallible.

use ideascore_core::answers::AnswerField;
use ideascore_core::{Answers, Dimension, LeanCanvas, ScoreVector};
use tracing::debug;

use crate::lexicon::{self, Lexicon};
use crate::scorer::{score_answer, ScoreOptions};

/// Flat bonus for any articulated risk awareness.
const RISK_AWARENESS_BONUS: f64 = 10.0;

/// Problem statements longer than this are truncated in the value proposition.
const UVP_PROBLEM_CHARS: usize = 100;

const DEFAULT_CHANNELS: &str = "Digital channels, partner incubators, mentor network";
const DEFAULT_REVENUE_STREAMS: &str =
    "Product/service sales, subscription model and potential investment income";
const DEFAULT_COST_STRUCTURE: &str =
    "Development costs, operating expenses, marketing and distribution costs";
const DEFAULT_KEY_METRICS: &str = "User acquisition, active users, revenue growth, \
     customer satisfaction and market penetration";
const DEFAULT_UNFAIR_ADVANTAGE: &str = "Technology infrastructure, domain expertise, \
     strategic partnerships and early market entry";

/// Lexicon and length thresholds used to score a dimension.
pub fn profile(dim: Dimension) -> (&'static Lexicon, ScoreOptions) {
    match dim {
        Dimension::ProblemValidation => (&*lexicon::PROBLEM, ScoreOptions::words(15, 120)),
        Dimension::MarketMaturity => (&*lexicon::MARKET, ScoreOptions::words(10, 100)),
        Dimension::Competition => (&*lexicon::COMPETITION, ScoreOptions::words(10, 120)),
        Dimension::Differentiation => (&*lexicon::DIFFERENTIATION, ScoreOptions::words(15, 120)),
        Dimension::TechFeasibility => (&*lexicon::TECH, ScoreOptions::words(10, 150)),
        Dimension::RiskUncertainty => (&*lexicon::RISK, ScoreOptions::words(10, 150)),
    }
}

/// Score every dimension from its answer field.
pub fn compute_scores(answers: &Answers) -> ScoreVector {
    ScoreVector::from_fn(|dim| {
        let (lexicon, options) = profile(dim);
        let text = answers.raw(dim.source_field());
        let raw = score_answer(text, lexicon, options);
        let score = match dim {
            Dimension::RiskUncertainty => risk_from_awareness(raw),
            _ => raw,
        };
        debug!(
            dimension = dim.key(),
            lexicon = lexicon.name(),
            hits = ?text.map(|t| lexicon.hits(t)).unwrap_or_default(),
            score,
            "heuristic score"
        );
        score
    })
}

/// Risk uncertainty is inverse risk: awareness plus a flat bonus, capped at 100.
pub fn risk_from_awareness(awareness: f64) -> f64 {
    (awareness + RISK_AWARENESS_BONUS).min(100.0)
}

/// Compose a Lean Canvas from the answers, filling gaps with defaults.
pub fn build_canvas(answers: &Answers) -> LeanCanvas {
    let text = |field| answers.get(field).map(str::trim);

    LeanCanvas {
        problem: text(AnswerField::Problem).unwrap_or_default().to_string(),
        solution: text(AnswerField::Solution).unwrap_or_default().to_string(),
        unique_value_prop: unique_value_prop(
            text(AnswerField::TargetCustomer),
            text(AnswerField::Problem),
        ),
        customer_segments: text(AnswerField::TargetCustomer)
            .unwrap_or_default()
            .to_string(),
        channels: DEFAULT_CHANNELS.to_string(),
        revenue_streams: text(AnswerField::RevenueModel)
            .unwrap_or(DEFAULT_REVENUE_STREAMS)
            .to_string(),
        cost_structure: DEFAULT_COST_STRUCTURE.to_string(),
        key_metrics: DEFAULT_KEY_METRICS.to_string(),
        unfair_advantage: DEFAULT_UNFAIR_ADVANTAGE.to_string(),
    }
}

fn unique_value_prop(customer: Option<&str>, problem: Option<&str>) -> String {
    match (customer, problem) {
        (Some(customer), Some(problem)) => format!(
            "A unique solution for {customer} that solves the problem of {}.",
            shorten(problem)
        ),
        (Some(customer), None) => format!("A tailored, value-driven solution for {customer}."),
        (None, Some(problem)) => {
            format!("An innovative and effective approach to {}.", shorten(problem))
        }
        (None, None) => "An innovative solution delivering unique value to our customers.".to_string(),
    }
}

/// First 100 characters followed by `...` when longer.
fn shorten(text: &str) -> String {
    if text.chars().count() > UVP_PROBLEM_CHARS {
        let head: String = text.chars().take(UVP_PROBLEM_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
