//! The six insight dimensions and their score vector.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerField;

/// Lowest and highest score any dimension can hold.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Clamp a raw score into `[0, 100]`. NaN maps to 0.
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return SCORE_MIN;
    }
    raw.clamp(SCORE_MIN, SCORE_MAX)
}

/// An insight dimension. Each is scored from exactly one answer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    ProblemValidation,
    MarketMaturity,
    Competition,
    Differentiation,
    TechFeasibility,
    /// Inverse risk: more articulated risk awareness scores higher.
    RiskUncertainty,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Self::ProblemValidation,
        Self::MarketMaturity,
        Self::Competition,
        Self::Differentiation,
        Self::TechFeasibility,
        Self::RiskUncertainty,
    ];

    /// JSON key of the dimension in score payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ProblemValidation => "problemValidation",
            Self::MarketMaturity => "marketMaturity",
            Self::Competition => "competition",
            Self::Differentiation => "differentiation",
            Self::TechFeasibility => "techFeasibility",
            Self::RiskUncertainty => "riskUncertainty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProblemValidation => "Problem Validation",
            Self::MarketMaturity => "Market Maturity",
            Self::Competition => "Competition",
            Self::Differentiation => "Differentiation",
            Self::TechFeasibility => "Tech Feasibility",
            Self::RiskUncertainty => "Risk Uncertainty",
        }
    }

    /// The answer field this dimension is computed from.
    pub fn source_field(&self) -> AnswerField {
        match self {
            Self::ProblemValidation => AnswerField::Problem,
            Self::MarketMaturity => AnswerField::TargetCustomer,
            Self::Competition => AnswerField::ExistingAlternatives,
            Self::Differentiation => AnswerField::Solution,
            Self::TechFeasibility => AnswerField::TechStackThoughts,
            Self::RiskUncertainty => AnswerField::BiggestRisks,
        }
    }
}

/// Six insight scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreVector {
    pub problem_validation: f64,
    pub market_maturity: f64,
    pub competition: f64,
    pub differentiation: f64,
    pub tech_feasibility: f64,
    pub risk_uncertainty: f64,
}

impl ScoreVector {
    /// Build a vector by evaluating `f` for every dimension.
    ///
    /// Values are clamped into range on the way in.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> f64) -> Self {
        let mut scores = Self::default();
        for dim in Dimension::ALL {
            scores.set(dim, f(dim));
        }
        scores
    }

    pub fn get(&self, dim: Dimension) -> f64 {
        match dim {
            Dimension::ProblemValidation => self.problem_validation,
            Dimension::MarketMaturity => self.market_maturity,
            Dimension::Competition => self.competition,
            Dimension::Differentiation => self.differentiation,
            Dimension::TechFeasibility => self.tech_feasibility,
            Dimension::RiskUncertainty => self.risk_uncertainty,
        }
    }

    /// Set a dimension, clamping into `[0, 100]`.
    pub fn set(&mut self, dim: Dimension, value: f64) {
        let value = clamp_score(value);
        match dim {
            Dimension::ProblemValidation => self.problem_validation = value,
            Dimension::MarketMaturity => self.market_maturity = value,
            Dimension::Competition => self.competition = value,
            Dimension::Differentiation => self.differentiation = value,
            Dimension::TechFeasibility => self.tech_feasibility = value,
            Dimension::RiskUncertainty => self.risk_uncertainty = value,
        }
    }

    /// `(dimension, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}
