//! Mentor dashboard aggregation over stored ideas.
//!
//! Compares the first and latest submission to show how the founder's
//! thinking has moved, and flags blind spots in the latest one.

use serde::Serialize;

use crate::record::IdeaRecord;
use crate::scores::{Dimension, ScoreVector};

/// Scores strictly below this are blind spots.
pub const BLIND_SPOT_THRESHOLD: f64 = 40.0;

/// Scores at or above this are strengths.
pub const STRENGTH_THRESHOLD: f64 = 80.0;

/// A dimension that needs mentor attention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlindSpot {
    #[serde(serialize_with = "serialize_dimension")]
    pub dimension: Dimension,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Strength,
}

/// Per-idea highlight: a weak or a strong dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    #[serde(serialize_with = "serialize_dimension")]
    pub dimension: Dimension,
    pub score: f64,
    pub title: String,
    pub message: String,
}

/// Movement of one dimension between the first and latest idea.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionTrend {
    #[serde(serialize_with = "serialize_dimension")]
    pub dimension: Dimension,
    pub first: f64,
    pub last: f64,
    pub diff: f64,
}

/// Aggregate view over every stored idea, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_ideas: usize,
    pub first_average: Option<f64>,
    pub last_average: Option<f64>,
    pub improvement: Option<f64>,
    pub trends: Vec<DimensionTrend>,
    pub blind_spots: Vec<BlindSpot>,
    pub message: String,
}

fn serialize_dimension<S: serde::Serializer>(dim: &Dimension, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(dim.key())
}

/// Mean of the six dimension scores.
pub fn average_score(scores: &ScoreVector) -> f64 {
    let total: f64 = scores.iter().map(|(_, v)| v).sum();
    total / Dimension::ALL.len() as f64
}

/// Dimensions scoring below [`BLIND_SPOT_THRESHOLD`], in canonical order.
pub fn blind_spots(scores: &ScoreVector) -> Vec<BlindSpot> {
    scores
        .iter()
        .filter(|&(_, score)| score < BLIND_SPOT_THRESHOLD)
        .map(|(dimension, score)| BlindSpot { dimension, score })
        .collect()
}

/// Warnings for dimensions below [`BLIND_SPOT_THRESHOLD`] and strengths for
/// those at or above [`STRENGTH_THRESHOLD`], in canonical order.
pub fn insights(scores: &ScoreVector) -> Vec<Insight> {
    scores
        .iter()
        .filter_map(|(dimension, score)| {
            let (kind, title, message) = if score < BLIND_SPOT_THRESHOLD {
                (
                    InsightKind::Warning,
                    format!("{} is low", dimension.label()),
                    format!("There is room to grow here. Score: {score:.1}/100"),
                )
            } else if score >= STRENGTH_THRESHOLD {
                (
                    InsightKind::Strength,
                    format!("{} is strong", dimension.label()),
                    format!("You are in a strong position here. Score: {score:.1}/100"),
                )
            } else {
                return None;
            };
            Some(Insight {
                kind,
                dimension,
                score,
                title,
                message,
            })
        })
        .collect()
}

/// Per-dimension change from `first` to `last`.
pub fn score_trend(first: &ScoreVector, last: &ScoreVector) -> Vec<DimensionTrend> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let (f, l) = (first.get(dimension), last.get(dimension));
            DimensionTrend {
                dimension,
                first: f,
                last: l,
                diff: l - f,
            }
        })
        .collect()
}

/// Summarise a founder's ideas. `records` must be sorted oldest first.
///
/// Trends and blind spots need at least two ideas; a single idea only
/// reports its average.
pub fn summarize(records: &[IdeaRecord]) -> DashboardSummary {
    let (first, last) = match records {
        [] => {
            return DashboardSummary {
                total_ideas: 0,
                first_average: None,
                last_average: None,
                improvement: None,
                trends: Vec::new(),
                blind_spots: Vec::new(),
                message: "No ideas have been analysed yet.".to_string(),
            };
        }
        [only] => {
            let avg = average_score(only.scores());
            return DashboardSummary {
                total_ideas: 1,
                first_average: Some(avg),
                last_average: None,
                improvement: None,
                trends: Vec::new(),
                blind_spots: Vec::new(),
                message: format!(
                    "First idea analysed. Overall score: {avg:.1}/100. \
                     Submit more ideas to track progress."
                ),
            };
        }
        [first, .., last] => (first, last),
    };

    let first_avg = average_score(first.scores());
    let last_avg = average_score(last.scores());
    let improvement = last_avg - first_avg;
    let spots = blind_spots(last.scores());

    let mut message = format!(
        "{} ideas analysed. Overall score went from {first_avg:.1}/100 to {last_avg:.1}/100. ",
        records.len()
    );
    if improvement > 0.0 {
        message.push_str(&format!("Improvement: +{improvement:.1} points. "));
    } else if improvement < 0.0 {
        message.push_str(&format!("Attention: down {:.1} points. ", improvement.abs()));
    } else {
        message.push_str("Scores unchanged. ");
    }
    if spots.is_empty() {
        message.push_str("All dimensions are at an adequate level (score >= 40).");
    } else {
        message.push_str(&format!(
            "{} dimension(s) have room to grow (score < 40).",
            spots.len()
        ));
    }

    DashboardSummary {
        total_ideas: records.len(),
        first_average: Some(first_avg),
        last_average: Some(last_avg),
        improvement: Some(improvement),
        trends: score_trend(first.scores(), last.scores()),
        blind_spots: spots,
        message,
    }
}
