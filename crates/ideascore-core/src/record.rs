//! Analysis results and persisted idea records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answers::Answers;
use crate::canvas::LeanCanvas;
use crate::scores::ScoreVector;

/// Provenance of an analysis: the AI path or the heuristic fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Ai,
    #[default]
    Heuristic,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Heuristic => "heuristic",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores and canvas produced together for one submission.
///
/// Both halves always come from the same [`Source`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scores: ScoreVector,
    pub lean_canvas: LeanCanvas,
    pub source: Source,
}

/// A submission ready to be stored: founder metadata plus its analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    pub founder_name: Option<String>,
    pub idea_title: Option<String>,
    pub answers: Answers,
    pub scores: ScoreVector,
    pub lean_canvas: LeanCanvas,
    pub analysis_source: Source,
}

impl NewIdea {
    /// Split an analysis into the stored payload and the record-level source marker.
    pub fn from_analysis(
        founder_name: Option<String>,
        idea_title: Option<String>,
        answers: Answers,
        analysis: AnalysisResult,
    ) -> Self {
        let AnalysisResult {
            scores,
            lean_canvas,
            source,
        } = analysis;
        Self {
            founder_name,
            idea_title,
            answers,
            scores,
            lean_canvas,
            analysis_source: source,
        }
    }
}

/// A stored idea as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub idea: NewIdea,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdeaRecord {
    pub fn new(idea: NewIdea, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            idea,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn scores(&self) -> &ScoreVector {
        &self.idea.scores
    }

    /// Title for display, falling back to the id.
    pub fn title(&self) -> String {
        match self.idea.idea_title.as_deref() {
            Some(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => self.id.to_string(),
        }
    }
}
