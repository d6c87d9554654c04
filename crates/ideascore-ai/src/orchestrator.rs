//! AI-first analysis with a transparent heuristic fallback.
//!
//! Per request: if an [`AiAnalyzer`] is configured, scores and canvas are
//! requested concurrently and both must succeed. Any failure (missing
//! configuration, transport, timeout, malformed reply) drops the whole AI
//! result and recomputes both halves heuristically, so a result never mixes
//! provenance.

use ideascore_core::{AnalysisResult, Answers, Source};
use tracing::{info, warn};

use crate::analyzer::AiAnalyzer;
use crate::config::AiConfig;
use crate::{heuristic, AiError};

/// Produces an [`AnalysisResult`] for every request; never fails.
pub struct AnalysisOrchestrator {
    ai: Option<AiAnalyzer>,
}

impl AnalysisOrchestrator {
    /// Build from configuration. An unavailable or unbuildable AI client
    /// leaves the orchestrator in heuristic-only mode.
    pub fn new(config: &AiConfig) -> Self {
        match AiAnalyzer::from_config(config) {
            Ok(ai) => {
                info!(model = %config.model, "AI analysis enabled");
                Self { ai: Some(ai) }
            }
            Err(e) => {
                warn!(reason = %e, "AI analysis unavailable, using heuristic methods");
                Self { ai: None }
            }
        }
    }

    pub fn with_analyzer(ai: AiAnalyzer) -> Self {
        Self { ai: Some(ai) }
    }

    pub fn heuristic_only() -> Self {
        Self { ai: None }
    }

    /// Whether requests will attempt the AI path first.
    pub fn ai_enabled(&self) -> bool {
        self.ai.is_some()
    }

    pub async fn analyze(&self, answers: &Answers) -> AnalysisResult {
        let Some(ai) = &self.ai else {
            return Self::heuristic(answers);
        };

        info!(model = ai.model(), "attempting AI analysis");
        match Self::try_ai(ai, answers).await {
            Ok(result) => {
                info!("AI analysis completed");
                result
            }
            Err(e) => {
                let timeout = matches!(&e, AiError::Request(r) if r.is_timeout());
                warn!(error = %e, timeout, "AI analysis failed, falling back to heuristic methods");
                Self::heuristic(answers)
            }
        }
    }

    /// Both calls run to completion; a failure in either discards the other.
    async fn try_ai(ai: &AiAnalyzer, answers: &Answers) -> Result<AnalysisResult, AiError> {
        let (scores, canvas) = tokio::join!(ai.generate_scores(answers), ai.generate_canvas(answers));
        Ok(AnalysisResult {
            scores: scores?,
            lean_canvas: canvas?,
            source: Source::Ai,
        })
    }

    fn heuristic(answers: &Answers) -> AnalysisResult {
        AnalysisResult {
            scores: heuristic::compute_scores(answers),
            lean_canvas: heuristic::build_canvas(answers),
            source: Source::Heuristic,
        }
    }
}
