//! Idea analysis: keyword-weighted heuristic scoring, LLM-backed scoring and
//! Lean Canvas generation, and the orchestrator that falls back from one to
//! the other.

pub mod analyzer;
pub mod client;
pub mod config;
mod error;
pub mod heuristic;
pub mod lexicon;
pub mod orchestrator;
pub mod prompts;
pub mod reply;
pub mod scorer;

pub use analyzer::AiAnalyzer;
pub use client::{CompletionClient, CompletionRequest, HttpCompletionClient};
pub use config::AiConfig;
pub use error::{AiError, RequestError};
pub use orchestrator::AnalysisOrchestrator;
pub use scorer::{score_answer, ScoreOptions};
