pub mod answers;
pub mod canvas;
pub mod dashboard;
pub mod record;
pub mod scores;

pub use answers::Answers;
pub use canvas::LeanCanvas;
pub use dashboard::{
    BlindSpot, DashboardSummary, DimensionTrend, Insight, InsightKind, BLIND_SPOT_THRESHOLD,
    STRENGTH_THRESHOLD,
};
pub use record::{AnalysisResult, IdeaRecord, NewIdea, Source};
pub use scores::{clamp_score, Dimension, ScoreVector};
