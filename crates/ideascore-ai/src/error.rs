use thiserror::Error;

/// Failure of the AI analysis path. Never surfaced past the orchestrator.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI is not available: {0}")]
    Unavailable(&'static str),

    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Failure talking to the completion service or reading its reply.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI API returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("invalid API response structure: {0}")]
    InvalidResponse(String),

    #[error("empty response from AI")]
    EmptyContent,

    #[error("failed to parse JSON reply: {0}")]
    Parse(String),

    #[error("reply has none of the expected fields")]
    MissingFields,
}

impl RequestError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
