//! LLM-backed scoring and Lean Canvas generation.

use std::sync::Arc;

use ideascore_core::{Answers, LeanCanvas, ScoreVector};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::client::{
    ChatMessage, CompletionClient, CompletionRequest, HttpCompletionClient, ResponseFormat,
};
use crate::config::{self, AiConfig};
use crate::{prompts, reply, AiError};

const TEMPERATURE: f32 = 0.7;

/// The two generation tasks sent to the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Scores,
    Canvas,
}

impl Task {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scores => "scores",
            Self::Canvas => "canvas",
        }
    }

    fn system_prompt(&self) -> &'static str {
        match self {
            Self::Scores => prompts::SCORES_SYSTEM_PROMPT,
            Self::Canvas => prompts::CANVAS_SYSTEM_PROMPT,
        }
    }

    fn user_prompt(&self, answers: &Answers) -> String {
        match self {
            Self::Scores => prompts::build_scores_prompt(answers),
            Self::Canvas => prompts::build_canvas_prompt(answers),
        }
    }

    fn max_tokens(&self) -> u32 {
        match self {
            Self::Scores => 1500,
            Self::Canvas => 2000,
        }
    }
}

/// Generates scores and canvases through a [`CompletionClient`].
pub struct AiAnalyzer {
    client: Arc<dyn CompletionClient>,
    model: String,
}

impl AiAnalyzer {
    pub fn new(client: Arc<dyn CompletionClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build an analyzer backed by the HTTP client described in `config`.
    ///
    /// Fails with [`AiError::Unavailable`] unless the flag is on and both
    /// endpoint and key are set.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if let Some(reason) = config.unavailable_reason() {
            return Err(AiError::Unavailable(reason));
        }
        let (Some(url), Some(key)) = (config.endpoint(), config.credential()) else {
            return Err(AiError::Unavailable("AI configuration is incomplete"));
        };
        let client = HttpCompletionClient::new(url, key, config.timeout)?;
        Ok(Self::new(Arc::new(client), config.model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the model for the six dimension scores.
    pub async fn generate_scores(&self, answers: &Answers) -> Result<ScoreVector, AiError> {
        let map = self.run(Task::Scores, answers).await?;
        Ok(reply::scores_from_reply(&map)?)
    }

    /// Ask the model for a nine-field Lean Canvas.
    pub async fn generate_canvas(&self, answers: &Answers) -> Result<LeanCanvas, AiError> {
        let map = self.run(Task::Canvas, answers).await?;
        Ok(reply::canvas_from_reply(&map)?)
    }

    /// Request body for a task. The structured-output hint comes from the
    /// capability table.
    pub fn build_request(&self, task: Task, answers: &Answers) -> CompletionRequest {
        let caps = config::capabilities(&self.model);
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(task.system_prompt()),
                ChatMessage::user(task.user_prompt(answers)),
            ],
            temperature: TEMPERATURE,
            max_tokens: task.max_tokens(),
            response_format: caps.structured_output.then(ResponseFormat::json_object),
        }
    }

    async fn run(&self, task: Task, answers: &Answers) -> Result<Map<String, Value>, AiError> {
        let request = self.build_request(task, answers);
        info!(task = task.as_str(), model = %self.model, "requesting AI completion");
        let content = self.client.complete(&request).await?;
        debug!(task = task.as_str(), chars = content.len(), "received AI completion");
        Ok(reply::parse_reply(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a fixed reply and records every request it sees.
    struct Recorder {
        reply: String,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl Recorder {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for Recorder {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, RequestError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }
    }

    fn answers() -> Answers {
        Answers {
            problem: Some("Invoices are paid late".into()),
            ..Default::default()
        }
    }

    #[test]
    fn from_config_requires_availability() {
        let err = AiAnalyzer::from_config(&AiConfig::default()).err().unwrap();
        assert!(matches!(err, AiError::Unavailable(_)));

        let config = AiConfig {
            api_url: Some("http://127.0.0.1:9/v1/chat/completions".into()),
            api_key: Some("key".into()),
            model: "gpt-4o".into(),
            ..Default::default()
        };
        let analyzer = AiAnalyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.model(), "gpt-4o");
    }

    #[test]
    fn request_shape_follows_task() {
        let analyzer = AiAnalyzer::new(Recorder::new("{}"), "llama3-70b-8192");

        let scores = analyzer.build_request(Task::Scores, &answers());
        assert_eq!(scores.max_tokens, 1500);
        assert_eq!(scores.messages[0].role, "system");
        assert_eq!(scores.messages[0].content, prompts::SCORES_SYSTEM_PROMPT);
        assert!(scores.messages[1].content.contains("- Problem: Invoices are paid late"));
        assert_eq!(scores.response_format, Some(ResponseFormat::json_object()));

        let canvas = analyzer.build_request(Task::Canvas, &answers());
        assert_eq!(canvas.max_tokens, 2000);
        assert_eq!(canvas.messages[0].content, prompts::CANVAS_SYSTEM_PROMPT);
    }

    #[test]
    fn unknown_model_gets_no_structured_hint() {
        let analyzer = AiAnalyzer::new(Recorder::new("{}"), "mixtral-8x7b-32768");
        assert!(analyzer.build_request(Task::Scores, &answers()).response_format.is_none());
    }

    #[tokio::test]
    async fn generate_scores_normalizes_reply() {
        let client = Recorder::new(
            r#"Here you go: {"problemValidation": 81.7, "marketMaturity": 64,
               "competition": "n/a", "differentiation": 120, "techFeasibility": 55,
               "riskUncertainty": 40}"#,
        );
        let analyzer = AiAnalyzer::new(client.clone(), "gpt-4o");
        let scores = analyzer.generate_scores(&answers()).await.unwrap();

        assert_eq!(scores.problem_validation, 82.0);
        assert_eq!(scores.competition, 0.0);
        assert_eq!(scores.differentiation, 100.0);
        assert_eq!(scores.risk_uncertainty, 40.0);
        assert_eq!(client.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn generate_canvas_reads_fields() {
        let client = Recorder::new(r#"{"problem": "Late invoices", "channels": "Accountants"}"#);
        let analyzer = AiAnalyzer::new(client, "gpt-4o");
        let canvas = analyzer.generate_canvas(&answers()).await.unwrap();
        assert_eq!(canvas.problem, "Late invoices");
        assert_eq!(canvas.channels, "Accountants");
        assert_eq!(canvas.key_metrics, "");
    }

    #[tokio::test]
    async fn malformed_reply_is_a_request_error() {
        let analyzer = AiAnalyzer::new(Recorder::new("no json here"), "gpt-4o");
        let err = analyzer.generate_scores(&answers()).await.unwrap_err();
        assert!(matches!(err, AiError::Request(RequestError::Parse(_))));
    }
}
