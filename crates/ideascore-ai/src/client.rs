//! Chat-completion client for OpenAI-compatible endpoints.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::RequestError;

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Structured-output hint, sent only to models that accept it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            kind: "json_object",
        }
    }
}

/// Request body for a chat-completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// A text-completion service. Returns the first choice's message content.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, RequestError>;
}

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl HttpCompletionClient {
    /// Create a client whose every request is bounded by `timeout`.
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> Result<Self, RequestError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.trim().to_string(),
            api_key: api_key.trim().to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, RequestError> {
        debug!(url = %self.url, model = %request.model, "sending completion request");
        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RequestError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        first_choice_content(&body)
    }
}

/// Pull the first choice's message content out of a response body.
pub fn first_choice_content(body: &str) -> Result<String, RequestError> {
    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|e| RequestError::InvalidResponse(e.to_string()))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RequestError::InvalidResponse("no choices in response".to_string()))?;
    let content = choice
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| RequestError::InvalidResponse("choice has no message".to_string()))?;
    if content.trim().is_empty() {
        return Err(RequestError::EmptyContent);
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_without_hint() {
        let req = CompletionRequest {
            model: "mixtral-8x7b-32768".into(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hello")],
            temperature: 0.7,
            max_tokens: 1500,
            response_format: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "mixtral-8x7b-32768");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        assert_eq!(json["max_tokens"], 1500);
        assert!(json.get("response_format").is_none());
    }

    #[test]
    fn request_serializes_json_mode_hint() {
        let req = CompletionRequest {
            model: "gpt-4o".into(),
            messages: vec![],
            temperature: 0.7,
            max_tokens: 2000,
            response_format: Some(ResponseFormat::json_object()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
    }

    #[test]
    fn first_choice_content_extracted() {
        let body = r#"{"id": "x", "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "{\"competition\": 70}"}},
            {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
        ]}"#;
        assert_eq!(first_choice_content(body).unwrap(), r#"{"competition": 70}"#);
    }

    #[test]
    fn missing_choices_is_invalid() {
        assert!(matches!(
            first_choice_content(r#"{"choices": []}"#),
            Err(RequestError::InvalidResponse(_))
        ));
        assert!(matches!(
            first_choice_content(r#"{"error": "quota"}"#),
            Err(RequestError::InvalidResponse(_))
        ));
        assert!(matches!(
            first_choice_content("<html>bad gateway</html>"),
            Err(RequestError::InvalidResponse(_))
        ));
    }

    #[test]
    fn blank_content_is_empty() {
        let body = r#"{"choices": [{"message": {"content": "  "}}]}"#;
        assert!(matches!(
            first_choice_content(body),
            Err(RequestError::EmptyContent)
        ));
    }

    #[test]
    fn client_trims_configuration() {
        let client =
            HttpCompletionClient::new(" http://localhost:9/v1 ", " key ", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.url(), "http://localhost:9/v1");
        assert_eq!(client.api_key, "key");
    }
}
