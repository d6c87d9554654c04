//! AI configuration, built once at startup and passed in explicitly.

use std::time::Duration;

pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the external completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    /// Feature flag; only an explicit `false` disables AI.
    pub enabled: bool,
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
    /// Per-request bound for each completion call.
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: None,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AiConfig {
    /// True iff the flag is on and both endpoint and credential are set.
    pub fn is_available(&self) -> bool {
        self.unavailable_reason().is_none()
    }

    /// Why the AI path cannot be used, if it cannot.
    pub fn unavailable_reason(&self) -> Option<&'static str> {
        if !self.enabled {
            Some("AI is disabled by configuration")
        } else if self.endpoint().is_none() {
            Some("completion endpoint is not configured")
        } else if self.credential().is_none() {
            Some("API key is not configured")
        } else {
            None
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        non_blank(self.api_url.as_deref())
    }

    pub fn credential(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }

    /// API key with everything after the first ten characters hidden.
    pub fn masked_key(&self) -> Option<String> {
        self.credential().map(|key| {
            let head: String = key.chars().take(10).collect();
            format!("{head}...")
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Interpret the raw feature-flag value: anything but `false` enables AI.
pub fn flag_enabled(raw: &str) -> bool {
    raw.trim() != "false"
}

/// What a model supports on the completion API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelCapabilities {
    /// Accepts `response_format: {"type": "json_object"}`.
    pub structured_output: bool,
}

const JSON_MODE: ModelCapabilities = ModelCapabilities {
    structured_output: true,
};
const PLAIN: ModelCapabilities = ModelCapabilities {
    structured_output: false,
};

/// Known models. Anything not listed gets no structured-output hint.
const MODEL_CAPABILITIES: &[(&str, ModelCapabilities)] = &[
    ("llama3-70b-8192", JSON_MODE),
    ("llama3-8b-8192", JSON_MODE),
    ("llama-3.1-8b-instant", JSON_MODE),
    ("llama-3.3-70b-versatile", JSON_MODE),
    ("gpt-4o", JSON_MODE),
    ("gpt-4o-mini", JSON_MODE),
    ("gpt-4-turbo", JSON_MODE),
    ("gpt-3.5-turbo", JSON_MODE),
    ("mixtral-8x7b-32768", PLAIN),
    ("gemma2-9b-it", PLAIN),
];

/// Look up a model's capabilities by exact identifier.
pub fn capabilities(model: &str) -> ModelCapabilities {
    MODEL_CAPABILITIES
        .iter()
        .find(|(id, _)| *id == model)
        .map(|&(_, caps)| caps)
        .unwrap_or_default()
}
