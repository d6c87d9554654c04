//! Validation of completion replies.
//!
//! A reply is trusted only after it parses to a JSON object carrying at
//! least one expected field. Individual score values are coerced into range
//! rather than rejected.

use ideascore_core::{clamp_score, Dimension, LeanCanvas, ScoreVector};
use serde_json::{Map, Value};

use crate::RequestError;

/// Parse reply text into a JSON object.
///
/// Tries the whole text first, then the span from the first `{` to the last
/// `}` to tolerate prose or code fences around the object.
pub fn parse_reply(content: &str) -> Result<Map<String, Value>, RequestError> {
    let value: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(direct) => {
            let block = extract_json_object(content)
                .ok_or_else(|| RequestError::Parse(direct.to_string()))?;
            serde_json::from_str(block).map_err(|e| RequestError::Parse(e.to_string()))?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(RequestError::Parse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Greedy `{ ... }` span: first opening brace to last closing brace.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Round and clamp a reply value into `[0, 100]`; non-numbers become 0.
pub fn normalize_score(value: Option<&Value>) -> f64 {
    match value.and_then(Value::as_f64) {
        Some(n) if n.is_finite() => clamp_score(n.round()),
        _ => 0.0,
    }
}

/// Read the six dimension scores from a reply object.
pub fn scores_from_reply(reply: &Map<String, Value>) -> Result<ScoreVector, RequestError> {
    if !Dimension::ALL.iter().any(|d| reply.contains_key(d.key())) {
        return Err(RequestError::MissingFields);
    }
    Ok(ScoreVector::from_fn(|d| normalize_score(reply.get(d.key()))))
}

/// Read the nine canvas fields from a reply object. Missing fields are empty.
pub fn canvas_from_reply(reply: &Map<String, Value>) -> Result<LeanCanvas, RequestError> {
    if !LeanCanvas::KEYS.iter().any(|k| reply.contains_key(*k)) {
        return Err(RequestError::MissingFields);
    }
    let text = |key: &str| canvas_text(reply.get(key));
    Ok(LeanCanvas {
        problem: text("problem"),
        solution: text("solution"),
        unique_value_prop: text("uniqueValueProp"),
        customer_segments: text("customerSegments"),
        channels: text("channels"),
        revenue_streams: text("revenueStreams"),
        cost_structure: text("costStructure"),
        key_metrics: text("keyMetrics"),
        unfair_advantage: text("unfairAdvantage"),
    })
}

/// Strings pass through, lists of points are joined one per line, scalars
/// are stringified, anything else is empty.
fn canvas_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| canvas_text(Some(item)))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
