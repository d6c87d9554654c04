use serde::{Deserialize, Serialize};

/// Nine-field Lean Canvas summary of an idea. All fields are plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeanCanvas {
    pub problem: String,
    pub solution: String,
    pub unique_value_prop: String,
    pub customer_segments: String,
    pub channels: String,
    pub revenue_streams: String,
    pub cost_structure: String,
    pub key_metrics: String,
    pub unfair_advantage: String,
}

impl LeanCanvas {
    /// JSON keys of the canvas fields, in display order.
    pub const KEYS: [&'static str; 9] = [
        "problem",
        "solution",
        "uniqueValueProp",
        "customerSegments",
        "channels",
        "revenueStreams",
        "costStructure",
        "keyMetrics",
        "unfairAdvantage",
    ];

    /// `(label, text)` pairs in display order.
    pub fn sections(&self) -> [(&'static str, &str); 9] {
        [
            ("Problem", self.problem.as_str()),
            ("Solution", self.solution.as_str()),
            ("Unique Value Proposition", self.unique_value_prop.as_str()),
            ("Customer Segments", self.customer_segments.as_str()),
            ("Channels", self.channels.as_str()),
            ("Revenue Streams", self.revenue_streams.as_str()),
            ("Cost Structure", self.cost_structure.as_str()),
            ("Key Metrics", self.key_metrics.as_str()),
            ("Unfair Advantage", self.unfair_advantage.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_serialized_names() {
        let json = serde_json::to_value(LeanCanvas::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), LeanCanvas::KEYS.len());
        for key in LeanCanvas::KEYS {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }
}
