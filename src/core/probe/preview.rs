//! One-line body previews
//!
//! Explicit tagged variant over the three body shapes the transcript
//! distinguishes: a mapping with a human-readable message, a sequence, or
//! anything else rendered as a truncated text preview.

use serde_json::Value;

/// Maximum number of characters in an opaque preview
const PREVIEW_MAX_CHARS: usize = 100;

/// Short rendering of a probe response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPreview {
    /// Mapping-shaped body with a string `message` field
    Message(String),
    /// Sequence-shaped body; carries the element count
    Items(usize),
    /// Anything else, truncated
    Opaque(String),
}

impl BodyPreview {
    /// Classify a parsed body into its preview shape
    pub fn from_value(value: &Value) -> Self {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return BodyPreview::Message(message.to_string());
        }
        if let Some(items) = value.as_array() {
            return BodyPreview::Items(items.len());
        }

        let rendered = match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        BodyPreview::Opaque(truncate_chars(&rendered, PREVIEW_MAX_CHARS))
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut truncated: String = text.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}
