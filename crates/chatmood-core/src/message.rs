use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One chat message in normalized form.
///
/// Converters from source-specific export formats all produce this shape;
/// the scorers only ever see `text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub text: String,
}

impl Message {
    /// A bare message with no sender or timestamp, as read from plain text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Message {
        Message {
            sender: String::new(),
            timestamp: None,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let message: Message = serde_json::from_str(r#"{"text":"hello there"}"#).unwrap();
        assert_eq!(message.text, "hello there");
        assert_eq!(message.sender, "");
        assert!(message.timestamp.is_none());
    }

    #[test]
    fn deserializes_rfc3339_timestamp() {
        let message: Message = serde_json::from_str(
            r#"{"sender":"ana","timestamp":"2024-05-01T10:30:00Z","text":"hi"}"#,
        )
        .unwrap();
        let timestamp = message.timestamp.unwrap();
        assert_eq!(timestamp.to_rfc3339(), "2024-05-01T10:30:00+00:00");
    }

    #[test]
    fn serializing_skips_absent_timestamp() {
        let json = serde_json::to_string(&Message::from_text("yo")).unwrap();
        assert!(!json.contains("timestamp"));
    }
}
