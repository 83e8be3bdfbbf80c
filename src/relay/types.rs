use serde::{Deserialize, Serialize};

use crate::agent::PIVOT_LANG;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatRequest {
    pub fn new(message: &str, lang: Option<&str>) -> Self {
        Self {
            message: message.to_string(),
            lang: lang.map(str::to_string),
        }
    }

    /// Trimmed, lower-cased language tag; absent or blank means English.
    pub fn resolved_lang(&self) -> String {
        self.lang
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_else(|| PIVOT_LANG.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_lang_is_english() {
        assert_eq!(ChatRequest::new("hi", None).resolved_lang(), "en");
        assert_eq!(ChatRequest::new("hi", Some("")).resolved_lang(), "en");
        assert_eq!(ChatRequest::new("hi", Some("  ")).resolved_lang(), "en");
    }

    #[test]
    fn lang_is_normalised() {
        assert_eq!(ChatRequest::new("hi", Some(" TA ")).resolved_lang(), "ta");
        assert_eq!(ChatRequest::new("hi", Some("EN")).resolved_lang(), "en");
    }

    #[test]
    fn body_without_lang_deserializes() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"Hello"}"#).unwrap();
        assert_eq!(request.message, "Hello");
        assert!(request.lang.is_none());

        let request: ChatRequest =
            serde_json::from_str(r#"{"message":"Hello","lang":null}"#).unwrap();
        assert!(request.lang.is_none());
    }
}
