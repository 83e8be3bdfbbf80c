//! Agent interface - the AI responder sits behind an HTTP endpoint

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The only language the AI responder is ever addressed in.
pub const PIVOT_LANG: &str = "en";

/// Reply used when the responder answers without any usable text.
pub const NO_REPLY_FALLBACK: &str = "No reply from AI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequest {
    pub message: String,
    pub lang: String,
}

impl AgentRequest {
    /// Request tagged with the pivot language, whatever the caller spoke.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            lang: PIVOT_LANG.to_string(),
        }
    }
}

/// Interface for the AI responder
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Send one message and return the reply text.
    ///
    /// Errors are transport or status failures only; an answer without a
    /// recognised reply field yields [`NO_REPLY_FALLBACK`].
    async fn chat(&self, request: &AgentRequest) -> Result<String, anyhow::Error>;
}
