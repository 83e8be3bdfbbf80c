use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::interface::{AgentRequest, ChatAgent, NO_REPLY_FALLBACK};
use crate::utils::response_fields::reply_text;

/// AI responder client that POSTs `{ message, lang }` to a fixed URL
#[derive(Debug, Clone)]
pub struct HttpChatAgent {
    client: Client,
    url: String,
}

impl HttpChatAgent {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ChatAgent for HttpChatAgent {
    async fn chat(&self, request: &AgentRequest) -> Result<String, anyhow::Error> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        match reply_text(&body) {
            Some(reply) => Ok(reply),
            None => {
                debug!("AI response had no reply field: {}", body);
                Ok(NO_REPLY_FALLBACK.to_string())
            }
        }
    }
}
