use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::types::{ChatReply, ChatRequest};
use crate::agent::{AgentRequest, ChatAgent, HttpChatAgent, PIVOT_LANG};
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::translate::{HttpTranslator, TranslateRequest, Translator};

/// Relays chat messages to the AI responder, translating through English
/// when a translator is configured and the caller is not writing English.
pub struct ChatRelay {
    agent: Option<Arc<dyn ChatAgent>>,
    translator: Option<Arc<dyn Translator>>,
}

impl ChatRelay {
    pub fn new(agent: Option<Arc<dyn ChatAgent>>, translator: Option<Arc<dyn Translator>>) -> Self {
        Self { agent, translator }
    }

    /// Build HTTP-backed upstreams sharing one client with the configured timeout.
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        let agent = config.ai_endpoint().map(|url| {
            info!("AI responder: {}", url);
            Arc::new(HttpChatAgent::new(client.clone(), url.to_string())) as Arc<dyn ChatAgent>
        });
        let translator = config.translate_endpoint().map(|url| {
            info!("Translator: {}", url);
            Arc::new(HttpTranslator::new(client.clone(), url.to_string())) as Arc<dyn Translator>
        });

        if agent.is_none() {
            warn!("AI_API is not configured; chat requests will fail until it is set");
        }
        if translator.is_none() {
            info!("TRANSLATE_API is not configured; replies are relayed untranslated");
        }

        Ok(Self::new(agent, translator))
    }

    pub fn ai_configured(&self) -> bool {
        self.agent.is_some()
    }

    pub fn translator_configured(&self) -> bool {
        self.translator.is_some()
    }

    /// Relay one chat message and return exactly one reply.
    ///
    /// Only a missing AI endpoint, a blank message, or a failed AI call
    /// produce an error. Translation failures fall back to untranslated text.
    pub async fn handle_chat(&self, request: ChatRequest) -> Result<ChatReply, RelayError> {
        let agent = self.agent.as_ref().ok_or(RelayError::Configuration)?;

        if request.message.trim().is_empty() {
            return Err(RelayError::InvalidRequest("message is required".to_string()));
        }

        let lang = request.resolved_lang();
        let translator = self.translator.as_deref().filter(|_| lang != PIVOT_LANG);

        let text_for_ai = match translator {
            Some(translator) => {
                translate_or_keep(translator, &request.message, &lang, PIVOT_LANG).await
            }
            None => request.message,
        };

        let reply = agent
            .chat(&AgentRequest::new(text_for_ai))
            .await
            .map_err(|e| RelayError::UpstreamUnavailable(format!("{:#}", e)))?;
        debug!("AI replied with {} chars", reply.chars().count());

        let reply = match translator {
            Some(translator) => translate_or_keep(translator, &reply, PIVOT_LANG, &lang).await,
            None => reply,
        };

        Ok(ChatReply { reply })
    }
}

async fn translate_or_keep(
    translator: &dyn Translator,
    text: &str,
    source_lang: &str,
    target_lang: &str,
) -> String {
    let request = TranslateRequest::new(text, source_lang, target_lang);
    match translator.translate(&request).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!(
                "Translation {} -> {} failed, continuing untranslated: {:#}",
                source_lang, target_lang, e
            );
            text.to_string()
        }
    }
}
