use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::interface::{TranslateRequest, Translator};
use crate::utils::response_fields::translated_text;

/// Body sent to the translator. Text goes out under both `q` and `text`
/// since deployed translators disagree on the name.
#[derive(Debug, Serialize)]
struct TranslatePayload<'a> {
    q: &'a str,
    text: &'a str,
    source: &'a str,
    target: &'a str,
}

impl<'a> From<&'a TranslateRequest> for TranslatePayload<'a> {
    fn from(request: &'a TranslateRequest) -> Self {
        Self {
            q: &request.text,
            text: &request.text,
            source: &request.source_lang,
            target: &request.target_lang,
        }
    }
}

/// Translator reached over HTTP POST.
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: Client,
    url: String,
}

impl HttpTranslator {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, request: &TranslateRequest) -> Result<String> {
        debug!(
            "Translating {} chars {} -> {}",
            request.text.chars().count(),
            request.source_lang,
            request.target_lang
        );

        let response = self
            .client
            .post(&self.url)
            .json(&TranslatePayload::from(request))
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        translated_text(&body).ok_or_else(|| anyhow::anyhow!("translator returned an empty body"))
    }
}
