use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::error::RequestError;
use super::interface::{TranslationRequest, TranslationResult, TranslationService};

const BODY_SNIPPET_LEN: usize = 200;

/// Translation service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpTranslationClient {
    client: Client,
    base_url: String,
    translate_path: String,
}

impl HttpTranslationClient {
    pub fn new(base_url: String, translate_path: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            translate_path,
        }
    }

    /// Client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: String,
        translate_path: String,
        timeout: Duration,
    ) -> Result<Self, RequestError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            translate_path,
        })
    }

    pub fn endpoint(&self) -> String {
        join_url(&self.base_url, &self.translate_path)
    }
}

#[async_trait]
impl TranslationService for HttpTranslationClient {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, RequestError> {
        let url = self.endpoint();
        debug!(
            "POST {} targets={:?} single={:?}",
            url, request.target_langs, request.single_language
        );

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Translation endpoint answered {}", status);
            return Err(RequestError::Status {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        let result: TranslationResult = serde_json::from_str(&body)?;
        debug!("Received {} translations", result.translations.len());
        Ok(result)
    }

    async fn health_check(&self) -> Result<bool, RequestError> {
        let url = join_url(&self.base_url, "/health");
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn snippet(body: &str) -> String {
    match body.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
