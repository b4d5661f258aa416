use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use super::client::HttpTranslationClient;
use super::interface::TranslationService;
use crate::config_manager::client::ClientConfig;

/// Factory for translation service handles
pub struct TranslationServiceFactory;

impl TranslationServiceFactory {
    /// Create the HTTP-backed service described by `client_config`
    pub fn create(client_config: &ClientConfig) -> Result<Arc<dyn TranslationService>> {
        let client = match client_config.timeout_secs {
            Some(secs) => HttpTranslationClient::with_timeout(
                client_config.base_url.clone(),
                client_config.translate_path.clone(),
                Duration::from_secs(secs),
            )?,
            None => HttpTranslationClient::new(
                client_config.base_url.clone(),
                client_config.translate_path.clone(),
            ),
        };

        info!("Translation endpoint: {}", client.endpoint());
        Ok(Arc::new(client))
    }
}
