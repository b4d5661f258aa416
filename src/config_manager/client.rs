use serde::{Deserialize, Serialize};

use crate::translation::client::join_url;

/// Where and how to reach the translation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub translate_path: String,
    /// Unset means no timeout
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_translate_path() -> String {
    "/api/translate/auto".to_string()
}

impl ClientConfig {
    pub fn endpoint(&self) -> String {
        join_url(&self.base_url, &self.translate_path)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("client.base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "client.base_url must be an http(s) URL, got {}",
                self.base_url
            ));
        }
        if self.timeout_secs == Some(0) {
            return Err("client.timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            translate_path: default_translate_path(),
            timeout_secs: None,
        }
    }
}
