use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config_manager::client::ClientConfig;
use crate::config_manager::view::ViewConfig;

/// Main configuration for the console
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub view: ViewConfig,
}

impl Config {
    /// Load configuration from `path` with `POLYGLOT__*` environment overrides
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use crate::config_manager::utils::build_config;
        build_config(Some(path.as_ref()), true)
    }

    /// Probe the usual locations, falling back to defaults plus environment
    pub fn discover() -> anyhow::Result<(Self, Option<String>)> {
        use crate::config_manager::utils::{build_config, candidate_paths};

        for path in candidate_paths() {
            if !path.exists() {
                continue;
            }
            match build_config(Some(&path), true) {
                Ok(config) => return Ok((config, Some(path.display().to_string()))),
                Err(e) => {
                    tracing::debug!("Failed to load config from {}: {}", path.display(), e);
                    continue;
                }
            }
        }

        Ok((build_config(None, false)?, None))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.client.validate().map_err(anyhow::Error::msg)?;
        self.view.validate().map_err(anyhow::Error::msg)?;
        Ok(())
    }
}
