use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Environment, File};
use tracing::debug;

use crate::config_manager::main::Config;

pub const ENV_PREFIX: &str = "POLYGLOT";
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

const FILE_NAMES: [&str; 2] = ["polyglot.yaml", "config/polyglot.yaml"];

/// Layer an optional config file under `POLYGLOT__SECTION__KEY` variables.
///
/// `required` only matters when a path is given; a missing optional file
/// leaves the defaults in place.
pub fn build_config(path: Option<&Path>, required: bool) -> Result<Config> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        debug!("Reading config file {}", path.display());
        builder = builder.add_source(File::from(path).required(required));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| match path {
            Some(p) => format!("Failed to read configuration from {}", p.display()),
            None => "Failed to read configuration from environment".to_string(),
        })?;

    let config: Config = settings
        .try_deserialize()
        .context("Configuration does not match the expected layout")?;
    Ok(config)
}

/// Config file locations in lookup order: `$CONFIG_PATH`, then the working
/// directory, then next to the executable.
pub fn candidate_paths() -> Vec<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    let mut paths: Vec<PathBuf> = std::env::var(CONFIG_PATH_VAR)
        .ok()
        .map(PathBuf::from)
        .into_iter()
        .collect();

    paths.extend(FILE_NAMES.iter().map(PathBuf::from));
    if let Some(dir) = exe_dir {
        paths.extend(FILE_NAMES.iter().map(|name| dir.join(name)));
    }
    paths
}
