//! Configuration loading.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use ccparse_core::ParserConfig;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "CCPARSE_CONFIG";

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ccparse")
        .join("config.json")
}

/// Load `$CCPARSE_CONFIG`, else the default config file if present, else
/// built-in defaults.
pub fn load() -> anyhow::Result<ParserConfig> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(path);
        debug!("Loading configuration from {}", path.display());
        return ParserConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        return ParserConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }

    Ok(ParserConfig::default())
}
