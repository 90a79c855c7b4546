//! Configuration for orbithub-portal.
//!
//! The API base URL is baked in at build time from `ORBITHUB_API_URL`
//! (falling back to a local development server). An optional YAML file,
//! `orbithub.config.yml`, and command-line flags override it at run time.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::adapters::outbound::network::PortalApiClient;
use crate::portal::domain::Language;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "orbithub.config.yml";

/// Base URL used when none was configured at build time
pub const FALLBACK_API_URL: &str = "http://localhost:8000";

/// API base URL selected when the binary was built
pub fn default_api_url() -> &'static str {
    option_env!("ORBITHUB_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(FALLBACK_API_URL)
}

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub language: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings after applying flags, config file and build-time defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub language: Language,
}

impl Settings {
    /// Resolves settings; a command-line value wins over the config file
    pub fn resolve(
        api_url_flag: Option<&str>,
        language_flag: Option<Language>,
        config: Option<&ConfigFile>,
    ) -> Result<Self> {
        let api_url = api_url_flag
            .map(str::to_string)
            .or_else(|| config.and_then(|c| c.api_url.clone()))
            .unwrap_or_else(|| default_api_url().to_string());

        let language = match language_flag {
            Some(language) => language,
            None => match config.and_then(|c| c.language.as_deref()) {
                Some(tag) => tag.parse()?,
                None => Language::default(),
            },
        };

        PortalApiClient::parse_base_url(&api_url)?;
        Ok(Self { api_url, language })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref api_url) = config.api_url {
        if api_url.trim().is_empty() {
            bail!(
                "Invalid config: api_url must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default ({}) or set a full URL.",
                default_api_url()
            );
        }
        PortalApiClient::parse_base_url(api_url)
            .context("Invalid config: api_url is not a valid http(s) URL")?;
    }
    if let Some(ref language) = config.language {
        language
            .parse::<Language>()
            .context("Invalid config: language must be 'en' or 'pt'")?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored.", key);
    }
}
