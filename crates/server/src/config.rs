//! # Application Configuration
//!
//! This module defines the configuration structure for the `arogya-server` and the logic
//! for loading it from an optional `config.yml` file and environment variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    pub port: u16,
    /// CSV file with the health knowledge table. Loaded from `HEALTH_DATA_PATH`.
    pub health_data_path: String,
    /// CSV file with the medicine table. Loaded from `MEDICINE_DATA_PATH`.
    pub medicine_data_path: String,
    /// Directory holding the pre-built HTML pages.
    pub pages_dir: String,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// The AI provider used by the chat endpoint.
    pub generation: GenerationConfig,
}

/// Settings for the text-generation provider.
#[derive(Deserialize, Clone)]
pub struct GenerationConfig {
    /// The type of provider ("gemini" or "local").
    pub provider: String,
    /// The API URL. Derived from `model_name` for Gemini when unset.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The credential. Falls back to `GEMINI_API_KEY` when unset.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model_name: String,
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("provider", &self.provider)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// Helper to read a file and substitute `${VAR}` placeholders from the environment.
/// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration.
///
/// Layers, lowest precedence first:
/// 1. Built-in defaults.
/// 2. The YAML file at `config_path_override`, or `config.yml` in the working directory
///    if present. An explicit override path that does not exist is an error.
/// 3. Environment variables for top-level keys (`PORT`, `HEALTH_DATA_PATH`, ...).
/// 4. `AROGYA_`-prefixed variables for nested keys (e.g. `AROGYA_GENERATION__API_URL`).
///
/// If no API key was set by any layer, `GEMINI_API_KEY` is used.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        .set_default("port", 5000)?
        .set_default("health_data_path", "health_data_hindi.csv")?
        .set_default("medicine_data_path", "medicines_data.csv")?
        .set_default("pages_dir", "templates")?
        .set_default("static_dir", "static")?
        .set_default("generation.provider", "gemini")?
        .set_default("generation.model_name", "gemini-1.5-flash")?;

    let config_path = config_path_override.unwrap_or("config.yml");
    match read_and_substitute(config_path)? {
        Some(content) => {
            info!("Loading configuration from '{config_path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None if config_path_override.is_some() => {
            return Err(ConfigError::NotFound(format!(
                "Config file not found at '{config_path}'."
            )));
        }
        None => info!("No '{config_path}' found, using defaults and environment."),
    }

    let settings = builder
        .add_source(Environment::default().try_parsing(true))
        .add_source(
            Environment::with_prefix("AROGYA")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    let has_key = config
        .generation
        .api_key
        .as_deref()
        .is_some_and(|key| !key.is_empty());
    if !has_key {
        config.generation.api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
    }

    Ok(config)
}
