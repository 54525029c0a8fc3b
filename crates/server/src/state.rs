//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic for
//! building it at startup: loading the knowledge tables and deciding whether an AI
//! provider can be configured.

use crate::config::{AppConfig, GenerationConfig};
use arogya::{
    providers::ai::{
        gemini::{gemini_api_url, GeminiProvider},
        local::LocalAiProvider,
        AiProvider,
    },
    Assistant, Dataset, GenerationClient, PromptError,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The read-only tables and the generation client.
    pub assistant: Arc<Assistant>,
}

impl AppState {
    /// Builds a state around an already constructed assistant.
    pub fn new(config: AppConfig, assistant: Assistant) -> Self {
        Self {
            config: Arc::new(config),
            assistant: Arc::new(assistant),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// A missing dataset file or a missing credential degrades the service instead of
/// aborting startup. A dataset that exists but cannot be parsed is an error.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let dataset = Dataset::load(&config.health_data_path, &config.medicine_data_path)?;
    info!(
        health_rows = dataset.health().len(),
        medicine_rows = dataset.medicines().len(),
        "Knowledge tables ready."
    );

    let generation = build_generation_client(&config.generation);
    Ok(AppState::new(config, Assistant::new(dataset, generation)))
}

/// Instantiates the configured AI provider, or records why none is available.
pub fn build_generation_client(config: &GenerationConfig) -> GenerationClient {
    match create_provider(config) {
        Ok(Some(provider)) => GenerationClient::configured(provider),
        Ok(None) => {
            let reason = match config.provider.as_str() {
                "gemini" => "GEMINI_API_KEY not found; chat will answer with a fixed message.",
                "local" => "generation.api_url is required for the local provider.",
                _ => "unsupported AI provider type.",
            };
            warn!(provider = %config.provider, "{reason}");
            GenerationClient::unconfigured(reason)
        }
        Err(e) => {
            error!("AI provider configuration error: {e}");
            GenerationClient::unconfigured(e.to_string())
        }
    }
}

fn create_provider(config: &GenerationConfig) -> Result<Option<Box<dyn AiProvider>>, PromptError> {
    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let Some(api_key) = config.api_key.clone().filter(|k| !k.is_empty()) else {
                return Ok(None);
            };
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| gemini_api_url(&config.model_name));
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        "local" => {
            let Some(api_url) = config.api_url.clone() else {
                return Ok(None);
            };
            Box::new(LocalAiProvider::new(
                api_url,
                config.api_key.clone(),
                Some(config.model_name.clone()),
            )?)
        }
        _ => return Ok(None),
    };
    Ok(Some(provider))
}
