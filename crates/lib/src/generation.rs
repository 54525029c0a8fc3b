//! # Generation Client
//!
//! Wraps an optional [`AiProvider`] behind an explicit configured/unconfigured capability.
//! Failures never escape as errors here: every call resolves to a [`Generation`] that the
//! caller must match on, and [`Generation::into_text`] maps the failure cases to the fixed
//! fallback messages.

use crate::{
    prompts::responses::{GENERATION_FAILED_MESSAGE, NOT_CONFIGURED_MESSAGE},
    providers::ai::AiProvider,
};
use tracing::{error, info};

/// The outcome of a single generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// The provider answered.
    Text(String),
    /// The provider was called and failed.
    Failed { reason: String },
    /// No provider is configured; nothing was sent.
    Unconfigured,
}

impl Generation {
    /// Converts the outcome into the text returned to the user.
    pub fn into_text(self) -> String {
        match self {
            Generation::Text(text) => text,
            Generation::Failed { .. } => GENERATION_FAILED_MESSAGE.to_string(),
            Generation::Unconfigured => NOT_CONFIGURED_MESSAGE.to_string(),
        }
    }
}

/// Whether an AI provider is available for this process.
#[derive(Debug, Clone)]
pub enum GenerationClient {
    Configured(Box<dyn AiProvider>),
    Unconfigured { reason: String },
}

impl GenerationClient {
    pub fn configured(provider: Box<dyn AiProvider>) -> Self {
        info!("Generation client configured.");
        GenerationClient::Configured(provider)
    }

    pub fn unconfigured(reason: impl Into<String>) -> Self {
        GenerationClient::Unconfigured {
            reason: reason.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, GenerationClient::Configured(_))
    }

    /// Sends `prompt` to the provider, if there is one.
    pub async fn generate(&self, prompt: &str) -> Generation {
        let provider = match self {
            GenerationClient::Configured(provider) => provider,
            GenerationClient::Unconfigured { .. } => return Generation::Unconfigured,
        };

        match provider.generate(prompt).await {
            Ok(text) => Generation::Text(text),
            Err(e) => {
                error!("AI provider error: {e}");
                Generation::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
