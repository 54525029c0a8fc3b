//! # Assistant
//!
//! Composes the dataset, the matcher, the prompt templates and the generation client into
//! the three request flows the server exposes. Every flow is stateless: it reads the
//! immutable tables and makes at most one outbound call.

use crate::{
    dataset::Dataset,
    generation::{Generation, GenerationClient},
    matcher::{find_health_record, find_medicine_by_name, identify_medicine_in_filename},
    prompts::{
        chat::build_chat_prompt,
        responses::{
            format_identified_medicine, format_medicine, MEDICINE_NOT_FOUND_MESSAGE,
            MEDICINE_NOT_IDENTIFIED_MESSAGE,
        },
    },
};
use tracing::{debug, info};

/// The request-handling core, built once at startup.
#[derive(Debug, Clone)]
pub struct Assistant {
    dataset: Dataset,
    generation: GenerationClient,
}

impl Assistant {
    pub fn new(dataset: Dataset, generation: GenerationClient) -> Self {
        Self {
            dataset,
            generation,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn generation(&self) -> &GenerationClient {
        &self.generation
    }

    /// Answers a health question, grounding the prompt in the first matching health record.
    pub async fn chat(&self, message: &str) -> String {
        let question = message.to_lowercase();
        let record = find_health_record(self.dataset.health(), &question);
        info!(
            matched = record.map(|r| r.disease_name.as_str()),
            "[chat] Health lookup finished."
        );

        if !self.generation.is_configured() {
            return Generation::Unconfigured.into_text();
        }

        let prompt = build_chat_prompt(record, &question);
        debug!(prompt = %prompt, "[chat] Sending prompt to generation client.");
        self.generation.generate(&prompt).await.into_text()
    }

    /// Looks a medicine up by its exact name, ignoring case.
    pub fn search_medicine(&self, query: &str) -> String {
        match find_medicine_by_name(self.dataset.medicines(), query) {
            Some(record) => format_medicine(record),
            None => {
                info!(query, "[search_medicine] No medicine matched.");
                MEDICINE_NOT_FOUND_MESSAGE.to_string()
            }
        }
    }

    /// Identifies a medicine whose name appears in an uploaded file's name.
    pub fn search_by_filename(&self, filename: &str) -> String {
        match identify_medicine_in_filename(self.dataset.medicines(), filename) {
            Some(record) => {
                info!(
                    filename,
                    medicine = %record.medicine_name,
                    "[search_by_filename] Medicine identified."
                );
                format_identified_medicine(record)
            }
            None => MEDICINE_NOT_IDENTIFIED_MESSAGE.to_string(),
        }
    }
}
