use anyhow::Result;
use arogya::errors::PromptError;
use arogya::providers::ai::AiProvider;
use arogya::{HealthRecord, MedicineRecord};
use async_trait::async_trait;
use std::fmt::Debug;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

// --- Mock AI Provider ---

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    response: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    /// A provider that answers every prompt with `response`.
    pub fn new(response: &str) -> Self {
        Self {
            response: Arc::new(Mutex::new(Some(response.to_string()))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose every call fails with an API error.
    pub fn failing() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, PromptError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        self.response.lock().unwrap().clone().ok_or_else(|| {
            PromptError::AiApi("MockAiProvider: quota exceeded".to_string())
        })
    }
}

// --- Fixtures ---

pub fn health_record(keyword: &str, disease_name: &str) -> HealthRecord {
    HealthRecord {
        keyword: keyword.to_string(),
        disease_name: disease_name.to_string(),
        symptoms: format!("{disease_name} symptoms"),
        solution: format!("{disease_name} solution"),
        medicine_recommendation: format!("{disease_name} medicine"),
        disclaimer: "डॉक्टर से सलाह लें".to_string(),
    }
}

pub fn medicine_record(medicine_name: &str, uses: &str) -> MedicineRecord {
    MedicineRecord {
        medicine_name: medicine_name.to_string(),
        uses: uses.to_string(),
        side_effects: "nausea".to_string(),
        disclaimer: "Consult a doctor.".to_string(),
    }
}

/// Writes `content` to a temporary `.csv` file that lives as long as the handle.
pub fn write_csv(content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
