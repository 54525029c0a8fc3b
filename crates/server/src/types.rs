use serde::{Deserialize, Serialize};

// Missing fields default to the empty string, which every flow treats as "no match".

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SearchMedicineRequest {
    pub query: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SearchByFilenameRequest {
    pub filename: String,
}

/// The body returned by every JSON endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub response: String,
}
