//! # Chat Prompts
//!
//! The templates used to ask the AI provider a health question, with or without a matched
//! record from the health table.
//!
//! Placeholders: `{context}`, `{question}`.

use crate::types::HealthRecord;

/// Used when the health table produced a match.
pub const CHAT_WITH_CONTEXT_PROMPT: &str = "Context: {context}\n\nUser's Question: {question}\n\nBased on the context, answer the user's question in a helpful, conversational manner in pure Hindi (Devanagari script). Always advise consulting a doctor.";

/// Used when nothing in the health table matched.
pub const CHAT_WITHOUT_CONTEXT_PROMPT: &str = "User's Question: {question}\n\nAnswer the user's health question in a helpful, conversational manner in pure Hindi (Devanagari script). Since you have no specific context, state that this is general information and strongly advise consulting a doctor.";

/// Renders a matched record as the single context line embedded in the prompt.
pub fn format_health_context(record: &HealthRecord) -> String {
    format!(
        "बीमारी: {}, लक्षण: {}, उपचार: {}, दवा सुझाव: {}, डिस्क्लेमर: {}",
        record.disease_name,
        record.symptoms,
        record.solution,
        record.medicine_recommendation,
        record.disclaimer
    )
}

/// Builds the chat prompt, picking the template by whether a record matched.
pub fn build_chat_prompt(record: Option<&HealthRecord>, question: &str) -> String {
    match record {
        Some(record) => CHAT_WITH_CONTEXT_PROMPT
            .replace("{context}", &format_health_context(record))
            .replace("{question}", question),
        None => CHAT_WITHOUT_CONTEXT_PROMPT.replace("{question}", question),
    }
}
