//! # Assistant Flow Tests
//!
//! Drives the three request flows through `Assistant` with in-memory tables and a
//! `MockAiProvider`, covering the retrieval-augmentation path end to end.

mod common;

use arogya::{
    prompts::responses::{
        GENERATION_FAILED_MESSAGE, MEDICINE_NOT_FOUND_MESSAGE, MEDICINE_NOT_IDENTIFIED_MESSAGE,
        NOT_CONFIGURED_MESSAGE,
    },
    Assistant, Dataset, GenerationClient,
};
use arogya_test_utils::{health_record, medicine_record, MockAiProvider};
use common::setup_tracing;

fn assistant_with(dataset: Dataset, provider: &MockAiProvider) -> Assistant {
    Assistant::new(
        dataset,
        GenerationClient::configured(Box::new(provider.clone())),
    )
}

// --- chat ---

#[tokio::test]
async fn test_chat_grounds_prompt_in_matching_record() {
    setup_tracing();
    let provider = MockAiProvider::new("आपको बुखार है, डॉक्टर से मिलें।");
    let dataset = Dataset::new(vec![health_record("fever", "बुखार")], vec![]);
    let assistant = assistant_with(dataset, &provider);

    let response = assistant.chat("I have a fever and headache").await;

    assert_eq!(response, "आपको बुखार है, डॉक्टर से मिलें।");
    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("Context: बीमारी: बुखार,"));
    assert!(calls[0].contains("User's Question: i have a fever and headache"));
}

#[tokio::test]
async fn test_chat_without_match_uses_general_template() {
    setup_tracing();
    let provider = MockAiProvider::new("सामान्य जानकारी");
    let dataset = Dataset::new(vec![health_record("fever", "बुखार")], vec![]);
    let assistant = assistant_with(dataset, &provider);

    let response = assistant.chat("knee injury").await;

    assert_eq!(response, "सामान्य जानकारी");
    let calls = provider.get_calls();
    assert!(calls[0].starts_with("User's Question: knee injury"));
    assert!(calls[0].contains("general information"));
}

#[tokio::test]
async fn test_chat_empty_message_and_empty_dataset() {
    setup_tracing();
    let provider = MockAiProvider::new("generic answer");
    let assistant = assistant_with(Dataset::empty(), &provider);

    let response = assistant.chat("").await;

    assert_eq!(response, "generic answer");
    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    assert!(!calls[0].contains("Context:"));
}

#[tokio::test]
async fn test_chat_unconfigured_always_returns_fixed_message() {
    setup_tracing();
    let dataset = Dataset::new(vec![health_record("fever", "बुखार")], vec![]);
    let assistant = Assistant::new(dataset, GenerationClient::unconfigured("no key"));

    for message in ["I have a fever", "", "anything else"] {
        assert_eq!(assistant.chat(message).await, NOT_CONFIGURED_MESSAGE);
    }
}

#[tokio::test]
async fn test_chat_provider_failure_returns_apology() {
    setup_tracing();
    let provider = MockAiProvider::failing();
    let assistant = assistant_with(Dataset::empty(), &provider);

    assert_eq!(assistant.chat("hello").await, GENERATION_FAILED_MESSAGE);
    assert_eq!(provider.get_calls().len(), 1);
}

// --- search_medicine ---

#[test]
fn test_search_medicine_is_case_insensitive_exact() {
    setup_tracing();
    let dataset = Dataset::new(vec![], vec![medicine_record("crocin", "pain relief")]);
    let assistant = Assistant::new(dataset, GenerationClient::unconfigured("no key"));

    assert_eq!(
        assistant.search_medicine("Crocin"),
        "Uses: pain relief\n\nSide Effects: nausea\n\n**Disclaimer:** Consult a doctor."
    );
    assert_eq!(assistant.search_medicine("croc"), MEDICINE_NOT_FOUND_MESSAGE);
    assert_eq!(assistant.search_medicine(""), MEDICINE_NOT_FOUND_MESSAGE);
}

#[test]
fn test_search_medicine_on_empty_table() {
    setup_tracing();
    let assistant = Assistant::new(Dataset::empty(), GenerationClient::unconfigured("no key"));
    assert_eq!(assistant.search_medicine("crocin"), MEDICINE_NOT_FOUND_MESSAGE);
}

// --- search_by_filename ---

#[test]
fn test_search_by_filename_identifies_medicine() {
    setup_tracing();
    let dataset = Dataset::new(
        vec![],
        vec![
            medicine_record("Dolo 650", "fever"),
            medicine_record("crocin", "pain relief"),
        ],
    );
    let assistant = Assistant::new(dataset, GenerationClient::unconfigured("no key"));

    let response = assistant.search_by_filename("my_crocin_photo.jpg");

    assert!(response.starts_with("**Medicine Identified from Filename:** crocin\n\n"));
    assert!(response.contains("Uses: pain relief"));
}

#[test]
fn test_search_by_filename_not_identified() {
    setup_tracing();
    let dataset = Dataset::new(vec![], vec![medicine_record("crocin", "pain relief")]);
    let assistant = Assistant::new(dataset, GenerationClient::unconfigured("no key"));

    assert_eq!(
        assistant.search_by_filename("IMG_0001.jpg"),
        MEDICINE_NOT_IDENTIFIED_MESSAGE
    );
    assert_eq!(assistant.search_by_filename(""), MEDICINE_NOT_IDENTIFIED_MESSAGE);
}
