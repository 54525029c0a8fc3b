//! # Assistant Handlers
//!
//! The three JSON endpoints. Each one delegates to `arogya::Assistant` and always answers
//! `200 OK` with a `{"response": ...}` body; lookup misses and provider failures are
//! reported in-band as fallback text.

use super::AppState;
use crate::types::{
    AssistantResponse, ChatRequest, SearchByFilenameRequest, SearchMedicineRequest,
};
use axum::{extract::State, Json};
use tracing::{debug, info};

/// The handler for the `/chat` endpoint.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<AssistantResponse> {
    debug!("Received chat message: '{}'", payload.message);
    let response = app_state.assistant.chat(&payload.message).await;
    Json(AssistantResponse { response })
}

/// The handler for the `/search_medicine` endpoint.
pub async fn search_medicine_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SearchMedicineRequest>,
) -> Json<AssistantResponse> {
    info!("Received medicine search: '{}'", payload.query);
    let response = app_state.assistant.search_medicine(&payload.query);
    Json(AssistantResponse { response })
}

/// The handler for the `/search_by_filename` endpoint.
pub async fn search_by_filename_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<SearchByFilenameRequest>,
) -> Json<AssistantResponse> {
    info!("Received filename search: '{}'", payload.filename);
    let response = app_state.assistant.search_by_filename(&payload.filename);
    Json(AssistantResponse { response })
}
