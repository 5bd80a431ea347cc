//! Axum route handlers for the advice, chat and text-intake endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advice::prompts::{build_advice_prompt, build_chat_prompt, AdviceType};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(rename = "combinedText", default)]
    pub combined_text: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessTextResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub received_length: usize,
}

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub advice_type: AdviceType,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub status: &'static str,
    pub advice: String,
    #[serde(rename = "type")]
    pub advice_type: AdviceType,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub status: &'static str,
    pub response: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /process-text
///
/// Receives and acknowledges combined form text from the frontend.
/// Observability only; never touches the generator.
pub async fn handle_process_text(
    Json(request): Json<ProcessTextRequest>,
) -> Result<Json<ProcessTextResponse>, AppError> {
    if request.combined_text.is_empty() {
        return Err(AppError::Validation("No text provided".to_string()));
    }

    info!("Received from frontend:\n{}", request.combined_text);

    Ok(Json(ProcessTextResponse {
        message: "Text received successfully",
        status: "success",
        received_length: request.combined_text.chars().count(),
    }))
}

/// POST /generate-advice
///
/// Selects the prompt template for the requested advice type (absent or
/// unknown types resolve to `general`), substitutes the user's text and
/// returns the model's completion.
pub async fn handle_generate_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    if request.text.is_empty() {
        return Err(AppError::Validation("No text provided".to_string()));
    }

    info!("Processing {} request...", request.advice_type.as_str());

    let prompt = build_advice_prompt(request.advice_type, &request.text);

    let advice = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Failed to generate advice: {e}")))?;

    Ok(Json(AdviceResponse {
        status: "success",
        advice,
        advice_type: request.advice_type,
    }))
}

/// POST /chat
///
/// Single-turn chat for follow-up questions. The caller supplies any prior
/// conversation as `context`; no turn state lives on the server.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.is_empty() {
        return Err(AppError::Validation("No message provided".to_string()));
    }

    let prompt = build_chat_prompt(&request.message, request.context.as_deref());

    let response = state
        .generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Chat failed: {e}")))?;

    Ok(Json(ChatResponse {
        status: "success",
        response,
    }))
}
