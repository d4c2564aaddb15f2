use super::types::{
    ChatRequest, ChatResult, ErrorResponse, InterestRequest, RecommendationResult,
};
use crate::gemini::{Content, GenerateRequest, GenerationConfig, GenerativeClient};
use crate::{Error, Result};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const RECOMMENDATION_TIMEOUT: Duration = Duration::from_millis(15_000);

/// The entire output contract with the model lives in this instruction;
/// `parse_recommendations` enforces that it was honored.
const RECOMMENDATION_PROMPT: &str = "You are a career and hobby advisor for students. \
Based on the interests the user describes, respond with ONLY a valid JSON object. \
Do not wrap it in markdown, code fences, or any surrounding text. \
The object must have exactly two properties: \"careers\" and \"hobbies\". \
\"careers\" is an array of 2 to 4 objects, each with these fields: \
\"career\" (the name of the career), \
\"studies\" (an array of exactly 3 recommended fields of study), and \
\"icon\" (one of: code, flask, palette, wrench, stethoscope, briefcase, globe, music). \
\"hobbies\" is an array of 2 to 3 objects, each with these fields: \
\"hobby\" (the name of the hobby), \
\"description\" (one sentence on why it matches the interests), and \
\"icon\" (one of the same identifiers).";

const CHAT_PERSONA: &str = "You are a friendly and encouraging career counselor. \
Keep the conversation focused on careers, fields of study, and hobbies. \
Be supportive and practical, and keep your answers to two or three short \
sentences unless the user asks for more detail.";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn GenerativeClient>,
}

pub async fn recommendations(
    State(state): State<AppState>,
    Json(request): Json<InterestRequest>,
) -> std::result::Result<Json<RecommendationResult>, (StatusCode, Json<ErrorResponse>)> {
    let interests = request.interests.trim();
    if interests.is_empty() {
        return Err(reject(Error::validation(
            "interests must be a non-empty string",
        )));
    }

    info!(
        "Received recommendation request with {} bytes of interests",
        interests.len()
    );

    let outbound = GenerateRequest {
        contents: vec![Content::user(interests)],
        system_instruction: Some(Content::instruction(RECOMMENDATION_PROMPT)),
        generation_config: Some(GenerationConfig::json()),
    };

    let raw = state
        .client
        .generate_content(outbound, Some(RECOMMENDATION_TIMEOUT))
        .await
        .map_err(reject)?;

    let result = parse_recommendations(&raw).map_err(reject)?;

    info!(
        "Returning {} careers and {} hobbies",
        result.careers.len(),
        result.hobbies.len()
    );
    Ok(Json(result))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> std::result::Result<Json<ChatResult>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received chat request with {} turns", request.history.len());

    let outbound = GenerateRequest {
        contents: request.history.into_iter().map(Content::from).collect(),
        system_instruction: Some(Content::instruction(CHAT_PERSONA)),
        generation_config: None,
    };

    let message = state
        .client
        .generate_content(outbound, None)
        .await
        .map_err(reject)?;

    Ok(Json(ChatResult { message }))
}

fn reject(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    error!("Request failed: {}", err);
    (
        err.status_code(),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Removes a surrounding markdown code fence, if present.
///
/// The model sometimes fences its output even when JSON mode is requested,
/// so normalization happens unconditionally before parsing.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Turns raw candidate text into a validated result.
///
/// Text that is not JSON and JSON that does not carry both array properties
/// are both upstream failures, reported distinctly in the log.
fn parse_recommendations(raw: &str) -> Result<RecommendationResult> {
    let normalized = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(normalized).map_err(|e| {
        error!("Upstream text is not valid JSON: {}", e);
        Error::upstream("upstream did not return valid JSON")
    })?;

    serde_json::from_value(value).map_err(|e| {
        error!("Upstream JSON does not match the recommendation schema: {}", e);
        Error::upstream("upstream response did not match the expected schema")
    })
}
