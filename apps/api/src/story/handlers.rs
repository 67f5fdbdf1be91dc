//! Axum route handlers for story generation, translation, and speech.

use std::collections::HashMap;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use reader_core::Language;

use crate::errors::AppError;
use crate::grades::grade_config;
use crate::languages::voice;
use crate::state::AppState;
use crate::story::generator::{generate_story, translate_word};

/// Synthesized audio is immutable for a given story, so clients may cache
/// it for a day.
const AUDIO_CACHE_CONTROL: &str = "public, max-age=86400";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest {
    pub language: String,
    pub grade_level: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateStoryResponse {
    pub story: String,
    pub translations: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub word: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

#[derive(Debug, Deserialize)]
pub struct TextToSpeechRequest {
    pub text: String,
    pub language: String,
}

/// Parses a wire language tag, mapping unknown tags to a 400.
pub fn parse_language(tag: &str) -> Result<Language, AppError> {
    Language::from_tag(tag)
        .ok_or_else(|| AppError::Validation(format!("Unsupported language '{tag}'")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-story
///
/// Validates (language, grade) against the static tables, then runs the
/// generation pipeline and returns the story with its translation map.
pub async fn handle_generate_story(
    State(state): State<AppState>,
    Json(request): Json<GenerateStoryRequest>,
) -> Result<Json<GenerateStoryResponse>, AppError> {
    let language = parse_language(&request.language)?;
    let config = grade_config(&request.grade_level).ok_or_else(|| {
        AppError::Validation(format!("Invalid grade level '{}'", request.grade_level))
    })?;

    let bundle = generate_story(&state.llm, language, &request.grade_level, config).await?;

    Ok(Json(GenerateStoryResponse {
        story: bundle.story,
        translations: bundle.translations,
    }))
}

/// POST /api/translate
///
/// Translates one hovered word. Degrades to echoing the word on LLM
/// failure — the hover flow never sees an error.
pub async fn handle_translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    let language = parse_language(&request.language)?;
    let word = request.word.trim();
    if word.is_empty() {
        return Err(AppError::Validation("Word is required".to_string()));
    }

    let translation = translate_word(&state.llm, language, word).await;

    Ok(Json(TranslateResponse { translation }))
}

/// POST /api/text-to-speech
///
/// Synthesizes story narration with the per-language voice preset and
/// streams the MP3 back with a long-lived cache header.
pub async fn handle_text_to_speech(
    State(state): State<AppState>,
    Json(request): Json<TextToSpeechRequest>,
) -> Result<Response, AppError> {
    let language = parse_language(&request.language)?;
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Text is required".to_string()));
    }

    let audio = state
        .llm
        .speech(&request.text, voice(language))
        .await
        .map_err(|e| AppError::Llm(format!("Speech synthesis failed: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (header::CACHE_CONTROL, AUDIO_CACHE_CONTROL),
        ],
        audio,
    )
        .into_response())
}
