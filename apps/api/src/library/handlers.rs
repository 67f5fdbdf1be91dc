//! Axum route handlers for the per-user library. Pass-through CRUD: every
//! row is scoped to the authenticated user.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::grades::grade_config;
use crate::library::story_title;
use crate::models::library::{QuizScore, SavedStory, VocabularyEntry};
use crate::state::AppState;
use crate::story::handlers::parse_language;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveStoryRequest {
    pub story: String,
    pub language: String,
    pub grade_level: String,
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveVocabularyRequest {
    pub word: String,
    pub translation: String,
    pub language: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Saved stories
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/stories
pub async fn handle_save_story(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<SaveStoryRequest>,
) -> Result<Json<SavedStory>, AppError> {
    let language = parse_language(&request.language)?;
    grade_config(&request.grade_level).ok_or_else(|| {
        AppError::Validation(format!("Invalid grade level '{}'", request.grade_level))
    })?;
    if request.story.trim().is_empty() {
        return Err(AppError::Validation("Story is required".to_string()));
    }

    let row: SavedStory = sqlx::query_as(
        "INSERT INTO saved_stories (id, user_id, title, story, language, grade_level, translations)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(story_title(&request.story))
    .bind(&request.story)
    .bind(language.tag())
    .bind(&request.grade_level)
    .bind(serde_json::to_value(&request.translations).unwrap_or_default())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/stories
pub async fn handle_list_stories(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<SavedStory>>, AppError> {
    let rows: Vec<SavedStory> =
        sqlx::query_as("SELECT * FROM saved_stories WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user.id)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(rows))
}

/// DELETE /api/stories/:id
pub async fn handle_delete_story(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM saved_stories WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Story {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/vocabulary
pub async fn handle_save_vocabulary(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<SaveVocabularyRequest>,
) -> Result<Json<VocabularyEntry>, AppError> {
    let language = parse_language(&request.language)?;
    let word = request.word.trim();
    if word.is_empty() {
        return Err(AppError::Validation("Word is required".to_string()));
    }

    let row: VocabularyEntry = sqlx::query_as(
        "INSERT INTO vocabulary_entries (id, user_id, word, translation, language)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user.id)
    .bind(word)
    .bind(&request.translation)
    .bind(language.tag())
    .fetch_one(&state.db)
    .await?;

    Ok(Json(row))
}

/// GET /api/vocabulary
pub async fn handle_list_vocabulary(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<VocabularyEntry>>, AppError> {
    let rows: Vec<VocabularyEntry> = sqlx::query_as(
        "SELECT * FROM vocabulary_entries WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// DELETE /api/vocabulary/:id
pub async fn handle_delete_vocabulary(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM vocabulary_entries WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Vocabulary entry {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Quiz score history
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/quiz-scores
pub async fn handle_list_quiz_scores(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<QuizScore>>, AppError> {
    let rows: Vec<QuizScore> =
        sqlx::query_as("SELECT * FROM quiz_scores WHERE user_id = $1 ORDER BY created_at DESC")
            .bind(user.id)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(rows))
}
