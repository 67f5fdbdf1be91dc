//! Row types for the per-user library tables. All rows are scoped by
//! `user_id`; `quiz_scores` is append-only history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedStory {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub title: String,
    pub story: String,
    pub language: String,
    pub grade_level: String,
    /// Word→gloss map captured at save time.
    pub translations: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub word: String,
    pub translation: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub score: i32,
    pub total: i32,
    pub language: String,
    pub grade_level: String,
    pub created_at: DateTime<Utc>,
}
