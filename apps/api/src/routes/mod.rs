pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::library::handlers as library;
use crate::quiz::handlers as quiz;
use crate::state::AppState;
use crate::story::handlers as story;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Story API
        .route("/api/generate-story", post(story::handle_generate_story))
        .route("/api/translate", post(story::handle_translate))
        .route("/api/text-to-speech", post(story::handle_text_to_speech))
        // Quiz API
        .route("/api/generate-quiz", post(quiz::handle_generate_quiz))
        .route("/api/grade-quiz", post(quiz::handle_grade_quiz))
        // Auth
        .route("/auth/google", get(auth::handle_google_login))
        .route("/auth/google/callback", get(auth::handle_google_callback))
        .route("/auth/logout", post(auth::handle_logout))
        .route("/api/auth/status", get(auth::handle_auth_status))
        // Library (authenticated)
        .route(
            "/api/stories",
            post(library::handle_save_story).get(library::handle_list_stories),
        )
        .route("/api/stories/:id", delete(library::handle_delete_story))
        .route(
            "/api/vocabulary",
            post(library::handle_save_vocabulary).get(library::handle_list_vocabulary),
        )
        .route(
            "/api/vocabulary/:id",
            delete(library::handle_delete_vocabulary),
        )
        .route("/api/quiz-scores", get(library::handle_list_quiz_scores))
        .with_state(state)
}
