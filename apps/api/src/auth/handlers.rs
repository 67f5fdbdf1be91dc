//! Axum route handlers for the Google OAuth flow and session endpoints.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
    Json,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::{session_token, MaybeUser, SESSION_COOKIE};
use crate::errors::AppError;
use crate::models::user::{User, UserSnapshot};
use crate::state::AppState;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

const SESSION_DAYS: i64 = 30;

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct GoogleProfile {
    id: String,
    email: String,
    name: String,
    picture: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSnapshot>,
}

/// GET /auth/google
///
/// Redirects to Google's consent screen.
pub async fn handle_google_login(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let url = reqwest::Url::parse_with_params(
        GOOGLE_AUTH_URL,
        &[
            ("client_id", state.config.google_client_id.as_str()),
            ("redirect_uri", state.config.google_redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", "openid email profile"),
        ],
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to build consent URL: {e}")))?;

    Ok(Redirect::to(url.as_str()))
}

/// GET /auth/google/callback
///
/// Exchanges the authorization code, upserts the user, opens a session,
/// and sends the browser back to the app.
pub async fn handle_google_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, AppError> {
    if let Some(error) = query.error {
        return Err(AppError::Validation(format!("Google sign-in failed: {error}")));
    }
    let code = query
        .code
        .ok_or_else(|| AppError::Validation("Missing authorization code".to_string()))?;

    let http = reqwest::Client::new();

    let token: TokenResponse = http
        .post(GOOGLE_TOKEN_URL)
        .form(&[
            ("code", code.as_str()),
            ("client_id", state.config.google_client_id.as_str()),
            ("client_secret", state.config.google_client_secret.as_str()),
            ("redirect_uri", state.config.google_redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token exchange failed: {e}")))?
        .error_for_status()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token exchange rejected: {e}")))?
        .json()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Malformed token response: {e}")))?;

    let profile: GoogleProfile = http
        .get(GOOGLE_USERINFO_URL)
        .bearer_auth(&token.access_token)
        .send()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Userinfo fetch failed: {e}")))?
        .error_for_status()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Userinfo fetch rejected: {e}")))?
        .json()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Malformed userinfo response: {e}")))?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (id, google_id, email, name, picture, last_login)
         VALUES ($1, $2, $3, $4, $5, now())
         ON CONFLICT (google_id) DO UPDATE
           SET email = EXCLUDED.email,
               name = EXCLUDED.name,
               picture = EXCLUDED.picture,
               last_login = now()
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(&profile.id)
    .bind(&profile.email)
    .bind(&profile.name)
    .bind(&profile.picture)
    .fetch_one(&state.db)
    .await?;

    let token = Uuid::new_v4();
    sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
        .bind(token)
        .bind(user.id)
        .bind(Utc::now() + Duration::days(SESSION_DAYS))
        .execute(&state.db)
        .await?;

    info!("User {} signed in", user.email);

    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_DAYS * 24 * 60 * 60
    );
    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Redirect::to("/"),
    )
        .into_response())
}

/// GET /api/auth/status
pub async fn handle_auth_status(MaybeUser(user): MaybeUser) -> Json<AuthStatusResponse> {
    Json(AuthStatusResponse {
        authenticated: user.is_some(),
        user: user.map(|u| u.snapshot()),
    })
}

/// POST /auth/logout
///
/// Deletes the session row and clears the cookie. Idempotent: logging out
/// without a live session still succeeds.
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if let Some(token) = session_token(&headers) {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&state.db)
            .await?;
    }

    let expired = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    Ok((
        AppendHeaders([(header::SET_COOKIE, expired)]),
        StatusCode::NO_CONTENT,
    )
        .into_response())
}
