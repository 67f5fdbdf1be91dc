//! Session-cookie authentication.
//!
//! The OAuth identity provider (Google) owns sign-in; this module only
//! exchanges the callback code, keeps opaque session tokens in Postgres,
//! and resolves the `session` cookie to a user row.

pub mod handlers;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// Extracts the authenticated user, rejecting with 401 when the session
/// cookie is missing, unknown, or expired.
pub struct CurrentUser(pub User);

/// Like [`CurrentUser`] but yields `None` instead of rejecting, for
/// endpoints that merely behave differently when signed in.
pub struct MaybeUser(pub Option<User>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers) else {
            return Ok(MaybeUser(None));
        };

        let user: Option<User> = sqlx::query_as(
            "SELECT u.* FROM users u
             JOIN sessions s ON s.user_id = u.id
             WHERE s.token = $1 AND s.expires_at > now()",
        )
        .bind(token)
        .fetch_optional(&state.db)
        .await?;

        Ok(MaybeUser(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeUser(user) = MaybeUser::from_request_parts(parts, state).await?;
        user.map(CurrentUser).ok_or(AppError::Unauthorized)
    }
}

/// Pulls the session token out of the `Cookie` header.
pub(crate) fn session_token(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            Uuid::parse_str(value).ok()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn finds_session_token_among_other_cookies() {
        let token = Uuid::new_v4();
        let headers = headers_with_cookie(&format!("theme=dark; session={token}; lang=es"));
        assert_eq!(session_token(&headers), Some(token));
    }

    #[test]
    fn rejects_malformed_or_missing_tokens() {
        assert_eq!(
            session_token(&headers_with_cookie("session=not-a-uuid")),
            None
        );
        assert_eq!(session_token(&headers_with_cookie("theme=dark")), None);
    }
}
