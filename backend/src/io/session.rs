//! Login sessions.
//!
//! Sessions live in memory and are lost on restart. A session is identified by an opaque
//! token returned from login and sent back as `Authorization: Bearer <token>`.
//! Handlers that need the logged-in user take a [`CurrentUser`] argument; nothing about
//! the session is kept in global state.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

use crate::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub email: String,
    pub fullname: String,
}

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, SessionUser>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, SessionUser>> {
        self.sessions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a session and return its token
    pub fn create(&self, user: SessionUser) -> String {
        let token = Uuid::new_v4().to_string();
        debug!("Opening session for {}", user.email);
        self.lock().insert(token.clone(), user);
        token
    }

    pub fn get(&self, token: &str) -> Option<SessionUser> {
        self.lock().get(token).cloned()
    }

    /// End a session. Returns false if the token was not active.
    pub fn remove(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }
}

/// Request-scoped context for the logged-in user
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub token: String,
    pub user: SessionUser,
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn login_required() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            message: "Please login to access this page".to_string(),
            redirect_to: Some("/api/login".to_string()),
        }),
    )
        .into_response()
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(login_required)?;
        let user = state.sessions.get(&token).ok_or_else(login_required)?;
        Ok(CurrentUser { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn jane() -> SessionUser {
        SessionUser {
            email: "jane@example.com".to_string(),
            fullname: "Jane Roe".to_string(),
        }
    }

    #[test]
    fn test_session_lifecycle() {
        let store = SessionStore::new();
        let token = store.create(jane());

        assert_eq!(store.get(&token), Some(jane()));
        assert!(store.remove(&token));
        assert_eq!(store.get(&token), None);
        assert!(!store.remove(&token));
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = SessionStore::new();
        assert_ne!(store.create(jane()), store.create(jane()));
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert("Authorization", HeaderValue::from_static("Bearer abc-123"));
        assert_eq!(bearer_token(&headers), Some("abc-123".to_string()));
    }
}
