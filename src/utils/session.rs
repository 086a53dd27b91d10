// src/utils/session.rs

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::state::AppState;

/// Cookie that carries the opaque session token.
pub const SESSION_COOKIE: &str = "skillsprint_session";

/// Signed-in user attached to protected requests by `require_session`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

#[derive(Debug, Clone)]
struct Session {
    username: String,
    expires_at: DateTime<Utc>,
}

/// Server-side session table keyed by the client-held token.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Opens a session for `username` and returns the token the cookie
    /// should carry. Expired entries are swept out on the way in, so
    /// abandoned logins never outlive the next one.
    pub async fn create(&self, username: &str) -> String {
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| session.expires_at > now);
        sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                expires_at: now + self.ttl,
            },
        );
        token
    }

    /// Resolves a token to its username. Live sessions take only the read
    /// lock; an expired entry is dropped under the write lock.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if session.expires_at > Utc::now() => {
                    return Some(session.username.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        self.sessions.write().await.remove(token);
        None
    }

    /// Drops a session whether or not it is still live.
    pub async fn revoke(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}

/// Gate for protected routes. Resolves the session cookie and attaches
/// `CurrentUser` to the request; anonymous or stale callers are redirected
/// to `/login`.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let username = match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.resolve(cookie.value()).await,
        None => None,
    };

    match username {
        Some(username) => {
            request.extensions_mut().insert(CurrentUser(username));
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
