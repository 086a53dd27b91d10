// src/handlers/auth.rs

use axum::{
    Json,
    extract::{Form, State, rejection::FormRejection},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError, models::submission::LoginRequest, state::AppState,
    utils::session::SESSION_COOKIE,
};

/// Serves the login page payload.
///
/// This is where anonymous callers get redirected; the body tells the
/// client which form to render.
pub async fn login_page() -> impl IntoResponse {
    Json(json!({
        "page": "login",
        "fields": ["username", "password"],
    }))
}

/// Authenticates a user and opens a session.
///
/// On success sets the session cookie and redirects to the home page.
/// Wrong credentials come back as 401 so the client can re-render the
/// form with an error message.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Form<LoginRequest>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = payload.map_err(|e| AppError::BadRequest(e.to_string()))?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let is_valid = state
        .credentials
        .verify(&payload.username, &payload.password)
        .await;

    if !is_valid {
        return Err(AppError::AuthError("Invalid credentials".to_string()));
    }

    let token = state.sessions.create(&payload.username).await;
    tracing::info!("User '{}' signed in", payload.username);

    Ok((jar.add(session_cookie(token)), Redirect::to("/")))
}

/// Ends the caller's session, if any, and sends them back to the login
/// page. Redirects the same way whether or not they were signed in.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            state.sessions.revoke(cookie.value()).await;
            jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
        }
        None => jar,
    };

    (jar, Redirect::to("/login"))
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
