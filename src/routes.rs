// src/routes.rs

use axum::{
    Router, http::Method, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{auth, home, predict},
    state::AppState,
    utils::session::require_session,
};

/// Assembles the main application router.
///
/// * Public routes: login page, login form, logout.
/// * Protected routes: home and predict, behind the session gate.
/// * Applies global middleware (Trace, CORS) and injects shared state.
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_credentials(true);

    let public_routes = Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout));

    // Protected routes: anonymous callers get bounced to /login.
    // route_layer keeps the gate off the merged router's 404 fallback.
    let protected_routes = Router::new()
        .route("/", get(home::home))
        .route("/predict", post(predict::predict))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
