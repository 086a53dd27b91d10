// src/handlers/home.rs

use axum::{Extension, Json, extract::State};

use crate::{models::report::LandingView, state::AppState, utils::session::CurrentUser};

/// Serves the home page payload for a signed-in user: their name plus the
/// topics the classifier knows, for the quiz form's topic picker.
pub async fn home(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<LandingView> {
    Json(LandingView {
        user,
        topics: state.model.topics().to_vec(),
    })
}
