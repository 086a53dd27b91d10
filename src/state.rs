use crate::config::Config;
use crate::ml::ProficiencyModel;
use crate::services::credentials::CredentialVerifier;
use crate::services::history::ScoreHistory;
use crate::services::plan::PlanClient;
use crate::utils::session::SessionStore;
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ProficiencyModel>,
    pub credentials: Arc<dyn CredentialVerifier>,
    pub sessions: SessionStore,
    pub planner: PlanClient,
    pub history: ScoreHistory,
    pub config: Config,
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
