// src/main.rs

use dotenvy::dotenv;
use skillsprint::config::Config;
use skillsprint::ml::ProficiencyModel;
use skillsprint::routes;
use skillsprint::services::credentials::StaticCredentials;
use skillsprint::services::history::ScoreHistory;
use skillsprint::services::plan::PlanClient;
use skillsprint::state::AppState;
use skillsprint::utils::session::SessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "skillsprint.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Load classifier artifacts; nothing works without them
    let model = ProficiencyModel::load(&config.model_dir).unwrap_or_else(|e| {
        panic!(
            "Failed to load model artifacts from '{}': {}",
            config.model_dir, e
        )
    });
    tracing::info!("Model artifacts loaded from '{}'", config.model_dir);

    // Seed Accounts
    let credentials = StaticCredentials::from_pairs(&config.app_users)
        .unwrap_or_else(|e| panic!("Failed to parse APP_USERS: {}", e));

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; study plans will fall back to static text");
    }

    let planner = PlanClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
        Duration::from_secs(config.plan_timeout_secs),
    )
    .expect("Failed to build the study plan HTTP client");

    // Create AppState
    let state = AppState {
        model: Arc::new(model),
        credentials: Arc::new(credentials),
        sessions: SessionStore::new(config.session_ttl_secs),
        planner,
        history: ScoreHistory::new(&config.dataset_path),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
