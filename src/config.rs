// src/config.rs

use dotenvy::dotenv;
use std::env;
use url::Url;

/// How many of a topic's historical attempts are charted on the report.
pub const HISTORY_LIMIT: usize = 7;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_dir: String,
    pub dataset_path: String,
    pub app_users: String,
    pub session_ttl_secs: i64,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub plan_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let model_dir = env::var("MODEL_DIR").unwrap_or_else(|_| "artifacts".to_string());

        let dataset_path =
            env::var("DATASET_PATH").unwrap_or_else(|_| "data/student_data.csv".to_string());

        // Seed accounts as `user:password` pairs. Plaintext here, hashed at startup.
        let app_users =
            env::var("APP_USERS").unwrap_or_else(|_| "admin:1234,student:abcd".to_string());

        let session_ttl_secs = env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let openai_api_key = env::var("OPENAI_API_KEY").ok();

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        Url::parse(&openai_base_url).expect("OPENAI_BASE_URL must be a valid URL");

        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let plan_timeout_secs = env::var("PLAN_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            model_dir,
            dataset_path,
            app_users,
            session_ttl_secs,
            openai_api_key,
            openai_base_url,
            openai_model,
            plan_timeout_secs,
            rust_log,
        }
    }
}
