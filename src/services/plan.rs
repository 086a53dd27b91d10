// src/services/plan.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::models::strength::Strength;

/// Shown whenever the coaching call cannot produce a plan. The report is
/// still served; the plan text is the only degraded part.
pub const PLAN_FALLBACK: &str = "AI Study Plan could not be generated.";

#[derive(Debug, Error)]
enum PlanError {
    #[error("no API key configured")]
    MissingKey,

    #[error("chat completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("chat completion returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("chat completion returned no choices")]
    Empty,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Requests study plans from an OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct PlanClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl PlanClient {
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url,
            model,
        })
    }

    /// Generates a study plan for one classified attempt.
    ///
    /// Never fails the caller: a missing key, timeout, error status or
    /// empty payload logs a warning and yields the fallback text instead.
    pub async fn generate_plan(&self, strength: Strength, topic: &str, time_taken: i64) -> String {
        match self.request_plan(strength, topic, time_taken).await {
            Ok(plan) => plan,
            Err(err) => {
                tracing::warn!("Study plan generation failed: {}", err);
                PLAN_FALLBACK.to_string()
            }
        }
    }

    async fn request_plan(
        &self,
        strength: Strength,
        topic: &str,
        time_taken: i64,
    ) -> Result<String, PlanError> {
        let api_key = self.api_key.as_deref().ok_or(PlanError::MissingKey)?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(strength, topic, time_taken),
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlanError::Status(response.status()));
        }

        let payload: ChatCompletionResponse = response.json().await?;
        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(PlanError::Empty)
    }
}

fn build_prompt(strength: Strength, topic: &str, time_taken: i64) -> String {
    format!(
        "You are an expert academic performance coach.\n\n\
         The student is currently classified as: {}\n\
         Subject: {}\n\
         Average quiz time: {} minutes.\n\n\
         Generate:\n\
         1. Personalized improvement strategy\n\
         2. Weekly study plan\n\
         3. Revision technique\n\
         4. Practice recommendation\n\n\
         Make it structured and motivating.",
        strength, topic, time_taken
    )
}
