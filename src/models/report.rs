// src/models/report.rs

use serde::Serialize;

use crate::models::strength::Strength;

/// Payload behind the landing page: who is signed in and which topics
/// the classifier was trained on.
#[derive(Debug, Serialize)]
pub struct LandingView {
    pub user: String,
    pub topics: Vec<String>,
}

/// Everything the result page needs to render one prediction: the band,
/// its badge color, the generated study plan and the score history chart
/// for the submitted topic.
#[derive(Debug, Serialize)]
pub struct PredictionReport {
    pub user: String,
    pub topic: String,
    pub strength: Strength,
    pub badge_color: String,
    pub study_plan: String,
    pub performance_data: Vec<f64>,
    pub labels: Vec<u32>,
}
