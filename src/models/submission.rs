// src/models/submission.rs

use serde::Deserialize;
use validator::Validate;

/// Login form fields.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Quiz attempt form fields.
#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(length(min = 1, message = "Topic is required"))]
    pub topic: String,

    #[validate(range(min = 0, message = "Quiz number cannot be negative"))]
    pub quiz_no: i64,

    #[validate(range(min = 0, message = "Time taken cannot be negative"))]
    pub time_taken: i64,
}
