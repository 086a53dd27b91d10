// src/services/mod.rs

pub mod credentials;
pub mod history;
pub mod plan;
