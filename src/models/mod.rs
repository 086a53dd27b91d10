// src/models/mod.rs

pub mod report;
pub mod strength;
pub mod submission;
