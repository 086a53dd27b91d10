// src/handlers/mod.rs

pub mod auth;
pub mod home;
pub mod predict;
