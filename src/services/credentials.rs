// src/services/credentials.rs

use async_trait::async_trait;
use std::collections::HashMap;

use crate::utils::hash::{hash_password, verify_password};

/// Checks a username/password pair against some account source.
///
/// Handlers only ever talk to this trait, so swapping the seed accounts
/// for a real user store is a state-construction change.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> bool;
}

/// Seed accounts parsed from comma-separated `user:password` pairs.
/// Passwords are hashed at construction; plaintext is not kept around.
pub struct StaticCredentials {
    accounts: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn from_pairs(raw: &str) -> Result<Self, String> {
        let mut accounts = HashMap::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (username, password) = entry
                .split_once(':')
                .ok_or_else(|| format!("account entry '{}' is not user:password", entry))?;
            if username.is_empty() || password.is_empty() {
                return Err(format!("account entry '{}' has an empty field", entry));
            }
            let hash = hash_password(password)
                .map_err(|e| format!("failed to hash password for '{}': {}", username, e))?;
            accounts.insert(username.to_string(), hash);
        }
        if accounts.is_empty() {
            return Err("no accounts configured".to_string());
        }
        Ok(Self { accounts })
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> bool {
        let Some(hash) = self.accounts.get(username) else {
            return false;
        };
        match verify_password(password, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification failed for '{}': {}", username, e);
                false
            }
        }
    }
}
