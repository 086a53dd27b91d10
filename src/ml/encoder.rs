// src/ml/encoder.rs

use serde::Deserialize;
use std::collections::HashSet;

/// Category-to-code mapping exported from a fitted label encoder.
///
/// A value's code is its position in `classes`; decoding goes the other
/// way. Matching is exact and case-sensitive, same as the encoder the
/// classifier was trained with.
#[derive(Debug, Deserialize)]
pub struct CategoryEncoder {
    classes: Vec<String>,
}

impl CategoryEncoder {
    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("encoder has no classes".to_string());
        }
        let mut seen = HashSet::new();
        for class in &self.classes {
            if !seen.insert(class.as_str()) {
                return Err(format!("duplicate class '{}'", class));
            }
        }
        Ok(())
    }

    pub fn transform(&self, value: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == value)
    }

    pub fn inverse_transform(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}
