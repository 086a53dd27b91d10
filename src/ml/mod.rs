// src/ml/mod.rs

pub mod encoder;
pub mod tree;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::strength::Strength;
pub use encoder::CategoryEncoder;
pub use tree::{DecisionTree, FEATURE_COUNT};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("could not read artifact {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact {name} failed validation: {reason}")]
    Invalid { name: String, reason: String },

    #[error("unknown topic '{0}'")]
    UnknownTopic(String),

    #[error("classifier produced class index {0} outside the strength vocabulary")]
    UnknownClass(usize),

    #[error("strength vocabulary contains unsupported label '{0}'")]
    UnsupportedLabel(String),
}

/// The trained proficiency classifier plus the encoders that translate
/// between request values and the numeric space it was fitted in.
#[derive(Debug)]
pub struct ProficiencyModel {
    tree: DecisionTree,
    topic_encoder: CategoryEncoder,
    strength_encoder: CategoryEncoder,
}

impl ProficiencyModel {
    /// Loads `model.json`, `topic_encoder.json` and `strength_encoder.json`
    /// from `dir` and validates them as a set.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ModelError> {
        let dir = dir.as_ref();
        let tree = read_artifact(&dir.join("model.json"))?;
        let topic_encoder = read_artifact(&dir.join("topic_encoder.json"))?;
        let strength_encoder = read_artifact(&dir.join("strength_encoder.json"))?;
        Self::from_parts(tree, topic_encoder, strength_encoder)
    }

    /// Validates the parts as a set. Strength labels are checked against the
    /// `Strength` enum here so a drifted artifact fails at startup instead
    /// of mid-request.
    pub fn from_parts(
        tree: DecisionTree,
        topic_encoder: CategoryEncoder,
        strength_encoder: CategoryEncoder,
    ) -> Result<Self, ModelError> {
        tree.validate().map_err(|reason| ModelError::Invalid {
            name: "model".to_string(),
            reason,
        })?;
        topic_encoder
            .validate()
            .map_err(|reason| ModelError::Invalid {
                name: "topic_encoder".to_string(),
                reason,
            })?;
        strength_encoder
            .validate()
            .map_err(|reason| ModelError::Invalid {
                name: "strength_encoder".to_string(),
                reason,
            })?;
        for label in strength_encoder.classes() {
            if label.parse::<Strength>().is_err() {
                return Err(ModelError::UnsupportedLabel(label.clone()));
            }
        }
        Ok(Self {
            tree,
            topic_encoder,
            strength_encoder,
        })
    }

    /// Topics the classifier was trained on, in encoding order.
    pub fn topics(&self) -> &[String] {
        self.topic_encoder.classes()
    }

    /// Classifies one quiz attempt into a proficiency band.
    pub fn classify(
        &self,
        topic: &str,
        quiz_no: i64,
        time_taken: i64,
    ) -> Result<Strength, ModelError> {
        let topic_code = self
            .topic_encoder
            .transform(topic)
            .ok_or_else(|| ModelError::UnknownTopic(topic.to_string()))?;
        let features = [quiz_no as f64, time_taken as f64, topic_code as f64];
        let class = self.tree.predict(&features);
        let label = self
            .strength_encoder
            .inverse_transform(class)
            .ok_or(ModelError::UnknownClass(class))?;
        label
            .parse()
            .map_err(|_| ModelError::UnsupportedLabel(label.to_string()))
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let raw = fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const TREE_JSON: &str = r#"{
        "n_features": 3,
        "nodes": [
            {"feature": 1, "threshold": 30.0, "left": 1, "right": 2},
            {"class": 1},
            {"class": 2}
        ]
    }"#;

    const TOPIC_JSON: &str = r#"{"classes": ["English", "Math", "Science"]}"#;
    const STRENGTH_JSON: &str = r#"{"classes": ["Moderate", "Strong", "Weak"]}"#;

    fn test_model() -> ProficiencyModel {
        ProficiencyModel::from_parts(
            serde_json::from_str(TREE_JSON).unwrap(),
            serde_json::from_str(TOPIC_JSON).unwrap(),
            serde_json::from_str(STRENGTH_JSON).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_classify_fast_attempt_is_strong() {
        let model = test_model();
        let strength = model.classify("Math", 3, 25).unwrap();
        assert_eq!(strength, Strength::Strong);
    }

    #[test]
    fn test_classify_slow_attempt_is_weak() {
        let model = test_model();
        let strength = model.classify("Math", 3, 55).unwrap();
        assert_eq!(strength, Strength::Weak);
    }

    #[test]
    fn test_classify_unknown_topic() {
        let model = test_model();
        let err = model.classify("Biology", 1, 10).unwrap_err();
        assert!(matches!(err, ModelError::UnknownTopic(topic) if topic == "Biology"));
    }

    #[test]
    fn test_topic_match_is_case_sensitive() {
        let model = test_model();
        assert!(model.classify("math", 1, 10).is_err());
    }

    #[test]
    fn test_classify_accepts_every_known_topic() {
        let model = test_model();
        for topic in model.topics().to_vec() {
            assert!(model.classify(&topic, 1, 10).is_ok());
        }
    }

    #[test]
    fn test_from_parts_rejects_drifted_strength_vocabulary() {
        let result = ProficiencyModel::from_parts(
            serde_json::from_str(TREE_JSON).unwrap(),
            serde_json::from_str(TOPIC_JSON).unwrap(),
            serde_json::from_str(r#"{"classes": ["Weak", "Excellent"]}"#).unwrap(),
        );
        assert!(matches!(
            result,
            Err(ModelError::UnsupportedLabel(label)) if label == "Excellent"
        ));
    }

    #[test]
    fn test_load_reads_artifact_directory() {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in [
            ("model.json", TREE_JSON),
            ("topic_encoder.json", TOPIC_JSON),
            ("strength_encoder.json", STRENGTH_JSON),
        ] {
            let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
        }

        let model = ProficiencyModel::load(dir.path()).unwrap();
        assert_eq!(model.topics(), ["English", "Math", "Science"]);
    }

    #[test]
    fn test_load_fails_on_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProficiencyModel::load(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::Read { .. }));
    }
}
