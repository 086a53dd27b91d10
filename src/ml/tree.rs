// src/ml/tree.rs

use serde::Deserialize;

/// Feature vector layout: quiz number, time taken, encoded topic.
pub const FEATURE_COUNT: usize = 3;

/// A decision tree exported as a flat node array.
///
/// Node 0 is the root. Split nodes compare one feature against a threshold
/// and route to a child by index; leaves carry the predicted class.
#[derive(Debug, Deserialize)]
pub struct DecisionTree {
    n_features: usize,
    nodes: Vec<TreeNode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

impl DecisionTree {
    /// Checks the structural invariants the walk in `predict` relies on:
    /// the artifact was fitted on the fixed input layout, children always
    /// point forward in the array (so every walk terminates), indices stay
    /// in bounds and thresholds are comparable.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_features != FEATURE_COUNT {
            return Err(format!(
                "tree was fitted on {} features but inputs have {}",
                self.n_features, FEATURE_COUNT
            ));
        }
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= FEATURE_COUNT {
                    return Err(format!(
                        "node {} splits on feature {} but inputs have {} features",
                        i, feature, FEATURE_COUNT
                    ));
                }
                if !threshold.is_finite() {
                    return Err(format!("node {} has a non-finite threshold", i));
                }
                for child in [*left, *right] {
                    if child <= i {
                        return Err(format!("node {} points backwards to node {}", i, child));
                    }
                    if child >= self.nodes.len() {
                        return Err(format!("node {} points to missing node {}", i, child));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks the tree from the root and returns the leaf's class index.
    ///
    /// Follows the scikit-learn convention: `feature <= threshold` routes
    /// left. Callers must have run `validate` on load, which is what makes
    /// the indexing and termination here safe.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> usize {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { class } => return *class,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> DecisionTree {
        // feature 1 (time taken) <= 30 -> class 1, otherwise class 0
        DecisionTree {
            n_features: FEATURE_COUNT,
            nodes: vec![
                TreeNode::Split {
                    feature: 1,
                    threshold: 30.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { class: 1 },
                TreeNode::Leaf { class: 0 },
            ],
        }
    }

    #[test]
    fn test_predict_routes_on_threshold() {
        let tree = small_tree();
        assert_eq!(tree.predict(&[1.0, 25.0, 0.0]), 1);
        assert_eq!(tree.predict(&[1.0, 45.0, 0.0]), 0);
    }

    #[test]
    fn test_predict_boundary_goes_left() {
        let tree = small_tree();
        assert_eq!(tree.predict(&[1.0, 30.0, 0.0]), 1);
    }

    #[test]
    fn test_validate_accepts_well_formed_tree() {
        assert!(small_tree().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_feature_count() {
        let tree = DecisionTree {
            n_features: 5,
            nodes: vec![TreeNode::Leaf { class: 0 }],
        };
        let err = tree.validate().unwrap_err();
        assert!(err.contains("fitted on 5 features"));
    }

    #[test]
    fn test_validate_rejects_empty_tree() {
        let tree = DecisionTree {
            n_features: FEATURE_COUNT,
            nodes: vec![],
        };
        assert!(tree.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_backward_edge() {
        let tree = DecisionTree {
            n_features: FEATURE_COUNT,
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Split {
                    feature: 0,
                    threshold: 2.0,
                    left: 0,
                    right: 2,
                },
                TreeNode::Leaf { class: 0 },
            ],
        };
        let err = tree.validate().unwrap_err();
        assert!(err.contains("backwards"));
    }

    #[test]
    fn test_validate_rejects_missing_child() {
        let tree = DecisionTree {
            n_features: FEATURE_COUNT,
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 1,
                    right: 9,
                },
                TreeNode::Leaf { class: 0 },
            ],
        };
        let err = tree.validate().unwrap_err();
        assert!(err.contains("missing node"));
    }

    #[test]
    fn test_validate_rejects_unknown_feature() {
        let tree = DecisionTree {
            n_features: FEATURE_COUNT,
            nodes: vec![
                TreeNode::Split {
                    feature: 7,
                    threshold: 1.0,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { class: 0 },
                TreeNode::Leaf { class: 1 },
            ],
        };
        assert!(tree.validate().is_err());
    }

    #[test]
    fn test_deserializes_untagged_nodes() {
        let raw = r#"{
            "n_features": 3,
            "nodes": [
                {"feature": 2, "threshold": 1.5, "left": 1, "right": 2},
                {"class": 0},
                {"class": 2}
            ]
        }"#;
        let tree: DecisionTree = serde_json::from_str(raw).unwrap();
        assert!(tree.validate().is_ok());
        assert_eq!(tree.predict(&[0.0, 0.0, 3.0]), 2);
    }
}
