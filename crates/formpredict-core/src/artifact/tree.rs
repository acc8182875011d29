//! Binary decision tree classifier.

use serde::{Deserialize, Serialize};

use crate::error::{FormPredictError, Result};

/// A node of a flattened tree. Node 0 is the root.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Goes to `left` when `x[feature] <= threshold`, else to `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },

    /// Terminal node; `class` indexes the tree's class labels.
    Leaf { class: usize },
}

/// Decision tree exported as a flat node table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecisionTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,

    /// Input width the tree was trained on.
    pub n_features: usize,

    pub classes: Vec<String>,

    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(FormPredictError::InvalidArtifact(msg));

        if self.nodes.is_empty() {
            return invalid("decision tree has no nodes".to_string());
        }
        if self.classes.is_empty() {
            return invalid("decision tree has no classes".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= self.n_features {
                        return invalid(format!(
                            "node {} splits on feature {} of {}",
                            i, feature, self.n_features
                        ));
                    }
                    if threshold.is_nan() {
                        return invalid(format!("node {} has a NaN threshold", i));
                    }
                    if left >= self.nodes.len() || right >= self.nodes.len() {
                        return invalid(format!("node {} points past the node table", i));
                    }
                }
                TreeNode::Leaf { class } => {
                    if class >= self.classes.len() {
                        return invalid(format!("leaf {} names class {}", i, class));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks from the root to a leaf and returns its class label.
    ///
    /// The walk visits at most one node per table entry, so a table with a
    /// cycle fails instead of looping.
    pub fn predict(&self, x: &[f64]) -> Result<&str> {
        let mut index = 0;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { class }) => {
                    return self.classes.get(*class).map(String::as_str).ok_or_else(|| {
                        FormPredictError::InvalidArtifact(format!("unknown class {}", class))
                    });
                }
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = x.get(*feature).copied().ok_or(
                        FormPredictError::DimensionMismatch {
                            expected: self.n_features,
                            actual: x.len(),
                        },
                    )?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(FormPredictError::InvalidArtifact(format!(
                        "node {} does not exist",
                        index
                    )));
                }
            }
        }
        Err(FormPredictError::InvalidArtifact(
            "decision tree walk did not reach a leaf".to_string(),
        ))
    }
}
