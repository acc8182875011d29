//! Serialized model artifacts.
//!
//! Artifacts are JSON documents tagged by `type`:
//!
//! ```json
//! { "type": "linear_regression", "intercept": -11000.0,
//!   "coefficients": [256.9, -131.3, 339.2, 475.5, 23848.5, -353.0] }
//! ```
//!
//! ```json
//! { "type": "decision_tree", "n_features": 16,
//!   "classes": ["Normal_Weight", "Obesity_Type_I"],
//!   "nodes": [
//!     { "kind": "split", "feature": 3, "threshold": 85.0, "left": 1, "right": 2 },
//!     { "kind": "leaf", "class": 0 },
//!     { "kind": "leaf", "class": 1 } ] }
//! ```
//!
//! An artifact may list `feature_names`; when present they are checked
//! against the schema before any prediction is served.

mod linear;
mod tree;


use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormPredictError, Result};
use crate::predictor::Prediction;

pub use linear::LinearModel;
pub use tree::{DecisionTree, TreeNode};

/// A pre-trained model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelArtifact {
    /// Regression producing a scalar.
    LinearRegression(LinearModel),

    /// Classification producing a label.
    DecisionTree(DecisionTree),
}

impl ModelArtifact {
    /// Reads and validates an artifact file.
    ///
    /// # Errors
    ///
    /// - [`FormPredictError::ArtifactNotFound`] if the file does not exist
    /// - [`FormPredictError::InvalidArtifact`] if it is not a valid artifact
    /// - [`FormPredictError::Io`] for any other read failure
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FormPredictError::ArtifactNotFound {
                path: path.to_path_buf(),
            },
            _ => FormPredictError::Io(e),
        })?;
        Self::from_json_str(&contents)
    }

    /// Parses and validates an artifact from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(s).map_err(|e| FormPredictError::InvalidArtifact(e.to_string()))?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Serializes the artifact as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FormPredictError::InvalidArtifact(e.to_string()))
    }

    /// Checks structural integrity.
    pub fn validate(&self) -> Result<()> {
        match self {
            ModelArtifact::LinearRegression(model) => model.validate()?,
            ModelArtifact::DecisionTree(model) => model.validate()?,
        }
        if let Some(names) = self.feature_names() {
            if names.len() != self.n_features() {
                return Err(FormPredictError::InvalidArtifact(format!(
                    "{} feature names for {} inputs",
                    names.len(),
                    self.n_features()
                )));
            }
        }
        Ok(())
    }

    /// Short name of the model family.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::LinearRegression(_) => "linear_regression",
            ModelArtifact::DecisionTree(_) => "decision_tree",
        }
    }

    /// Input width the model expects.
    pub fn n_features(&self) -> usize {
        match self {
            ModelArtifact::LinearRegression(model) => model.n_features(),
            ModelArtifact::DecisionTree(model) => model.n_features(),
        }
    }

    /// Training column names, if recorded.
    pub fn feature_names(&self) -> Option<&[String]> {
        match self {
            ModelArtifact::LinearRegression(model) => model.feature_names.as_deref(),
            ModelArtifact::DecisionTree(model) => model.feature_names.as_deref(),
        }
    }

    /// Runs the model on one row.
    pub fn predict(&self, x: &[f64]) -> Result<Prediction> {
        if x.len() != self.n_features() {
            return Err(FormPredictError::DimensionMismatch {
                expected: self.n_features(),
                actual: x.len(),
            });
        }
        match self {
            ModelArtifact::LinearRegression(model) => Ok(Prediction::Value(model.predict(x))),
            ModelArtifact::DecisionTree(model) => {
                model.predict(x).map(|label| Prediction::Class(label.to_string()))
            }
        }
    }
}
