//! Ordinary least squares regressor.

use serde::{Deserialize, Serialize};

use crate::error::{FormPredictError, Result};

/// `intercept + Σ coefficients[i] * x[i]`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LinearModel {
    /// Training column names, when the exporter recorded them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,

    pub intercept: f64,

    pub coefficients: Vec<f64>,
}

impl LinearModel {
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.coefficients.is_empty() {
            return Err(FormPredictError::InvalidArtifact(
                "linear model has no coefficients".to_string(),
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(FormPredictError::InvalidArtifact(
                "linear model has non-finite weights".to_string(),
            ));
        }
        Ok(())
    }

    /// Evaluates the model. The caller checks the input width.
    pub fn predict(&self, x: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(x)
                .map(|(w, v)| w * v)
                .sum::<f64>()
    }
}
