//! Model inference behind a schema-checked interface.
//!
//! [`Predictor`] owns one loaded [`ModelArtifact`]. It is built once at
//! startup, checked against the [`FeatureSchema`] it will be fed from, and
//! then shared read-only (typically behind an `Arc<dyn Predict>`).

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::artifact::ModelArtifact;
use crate::encoder::FeatureVector;
use crate::error::{FormPredictError, Result};
use crate::schema::FeatureSchema;

/// Output of a single inference call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Prediction {
    /// Regression output.
    Value(f64),

    /// Classification label.
    Class(String),
}

impl Prediction {
    pub fn as_value(&self) -> Option<f64> {
        match self {
            Prediction::Value(v) => Some(*v),
            Prediction::Class(_) => None,
        }
    }

    pub fn as_class(&self) -> Option<&str> {
        match self {
            Prediction::Value(_) => None,
            Prediction::Class(label) => Some(label),
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::Value(v) => write!(f, "{}", v),
            Prediction::Class(label) => f.write_str(label),
        }
    }
}

/// Anything that maps a feature vector to a prediction.
pub trait Predict: Send + Sync {
    /// Input width the model expects.
    fn n_features(&self) -> usize;

    /// Column names the model was trained on, in order, when known.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Runs one inference.
    fn predict(&self, features: &FeatureVector) -> Result<Prediction>;
}

/// A loaded artifact validated against a schema.
///
/// # Examples
///
/// ```
/// use formpredict_core::schema::{FeatureSchema, FieldSpec};
/// use formpredict_core::artifact::{LinearModel, ModelArtifact};
/// use formpredict_core::{FeatureVector, Predict, Prediction, Predictor};
///
/// let schema = FeatureSchema::new("demo", 1, vec![
///     FieldSpec::numeric("Age"),
///     FieldSpec::numeric("BMI"),
/// ]).unwrap();
/// let artifact = ModelArtifact::LinearRegression(LinearModel {
///     feature_names: None,
///     intercept: 1.0,
///     coefficients: vec![2.0, 0.5],
/// });
///
/// let predictor = Predictor::new(artifact, &schema).unwrap();
/// let out = predictor.predict(&FeatureVector::from_values(vec![10.0, 4.0])).unwrap();
/// assert_eq!(out, Prediction::Value(23.0));
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    artifact: ModelArtifact,
    source: Option<PathBuf>,
}

impl Predictor {
    /// Wraps an in-memory artifact after checking it against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`FormPredictError::SchemaMismatch`] if the artifact's input
    /// width or declared column names disagree with the schema.
    pub fn new(artifact: ModelArtifact, schema: &FeatureSchema) -> Result<Self> {
        artifact.validate()?;
        check_compatible(&artifact, schema)?;
        Ok(Self {
            artifact,
            source: None,
        })
    }

    /// Loads an artifact file once and checks it against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`FormPredictError::ArtifactNotFound`] if the file is missing;
    /// no prediction can be made in that case.
    pub fn load(path: impl AsRef<Path>, schema: &FeatureSchema) -> Result<Self> {
        let path = path.as_ref();
        let artifact = ModelArtifact::load(path)?;
        let mut predictor = Self::new(artifact, schema)?;
        predictor.source = Some(path.to_path_buf());
        info!(
            event = "artifact_loaded",
            path = %path.display(),
            kind = predictor.artifact.kind(),
            features = predictor.artifact.n_features() as u64,
            schema = %schema.tag(),
            "Model artifact loaded"
        );
        Ok(predictor)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// File the artifact was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Predict for Predictor {
    fn n_features(&self) -> usize {
        self.artifact.n_features()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.artifact.feature_names()
    }

    /// Regression outputs are rounded to two decimals.
    fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        match self.artifact.predict(features.as_slice())? {
            Prediction::Value(v) => Ok(Prediction::Value(round2(v))),
            class => Ok(class),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn check_compatible(artifact: &ModelArtifact, schema: &FeatureSchema) -> Result<()> {
    check_columns(
        artifact.kind(),
        artifact.n_features(),
        artifact.feature_names(),
        schema,
    )
}

/// Checks a model's input width and declared column order against `schema`.
pub(crate) fn check_columns(
    model: &str,
    width: usize,
    names: Option<&[String]>,
    schema: &FeatureSchema,
) -> Result<()> {
    if width != schema.len() {
        return Err(FormPredictError::SchemaMismatch(format!(
            "{} model takes {} features, schema {} has {}",
            model,
            width,
            schema.tag(),
            schema.len()
        )));
    }
    if let Some(names) = names {
        let expected = schema.field_names();
        if let Some((i, (got, want))) = names
            .iter()
            .zip(&expected)
            .enumerate()
            .find(|(_, (got, want))| got.as_str() != **want)
        {
            return Err(FormPredictError::SchemaMismatch(format!(
                "column {} is '{}' in the artifact but '{}' in schema {}",
                i,
                got,
                want,
                schema.tag()
            )));
        }
    }
    Ok(())
}
