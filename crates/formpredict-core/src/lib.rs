//! FormPredict Core - schema-driven feature encoding and model inference
//!
//! This crate provides the building blocks every front-end shares:
//! - Versioned feature schemas with enumerated category options
//! - The feature encoder turning raw answers into ordered vectors
//! - Serialized model artifacts and the schema-checked predictor
//! - The presenter formatting results for display
//! - Built-in variants and the variant registry

pub mod answers;
pub mod artifact;
pub mod catalog;
pub mod encoder;
pub mod error;
pub mod predictor;
pub mod presenter;
pub mod schema;
pub mod variant;

#[cfg(test)]
pub(crate) mod test_utils;

pub use answers::{AnswerSet, AnswerValue};
pub use artifact::ModelArtifact;
pub use catalog::Builtin;
pub use encoder::{FeatureEncoder, FeatureVector};
pub use error::{FormPredictError, Result};
pub use predictor::{Predict, Prediction, Predictor};
pub use presenter::{Presenter, Rendered, StyleRule};
pub use schema::{FeatureSchema, FieldKind, FieldSpec};
pub use variant::{Variant, VariantRegistry};
