//! FormPredict - schema-checked form inference with pre-trained models.
//!
//! A form's answers are encoded into the exact feature vector a model was
//! trained on, run through the model artifact, and rendered as a short
//! styled result. Configuration decides which forms exist.
//!
//! # Example
//!
//! ```rust
//! use formpredict::prelude::*;
//!
//! let schema = Builtin::Insurance.schema().unwrap();
//! let encoder = FeatureEncoder::new(std::sync::Arc::new(schema));
//! let answers = AnswerSet::new()
//!     .with("age", "19")
//!     .with("gender", "Female")
//!     .with("bmi", "27.9")
//!     .with("children", "0")
//!     .with("smoker", "Yes")
//!     .with("region", "Southwest");
//! let vector = encoder.encode(&answers).unwrap();
//! assert_eq!(vector.as_slice(), &[19.0, 0.0, 27.9, 0.0, 1.0, 3.0]);
//! ```

pub use formpredict_core::{
    AnswerSet, AnswerValue, Builtin, FeatureEncoder, FeatureSchema, FeatureVector, FieldKind,
    FieldSpec, FormPredictError, ModelArtifact, Predict, Prediction, Predictor, Presenter,
    Rendered, StyleRule, Variant, VariantRegistry,
};

pub use formpredict_config::{AppConfig, ConfigError, SchemaSource, VariantConfig};

pub use formpredict_console as console;
pub use formpredict_web as web;

pub mod cli;
mod error;
mod registry;

pub use error::{Error, Result};
pub use registry::{build_registry, build_variant};

pub mod prelude {
    pub use super::{
        AnswerSet, AppConfig, Builtin, FeatureEncoder, FeatureSchema, Prediction, Predictor,
        Presenter, Variant, VariantRegistry,
    };
    pub use super::{build_registry, Error, Result};
}
