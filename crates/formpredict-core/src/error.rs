//! Error types for FormPredict

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for FormPredict operations
#[derive(Debug, Error)]
pub enum FormPredictError {
    /// A categorical answer is not one of the field's options
    #[error("unknown category '{label}' for field '{field}'")]
    UnknownCategory { field: String, label: String },

    /// A numeric answer could not be parsed as a finite number
    #[error("invalid number '{value}' for field '{field}'")]
    InvalidNumber { field: String, value: String },

    /// The answer set has no entry for a schema field
    #[error("missing answer for field '{field}'")]
    MissingField { field: String },

    /// The model artifact file does not exist
    #[error("model artifact not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    /// The model artifact could not be parsed or is structurally broken
    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// The artifact's declared inputs disagree with the feature schema
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A feature vector of the wrong width reached the model
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The feature schema failed validation
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// No variant is registered under this id
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// A variant with this id is already registered
    #[error("duplicate variant: {0}")]
    DuplicateVariant(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for FormPredict operations
pub type Result<T> = std::result::Result<T, FormPredictError>;
