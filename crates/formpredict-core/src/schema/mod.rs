//! Versioned feature schemas.
//!
//! A [`FeatureSchema`] names every model input column in training order and
//! carries the option set of each categorical column. It is the single
//! contract between the form, the encoder and the model artifact: the
//! encoder emits values in schema order and the predictor refuses artifacts
//! whose declared columns disagree with it.
//!
//! Schemas are validated once, when constructed or deserialized, and are
//! immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use formpredict_core::schema::FeatureSchema;
//!
//! let schema = FeatureSchema::from_toml_str(r#"
//!     name = "demo"
//!     version = 1
//!
//!     [[fields]]
//!     name = "Gender"
//!     type = "categorical"
//!     options = [
//!         { label = "Female", code = 0 },
//!         { label = "Male", code = 1 },
//!     ]
//!
//!     [[fields]]
//!     name = "Age"
//!     type = "numeric"
//!     min = 0
//!     max = 120
//! "#).unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.field_names(), vec!["Gender", "Age"]);
//! assert_eq!(schema.code_for("Gender", "Male"), Some(1));
//! ```

mod field;

#[cfg(test)]
mod tests;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormPredictError, Result};

pub use field::{CategoryOption, FieldKind, FieldSpec};

fn default_version() -> u32 {
    1
}

/// Serialized shape of a schema, before validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct SchemaDef {
    name: String,
    #[serde(default = "default_version")]
    version: u32,
    fields: Vec<FieldSpec>,
}

/// Ordered, validated description of a model's input columns.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "SchemaDef", into = "SchemaDef")]
pub struct FeatureSchema {
    name: String,
    version: u32,
    fields: Vec<FieldSpec>,
}

impl TryFrom<SchemaDef> for FeatureSchema {
    type Error = FormPredictError;

    fn try_from(def: SchemaDef) -> Result<Self> {
        FeatureSchema::new(def.name, def.version, def.fields)
    }
}

impl From<FeatureSchema> for SchemaDef {
    fn from(schema: FeatureSchema) -> Self {
        SchemaDef {
            name: schema.name,
            version: schema.version,
            fields: schema.fields,
        }
    }
}

impl FeatureSchema {
    /// Creates and validates a schema.
    ///
    /// # Errors
    ///
    /// Returns [`FormPredictError::InvalidSchema`] if the field list is empty,
    /// a field name repeats, or any field is malformed.
    pub fn new(name: impl Into<String>, version: u32, fields: Vec<FieldSpec>) -> Result<Self> {
        let schema = Self {
            name: name.into(),
            version,
            fields,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Checks the schema invariants.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(FormPredictError::InvalidSchema(format!(
                "schema '{}' has no fields",
                self.name
            )));
        }
        for (i, field) in self.fields.iter().enumerate() {
            if let Some(problem) = field.problem() {
                return Err(FormPredictError::InvalidSchema(problem));
            }
            if self.fields[i + 1..].iter().any(|f| f.name == field.name) {
                return Err(FormPredictError::InvalidSchema(format!(
                    "field '{}' is declared twice",
                    field.name
                )));
            }
        }
        Ok(())
    }

    /// Parses a schema from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| FormPredictError::InvalidSchema(e.to_string()))
    }

    /// Parses a schema from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).map_err(|e| FormPredictError::InvalidSchema(e.to_string()))
    }

    /// Loads a schema file, choosing YAML for `.yaml`/`.yml` and TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            _ => Self::from_toml_str(&contents),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Fields in training column order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of feature columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the column index of a field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Looks up a category code. `None` for unknown fields, numeric fields
    /// and unknown labels.
    pub fn code_for(&self, field: &str, label: &str) -> Option<i64> {
        self.field(field).and_then(|f| f.code_for(label))
    }

    /// Option labels of a categorical field, in declaration order.
    pub fn labels_for(&self, field: &str) -> Vec<&str> {
        self.field(field)
            .map(|f| f.options().iter().map(|o| o.label.as_str()).collect())
            .unwrap_or_default()
    }

    /// Short identifier such as `obesity@v2`.
    pub fn tag(&self) -> String {
        format!("{}@v{}", self.name, self.version)
    }
}
