//! Feature encoding.
//!
//! [`FeatureEncoder`] turns an [`AnswerSet`] into a [`FeatureVector`] whose
//! columns follow the [`FeatureSchema`] order exactly:
//!
//! - categorical answers are looked up in the field's option set
//! - numeric answers are parsed as finite `f64`
//!
//! The first failing field aborts encoding; no partial vector is produced.


use std::ops::Index;
use std::sync::Arc;

use crate::answers::{AnswerSet, AnswerValue};
use crate::error::{FormPredictError, Result};
use crate::schema::{FeatureSchema, FieldKind, FieldSpec};

/// Ordered model input, one value per schema field.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    /// Wraps raw values. Callers are responsible for column order.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// Encodes answer sets against a shared schema.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use formpredict_core::schema::{FeatureSchema, FieldSpec};
/// use formpredict_core::{AnswerSet, FeatureEncoder};
///
/// let schema = FeatureSchema::new("demo", 1, vec![
///     FieldSpec::categorical("Gender", [("Female", 0), ("Male", 1)]),
///     FieldSpec::numeric("Age"),
/// ]).unwrap();
/// let encoder = FeatureEncoder::new(Arc::new(schema));
///
/// let answers = AnswerSet::new().with("Gender", "Male").with("Age", "25");
/// let vector = encoder.encode(&answers).unwrap();
/// assert_eq!(vector.as_slice(), &[1.0, 25.0]);
/// ```
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    schema: Arc<FeatureSchema>,
}

impl FeatureEncoder {
    pub fn new(schema: Arc<FeatureSchema>) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Encodes every schema field, in schema order.
    ///
    /// Answers for fields the schema does not declare are ignored.
    ///
    /// # Errors
    ///
    /// - [`FormPredictError::MissingField`] if a schema field has no answer
    /// - [`FormPredictError::UnknownCategory`] for a label outside the option set
    /// - [`FormPredictError::InvalidNumber`] for a non-numeric or non-finite entry
    pub fn encode(&self, answers: &AnswerSet) -> Result<FeatureVector> {
        let values = self
            .schema
            .fields()
            .iter()
            .map(|field| {
                let answer =
                    answers
                        .get(&field.name)
                        .ok_or_else(|| FormPredictError::MissingField {
                            field: field.name.clone(),
                        })?;
                encode_field(field, answer)
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(FeatureVector { values })
    }
}

/// Encodes one answer for one field.
pub fn encode_field(field: &FieldSpec, answer: &AnswerValue) -> Result<f64> {
    match &field.kind {
        FieldKind::Categorical { .. } => {
            let label = match answer {
                AnswerValue::Text(s) => s.trim().to_string(),
                AnswerValue::Number(n) => n.to_string(),
            };
            field
                .code_for(&label)
                .map(|code| code as f64)
                .ok_or(FormPredictError::UnknownCategory {
                    field: field.name.clone(),
                    label,
                })
        }
        FieldKind::Numeric { .. } => {
            let value = match answer {
                AnswerValue::Number(n) => Some(*n),
                AnswerValue::Text(s) => s.trim().parse::<f64>().ok(),
            };
            value
                .filter(|v| v.is_finite())
                .ok_or_else(|| FormPredictError::InvalidNumber {
                    field: field.name.clone(),
                    value: answer.to_string(),
                })
        }
    }
}
