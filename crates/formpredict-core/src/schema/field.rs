//! Field definitions for feature schemas.

use serde::{Deserialize, Serialize};

/// One enumerated answer for a categorical field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryOption {
    /// Label submitted by the form, matched case-sensitively.
    pub label: String,

    /// Integer code the model was trained with.
    pub code: i64,
}

impl CategoryOption {
    pub fn new(label: impl Into<String>, code: i64) -> Self {
        Self {
            label: label.into(),
            code,
        }
    }
}

/// How a field's raw answer turns into a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Label looked up in an enumerated option set.
    Categorical { options: Vec<CategoryOption> },

    /// Free numeric entry. Bounds and step only drive the form widget.
    Numeric {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
}

/// A named input column of the model.
///
/// # Examples
///
/// ```
/// use formpredict_core::schema::FieldSpec;
///
/// let gender = FieldSpec::categorical("Gender", [("Female", 0), ("Male", 1)]);
/// assert_eq!(gender.code_for("Male"), Some(1));
/// assert_eq!(gender.code_for("male"), None);
///
/// let age = FieldSpec::numeric("Age").with_range(0.0, 120.0);
/// assert!(age.is_numeric());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldSpec {
    /// Form field name and feature column name.
    pub name: String,

    /// Human-readable caption for the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Creates a numeric field with no bounds.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind: FieldKind::Numeric {
                min: None,
                max: None,
                step: None,
            },
        }
    }

    /// Creates a categorical field from `(label, code)` pairs.
    pub fn categorical<I, L>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = (L, i64)>,
        L: Into<String>,
    {
        Self {
            name: name.into(),
            label: None,
            kind: FieldKind::Categorical {
                options: options
                    .into_iter()
                    .map(|(label, code)| CategoryOption::new(label, code))
                    .collect(),
            },
        }
    }

    /// Sets the form caption.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets numeric bounds. No effect on categorical fields.
    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        if let FieldKind::Numeric { min, max, .. } = &mut self.kind {
            *min = Some(lo);
            *max = Some(hi);
        }
        self
    }

    /// Sets the numeric input step. No effect on categorical fields.
    pub fn with_step(mut self, value: f64) -> Self {
        if let FieldKind::Numeric { step, .. } = &mut self.kind {
            *step = Some(value);
        }
        self
    }

    /// Returns the caption, falling back to the field name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, FieldKind::Numeric { .. })
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self.kind, FieldKind::Categorical { .. })
    }

    /// Returns the option set, or an empty slice for numeric fields.
    pub fn options(&self) -> &[CategoryOption] {
        match &self.kind {
            FieldKind::Categorical { options } => options,
            FieldKind::Numeric { .. } => &[],
        }
    }

    /// Looks up the code for a submitted label.
    pub fn code_for(&self, label: &str) -> Option<i64> {
        self.options()
            .iter()
            .find(|option| option.label == label)
            .map(|option| option.code)
    }

    // Returns a description of the first problem with this field, if any.
    pub(crate) fn problem(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("field name must not be empty".to_string());
        }
        match &self.kind {
            FieldKind::Categorical { options } => {
                if options.is_empty() {
                    return Some(format!("field '{}' has no options", self.name));
                }
                for (i, option) in options.iter().enumerate() {
                    let rest = &options[i + 1..];
                    if rest.iter().any(|o| o.label == option.label) {
                        return Some(format!(
                            "field '{}' repeats label '{}'",
                            self.name, option.label
                        ));
                    }
                    if rest.iter().any(|o| o.code == option.code) {
                        return Some(format!(
                            "field '{}' repeats code {}",
                            self.name, option.code
                        ));
                    }
                }
                None
            }
            FieldKind::Numeric { min, max, .. } => match (min, max) {
                (Some(lo), Some(hi)) if lo > hi => Some(format!(
                    "field '{}' has min {} above max {}",
                    self.name, lo, hi
                )),
                _ => None,
            },
        }
    }
}
