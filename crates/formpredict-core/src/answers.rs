//! Raw answers collected from a form or API request.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single raw answer: form text or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Number(n) => write!(f, "{}", n),
            AnswerValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        AnswerValue::Text(s)
    }
}

impl From<f64> for AnswerValue {
    fn from(n: f64) -> Self {
        AnswerValue::Number(n)
    }
}

impl From<i64> for AnswerValue {
    fn from(n: i64) -> Self {
        AnswerValue::Number(n as f64)
    }
}

/// Answers for one request, keyed by field name.
///
/// # Examples
///
/// ```
/// use formpredict_core::{AnswerSet, AnswerValue};
///
/// let answers = AnswerSet::new()
///     .with("Gender", "Male")
///     .with("Age", 25.0);
///
/// assert_eq!(answers.len(), 2);
/// assert_eq!(answers.get("Age"), Some(&AnswerValue::Number(25.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: HashMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an answer, replacing any previous answer for the field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<AnswerValue> {
        self.answers.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&AnswerValue> {
        self.answers.get(field)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (field, value) in iter {
            answers.insert(field, value);
        }
        answers
    }
}

impl From<HashMap<String, String>> for AnswerSet {
    fn from(form: HashMap<String, String>) -> Self {
        form.into_iter().collect()
    }
}
