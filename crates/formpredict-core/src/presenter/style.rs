use serde::{Deserialize, Serialize};

/// Colors a result whose text contains `contains` (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StyleRule {
    pub contains: String,
    pub color: String,
}

impl StyleRule {
    pub fn new(contains: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            contains: contains.into(),
            color: color.into(),
        }
    }

    pub fn matches(&self, label: &str) -> bool {
        label.contains(self.contains.as_str())
    }
}
