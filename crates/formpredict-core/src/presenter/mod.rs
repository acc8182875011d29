//! Display formatting for predictions.
//!
//! A [`Presenter`] renders a [`Prediction`] into a headline such as
//! `Predicted Obesity Level: Obesity_Type_I` and picks an optional color by
//! substring match on the result text. Presenting is pure: the same
//! prediction always renders to the same [`Rendered`] value.

mod style;

#[cfg(test)]
mod tests;

use std::fmt;

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

use crate::predictor::Prediction;

pub use style::StyleRule;

const PLACEHOLDER: &str = "{}";

fn default_decimals() -> usize {
    2
}

fn default_error_template() -> String {
    "Error: Please check your inputs. ({})".to_string()
}

/// A prediction ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    /// Full headline text.
    pub text: String,

    /// CSS color chosen by the style rules, if any matched.
    pub color: Option<String>,

    /// The prediction the text was rendered from.
    pub prediction: Prediction,
}

/// Formats predictions for one variant.
///
/// # Examples
///
/// ```
/// use formpredict_core::{Prediction, Presenter};
///
/// let presenter = Presenter::new("Estimated Insurance Cost: Rs{}").with_grouping(true);
/// let out = presenter.present(&Prediction::Value(13250.5));
/// assert_eq!(out.text, "Estimated Insurance Cost: Rs13,250.50");
///
/// let presenter = Presenter::new("Predicted Obesity Level: {}")
///     .with_style("Obesity", "#c0392b");
/// let out = presenter.present(&Prediction::Class("Obesity_Type_I".into()));
/// assert_eq!(out.color.as_deref(), Some("#c0392b"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Presenter {
    /// Headline template; the first `{}` receives the result.
    pub headline: String,

    /// Fraction digits for regression values.
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Group thousands with commas.
    #[serde(default)]
    pub group_thousands: bool,

    /// Ordered substring rules; the first match wins.
    #[serde(default)]
    pub styles: Vec<StyleRule>,

    /// Color used when no rule matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_color: Option<String>,

    /// Failure message template; the first `{}` receives the error.
    #[serde(default = "default_error_template")]
    pub error_template: String,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new("Prediction: {}")
    }
}

impl Presenter {
    pub fn new(headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            decimals: default_decimals(),
            group_thousands: false,
            styles: Vec::new(),
            default_color: None,
            error_template: default_error_template(),
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_grouping(mut self, group_thousands: bool) -> Self {
        self.group_thousands = group_thousands;
        self
    }

    /// Appends a style rule.
    pub fn with_style(mut self, contains: impl Into<String>, color: impl Into<String>) -> Self {
        self.styles.push(StyleRule::new(contains, color));
        self
    }

    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = Some(color.into());
        self
    }

    /// Renders a prediction.
    pub fn present(&self, prediction: &Prediction) -> Rendered {
        let result = match prediction {
            Prediction::Value(v) => self.format_value(*v),
            Prediction::Class(label) => label.clone(),
        };
        Rendered {
            text: self.fill_headline(&result),
            color: self.style_for(&result).map(str::to_string),
            prediction: prediction.clone(),
        }
    }

    /// Color for a result label: the first matching rule, else the default.
    pub fn style_for(&self, label: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|rule| rule.matches(label))
            .map(|rule| rule.color.as_str())
            .or(self.default_color.as_deref())
    }

    /// Formats a scalar with the configured precision and grouping.
    pub fn format_value(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.decimals, value.abs());
        let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        let sign = if negative { "-" } else { "" };
        if !self.group_thousands {
            return format!("{}{}", sign, fixed);
        }

        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };
        let grouped = int_part
            .parse::<u64>()
            .map(|n| n.to_formatted_string(&Locale::en))
            .unwrap_or_else(|_| int_part.to_string());
        match frac_part {
            Some(frac) => format!("{}{}.{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }

    pub fn with_error_template(mut self, template: impl Into<String>) -> Self {
        self.error_template = template.into();
        self
    }

    /// The text shown when a request fails anywhere along the way.
    pub fn error_text(&self, error: &dyn fmt::Display) -> String {
        let error = error.to_string();
        if self.error_template.contains(PLACEHOLDER) {
            self.error_template.replacen(PLACEHOLDER, &error, 1)
        } else {
            format!("{} ({})", self.error_template, error)
        }
    }

    fn fill_headline(&self, result: &str) -> String {
        if self.headline.contains(PLACEHOLDER) {
            self.headline.replacen(PLACEHOLDER, result, 1)
        } else if self.headline.is_empty() {
            result.to_string()
        } else {
            format!("{} {}", self.headline, result)
        }
    }
}
