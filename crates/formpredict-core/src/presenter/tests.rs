//! Tests for prediction presentation.

use super::*;

fn obesity_presenter() -> Presenter {
    Presenter::new("Predicted Obesity Level: {}")
        .with_style("Obesity", "#c0392b")
        .with_style("Overweight", "#e67e22")
        .with_style("Normal", "#27ae60")
}

#[test]
fn test_class_headline() {
    let out = obesity_presenter().present(&Prediction::Class("Normal_Weight".to_string()));
    assert_eq!(out.text, "Predicted Obesity Level: Normal_Weight");
    assert_eq!(out.color.as_deref(), Some("#27ae60"));
}

#[test]
fn test_first_matching_rule_wins() {
    let presenter = Presenter::new("{}")
        .with_style("Type", "blue")
        .with_style("Obesity", "red");
    assert_eq!(presenter.style_for("Obesity_Type_II"), Some("blue"));
}

#[test]
fn test_style_match_is_case_sensitive() {
    assert_eq!(obesity_presenter().style_for("obesity_type_i"), None);
}

#[test]
fn test_default_color() {
    let presenter = obesity_presenter().with_default_color("#34495e");
    assert_eq!(presenter.style_for("Insufficient_Weight"), Some("#34495e"));
    assert_eq!(presenter.style_for("Obesity_Type_III"), Some("#c0392b"));
}

#[test]
fn test_value_formatting() {
    let plain = Presenter::new("{}");
    assert_eq!(plain.format_value(1234.5), "1234.50");
    assert_eq!(plain.format_value(-0.001), "0.00");

    let grouped = Presenter::new("{}").with_grouping(true);
    assert_eq!(grouped.format_value(1234567.891), "1,234,567.89");
    assert_eq!(grouped.format_value(999.999), "1,000.00");
    assert_eq!(grouped.format_value(-4321.0), "-4,321.00");

    let whole = Presenter::new("{}").with_grouping(true).with_decimals(0);
    assert_eq!(whole.format_value(1500.4), "1,500");
}

#[test]
fn test_regression_headline() {
    let presenter = Presenter::new("Estimated Insurance Cost: Rs{}").with_grouping(true);
    let out = presenter.present(&Prediction::Value(4449.46));
    assert_eq!(out.text, "Estimated Insurance Cost: Rs4,449.46");
    assert_eq!(out.color, None);
}

#[test]
fn test_headline_without_placeholder() {
    let presenter = Presenter::new("Result:");
    let out = presenter.present(&Prediction::Class("Yes".to_string()));
    assert_eq!(out.text, "Result: Yes");
}

#[test]
fn test_presenting_is_idempotent() {
    let presenter = obesity_presenter();
    let prediction = Prediction::Class("Overweight_Level_II".to_string());
    assert_eq!(presenter.present(&prediction), presenter.present(&prediction));

    let presenter = Presenter::new("Rs{}").with_grouping(true);
    let prediction = Prediction::Value(12345.678);
    assert_eq!(presenter.present(&prediction), presenter.present(&prediction));
}

#[test]
fn test_error_text() {
    let err = crate::FormPredictError::InvalidNumber {
        field: "Age".to_string(),
        value: "abc".to_string(),
    };
    assert_eq!(
        Presenter::default().error_text(&err),
        "Error: Please check your inputs. (invalid number 'abc' for field 'Age')"
    );
}

#[test]
fn test_custom_error_template() {
    let err = crate::FormPredictError::MissingField {
        field: "Weight".to_string(),
    };
    let presenter = Presenter::default()
        .with_error_template("Error: {}. Please check if all fields are filled correctly.");
    assert_eq!(
        presenter.error_text(&err),
        "Error: missing answer for field 'Weight'. Please check if all fields are filled correctly."
    );

    let bare = Presenter::default().with_error_template("Failed");
    assert_eq!(bare.error_text(&err), "Failed (missing answer for field 'Weight')");
}

#[test]
fn test_toml_config() {
    let presenter: Presenter = toml::from_str(
        r##"
            headline = "Level: {}"
            group_thousands = true

            [[styles]]
            contains = "Obesity"
            color = "#c0392b"
        "##,
    )
    .unwrap();
    assert_eq!(presenter.decimals, 2);
    assert_eq!(presenter.style_for("Obesity_Type_I"), Some("#c0392b"));
}
