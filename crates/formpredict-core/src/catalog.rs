//! Built-in variants.
//!
//! Each built-in bundles the schema its model was trained on with the
//! presenter the front-end displays results through.
//!
//! | id | model | output |
//! |---|---|---|
//! | `obesity` | decision tree, 16 inputs | obesity level label |
//! | `insurance` | linear regression, 6 inputs | yearly cost in rupees |

use std::fmt;
use std::str::FromStr;

use crate::error::{FormPredictError, Result};
use crate::presenter::Presenter;
use crate::schema::{FeatureSchema, FieldSpec};

/// Built-in variant identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Obesity,
    Insurance,
}

impl Builtin {
    pub const ALL: [Builtin; 2] = [Builtin::Obesity, Builtin::Insurance];

    pub fn id(self) -> &'static str {
        match self {
            Builtin::Obesity => "obesity",
            Builtin::Insurance => "insurance",
        }
    }

    /// Page title for the front-end.
    pub fn title(self) -> &'static str {
        match self {
            Builtin::Obesity => "Obesity Level Check",
            Builtin::Insurance => "Medical Insurance Cost",
        }
    }

    pub fn schema(self) -> Result<FeatureSchema> {
        match self {
            Builtin::Obesity => obesity_schema(),
            Builtin::Insurance => insurance_schema(),
        }
    }

    pub fn presenter(self) -> Presenter {
        match self {
            Builtin::Obesity => Presenter::new("Predicted Obesity Level: {}")
                .with_style("Obesity", "#c0392b")
                .with_style("Overweight", "#e67e22")
                .with_style("Normal", "#27ae60")
                .with_style("Insufficient", "#2980b9")
                .with_error_template(
                    "Error: {}. Please check if all fields are filled correctly.",
                ),
            Builtin::Insurance => {
                Presenter::new("Estimated Insurance Cost: Rs{}").with_grouping(true)
            }
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Builtin {
    type Err = FormPredictError;

    fn from_str(s: &str) -> Result<Self> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.id() == s)
            .ok_or_else(|| FormPredictError::UnknownVariant(s.to_string()))
    }
}

const NO_YES: [(&str, i64); 2] = [("No", 0), ("Yes", 1)];

/// Columns in training order of the obesity decision tree.
fn obesity_schema() -> Result<FeatureSchema> {
    FeatureSchema::new(
        "obesity",
        1,
        vec![
            FieldSpec::categorical("Gender", [("Female", 0), ("Male", 1)]),
            FieldSpec::numeric("Age")
                .with_label("Age (years)")
                .with_range(1.0, 100.0),
            FieldSpec::numeric("Height")
                .with_label("Height (m)")
                .with_range(1.0, 2.5)
                .with_step(0.01),
            FieldSpec::numeric("Weight")
                .with_label("Weight (kg)")
                .with_range(20.0, 250.0)
                .with_step(0.1),
            FieldSpec::categorical("Familyoverweight_history", NO_YES)
                .with_label("Family history of overweight"),
            FieldSpec::categorical("HighCaloriefood_consumption", NO_YES)
                .with_label("Frequent high-calorie food"),
            FieldSpec::numeric("Consumption_of_vegetables")
                .with_label("Vegetables in meals (1-3)")
                .with_range(1.0, 3.0),
            FieldSpec::numeric("No_of_mainmeals")
                .with_label("Main meals per day (1-4)")
                .with_range(1.0, 4.0),
            FieldSpec::categorical(
                "food_between_meals",
                [("No", 0), ("Sometimes", 1), ("Frequently", 2), ("Always", 3)],
            )
            .with_label("Food between meals"),
            FieldSpec::categorical("Smoking", NO_YES),
            FieldSpec::numeric("WaterConsumption")
                .with_label("Water per day (1-3 l)")
                .with_range(1.0, 3.0),
            FieldSpec::categorical("Beverages_consumption", NO_YES)
                .with_label("Monitors calorie intake"),
            FieldSpec::numeric("Physical_Activit")
                .with_label("Physical activity (0-3 days)")
                .with_range(0.0, 3.0),
            FieldSpec::numeric("Time_on_devices")
                .with_label("Time on devices (0-2)")
                .with_range(0.0, 2.0),
            FieldSpec::categorical(
                "Alcohol",
                [("No", 0), ("Sometimes", 1), ("Frequently", 2)],
            ),
            FieldSpec::categorical(
                "Mode_of_transportation",
                [
                    ("Automobile", 0),
                    ("Bike", 1),
                    ("Motorbike", 2),
                    ("Public_Transportation", 3),
                    ("Walking", 4),
                ],
            )
            .with_label("Transportation"),
        ],
    )
}

/// Columns in training order of the insurance cost regressor.
fn insurance_schema() -> Result<FeatureSchema> {
    FeatureSchema::new(
        "insurance",
        1,
        vec![
            FieldSpec::numeric("age")
                .with_label("Age")
                .with_range(18.0, 100.0),
            FieldSpec::categorical("gender", [("Female", 0), ("Male", 1)]).with_label("Gender"),
            FieldSpec::numeric("bmi")
                .with_label("BMI")
                .with_range(10.0, 60.0)
                .with_step(0.1),
            FieldSpec::numeric("children")
                .with_label("Children")
                .with_range(0.0, 10.0),
            FieldSpec::categorical("smoker", NO_YES).with_label("Smoker"),
            FieldSpec::categorical(
                "region",
                [
                    ("Northeast", 0),
                    ("Northwest", 1),
                    ("Southeast", 2),
                    ("Southwest", 3),
                ],
            )
            .with_label("Region"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::Prediction;

    #[test]
    fn test_builtins_are_valid() {
        for builtin in Builtin::ALL {
            let schema = builtin.schema().unwrap();
            assert_eq!(schema.name(), builtin.id());
        }
    }

    #[test]
    fn test_obesity_column_order() {
        let schema = Builtin::Obesity.schema().unwrap();
        assert_eq!(
            schema.field_names(),
            vec![
                "Gender",
                "Age",
                "Height",
                "Weight",
                "Familyoverweight_history",
                "HighCaloriefood_consumption",
                "Consumption_of_vegetables",
                "No_of_mainmeals",
                "food_between_meals",
                "Smoking",
                "WaterConsumption",
                "Beverages_consumption",
                "Physical_Activit",
                "Time_on_devices",
                "Alcohol",
                "Mode_of_transportation",
            ]
        );
    }

    #[test]
    fn test_obesity_codes() {
        let schema = Builtin::Obesity.schema().unwrap();
        assert_eq!(schema.code_for("Gender", "Male"), Some(1));
        assert_eq!(schema.code_for("Gender", "Female"), Some(0));
        assert_eq!(schema.code_for("Alcohol", "Frequently"), Some(2));
        assert_eq!(schema.code_for("Alcohol", "Always"), None);
        assert_eq!(
            schema.code_for("Mode_of_transportation", "Public_Transportation"),
            Some(3)
        );
    }

    #[test]
    fn test_insurance_column_order() {
        let schema = Builtin::Insurance.schema().unwrap();
        assert_eq!(
            schema.field_names(),
            vec!["age", "gender", "bmi", "children", "smoker", "region"]
        );
    }

    #[test]
    fn test_parse_builtin() {
        assert_eq!("obesity".parse::<Builtin>().unwrap(), Builtin::Obesity);
        assert!(matches!(
            "diabetes".parse::<Builtin>(),
            Err(FormPredictError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_obesity_bands() {
        let presenter = Builtin::Obesity.presenter();
        let color = |label: &str| {
            presenter
                .present(&Prediction::Class(label.to_string()))
                .color
        };
        assert_eq!(color("Obesity_Type_III").as_deref(), Some("#c0392b"));
        assert_eq!(color("Overweight_Level_I").as_deref(), Some("#e67e22"));
        assert_eq!(color("Normal_Weight").as_deref(), Some("#27ae60"));
        assert_eq!(color("Insufficient_Weight").as_deref(), Some("#2980b9"));
    }

    #[test]
    fn test_error_wording_per_front_end() {
        let err = crate::FormPredictError::UnknownCategory {
            field: "Gender".to_string(),
            label: "Other".to_string(),
        };
        assert_eq!(
            Builtin::Obesity.presenter().error_text(&err),
            "Error: unknown category 'Other' for field 'Gender'. \
             Please check if all fields are filled correctly."
        );
        assert_eq!(
            Builtin::Insurance.presenter().error_text(&err),
            "Error: Please check your inputs. (unknown category 'Other' for field 'Gender')"
        );
    }
}
