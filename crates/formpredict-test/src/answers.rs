//! Answer set fixtures.
//!
//! # Example
//!
//! ```
//! use formpredict_core::Builtin;
//! use formpredict_test::answers::obesity_answers;
//!
//! let schema = Builtin::Obesity.schema().unwrap();
//! assert_eq!(obesity_answers().len(), schema.len());
//! ```

use formpredict_core::AnswerSet;

/// A complete obesity form: a 25 year old man weighing 70 kg.
pub fn obesity_answers() -> AnswerSet {
    [
        ("Gender", "Male"),
        ("Age", "25"),
        ("Height", "1.75"),
        ("Weight", "70"),
        ("Familyoverweight_history", "Yes"),
        ("HighCaloriefood_consumption", "No"),
        ("Consumption_of_vegetables", "2"),
        ("No_of_mainmeals", "3"),
        ("food_between_meals", "Sometimes"),
        ("Smoking", "No"),
        ("WaterConsumption", "2"),
        ("Beverages_consumption", "No"),
        ("Physical_Activit", "1"),
        ("Time_on_devices", "1"),
        ("Alcohol", "Sometimes"),
        ("Mode_of_transportation", "Public_Transportation"),
    ]
    .into_iter()
    .collect()
}

/// A complete insurance form: a 19 year old female smoker from the southwest.
///
/// [`insurance_linear`](crate::artifacts::insurance_linear) prices it at 25194.85.
pub fn insurance_answers() -> AnswerSet {
    [
        ("age", "19"),
        ("gender", "Female"),
        ("bmi", "27.9"),
        ("children", "0"),
        ("smoker", "Yes"),
        ("region", "Southwest"),
    ]
    .into_iter()
    .collect()
}
