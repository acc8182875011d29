//! Test utilities for formpredict-core
//!
//! Provides common test fixtures used across the crate's test modules.

use crate::answers::AnswerSet;
use crate::artifact::{DecisionTree, LinearModel, ModelArtifact, TreeNode};
use crate::schema::{FeatureSchema, FieldSpec};

/// TOML form of [`demo_schema`].
pub const DEMO_SCHEMA_TOML: &str = r#"
    name = "demo"
    version = 3

    [[fields]]
    name = "Gender"
    type = "categorical"
    options = [
        { label = "Female", code = 0 },
        { label = "Male", code = 1 },
    ]

    [[fields]]
    name = "Age"
    type = "numeric"
    min = 0
    max = 120

    [[fields]]
    name = "Alcohol"
    type = "categorical"
    options = [
        { label = "No", code = 0 },
        { label = "Sometimes", code = 1 },
        { label = "Frequently", code = 2 },
    ]
"#;

/// Three-column schema: Gender, Age, Alcohol.
pub fn demo_schema() -> FeatureSchema {
    FeatureSchema::new(
        "demo",
        3,
        vec![
            FieldSpec::categorical("Gender", [("Female", 0), ("Male", 1)]),
            FieldSpec::numeric("Age").with_range(0.0, 120.0),
            FieldSpec::categorical("Alcohol", [("No", 0), ("Sometimes", 1), ("Frequently", 2)]),
        ],
    )
    .expect("demo schema is valid")
}

/// Valid answers for [`demo_schema`], encoding to `[1, 25, 1]`.
pub fn demo_answers() -> AnswerSet {
    AnswerSet::new()
        .with("Gender", "Male")
        .with("Age", "25")
        .with("Alcohol", "Sometimes")
}

/// `100 + 10*Gender + 2*Age + 0.5*Alcohol` with declared column names.
pub fn demo_linear() -> ModelArtifact {
    ModelArtifact::LinearRegression(LinearModel {
        feature_names: Some(vec![
            "Gender".to_string(),
            "Age".to_string(),
            "Alcohol".to_string(),
        ]),
        intercept: 100.0,
        coefficients: vec![10.0, 2.0, 0.5],
    })
}

/// Splits on Age <= 30, then on Alcohol <= 0.5 for the older branch.
pub fn demo_tree() -> ModelArtifact {
    ModelArtifact::DecisionTree(DecisionTree {
        feature_names: None,
        n_features: 3,
        classes: vec![
            "Normal_Weight".to_string(),
            "Overweight_Level_I".to_string(),
            "Obesity_Type_I".to_string(),
        ],
        nodes: vec![
            TreeNode::Split {
                feature: 1,
                threshold: 30.0,
                left: 1,
                right: 2,
            },
            TreeNode::Leaf { class: 0 },
            TreeNode::Split {
                feature: 2,
                threshold: 0.5,
                left: 3,
                right: 4,
            },
            TreeNode::Leaf { class: 1 },
            TreeNode::Leaf { class: 2 },
        ],
    })
}
