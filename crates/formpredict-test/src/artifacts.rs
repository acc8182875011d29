//! Model artifact fixtures.
//!
//! # Example
//!
//! ```
//! use formpredict_test::artifacts::{obesity_tree, write_artifact};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = write_artifact(dir.path(), "obesity.json", &obesity_tree());
//! assert!(path.exists());
//! ```

use std::path::{Path, PathBuf};

use formpredict_core::artifact::{DecisionTree, LinearModel, TreeNode};
use formpredict_core::{Builtin, ModelArtifact};

fn builtin_names(builtin: Builtin) -> Vec<String> {
    builtin
        .schema()
        .expect("built-in schema is valid")
        .field_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Obesity classifier splitting on weight alone (column 3).
///
/// | weight (kg) | class |
/// |---|---|
/// | ≤ 50 | Insufficient_Weight |
/// | ≤ 75 | Normal_Weight |
/// | ≤ 95 | Overweight_Level_I |
/// | > 95 | Obesity_Type_I |
pub fn obesity_tree() -> ModelArtifact {
    let split = |threshold: f64, left: usize, right: usize| TreeNode::Split {
        feature: 3,
        threshold,
        left,
        right,
    };
    ModelArtifact::DecisionTree(DecisionTree {
        feature_names: Some(builtin_names(Builtin::Obesity)),
        n_features: 16,
        classes: vec![
            "Insufficient_Weight".to_string(),
            "Normal_Weight".to_string(),
            "Overweight_Level_I".to_string(),
            "Obesity_Type_I".to_string(),
        ],
        nodes: vec![
            split(50.0, 1, 2),
            TreeNode::Leaf { class: 0 },
            split(75.0, 3, 4),
            TreeNode::Leaf { class: 1 },
            split(95.0, 5, 6),
            TreeNode::Leaf { class: 2 },
            TreeNode::Leaf { class: 3 },
        ],
    })
}

/// Insurance cost regressor over age, gender, bmi, children, smoker, region.
pub fn insurance_linear() -> ModelArtifact {
    ModelArtifact::LinearRegression(LinearModel {
        feature_names: Some(builtin_names(Builtin::Insurance)),
        intercept: -11938.54,
        coefficients: vec![256.86, -131.31, 339.19, 475.50, 23848.53, -352.96],
    })
}

/// Writes `artifact` as JSON into `dir` and returns the file path.
pub fn write_artifact(dir: &Path, name: &str, artifact: &ModelArtifact) -> PathBuf {
    let path = dir.join(name);
    let json = artifact.to_json_string().expect("artifact serializes");
    std::fs::write(&path, json).expect("artifact file is writable");
    path
}

/// Temp dir holding `obesity.json` and `insurance.json` fixtures.
///
/// The directory is removed when the returned guard drops.
pub fn fixture_artifact_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    write_artifact(dir.path(), "obesity.json", &obesity_tree());
    write_artifact(dir.path(), "insurance.json", &insurance_linear());
    dir
}
