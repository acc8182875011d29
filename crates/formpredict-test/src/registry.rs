//! Registry fixtures.

use std::sync::Arc;

use formpredict_core::{Builtin, ModelArtifact, Predictor, Variant, VariantRegistry};

use crate::artifacts::{insurance_linear, obesity_tree};

fn wire(builtin: Builtin, artifact: ModelArtifact) -> Variant {
    let schema = builtin.schema().expect("built-in schema is valid");
    let predictor = Predictor::new(artifact, &schema).expect("fixture matches schema");
    Variant::new(builtin.id(), schema, Arc::new(predictor), builtin.presenter())
        .expect("fixture variant wires")
        .with_title(builtin.title())
}

/// Registry with `obesity` and `insurance` backed by in-memory fixtures.
///
/// # Example
///
/// ```
/// use formpredict_test::{fixture_registry, obesity_answers};
///
/// let registry = fixture_registry();
/// let rendered = registry.get("obesity").unwrap().run(&obesity_answers()).unwrap();
/// assert_eq!(rendered.text, "Predicted Obesity Level: Normal_Weight");
/// ```
pub fn fixture_registry() -> VariantRegistry {
    let mut registry = VariantRegistry::new();
    registry
        .insert(wire(Builtin::Obesity, obesity_tree()))
        .expect("unique id");
    registry
        .insert(wire(Builtin::Insurance, insurance_linear()))
        .expect("unique id");
    registry
}
