//! Builds the variant registry from configuration.

use std::sync::Arc;

use formpredict_config::{AppConfig, SchemaSource, VariantConfig};
use formpredict_core::{FeatureSchema, Predictor, Presenter, Variant, VariantRegistry};
use tracing::info;

use crate::error::{Error, Result};

/// Loads one configured variant: schema, artifact and presenter.
///
/// Built-in variants start from their catalog title and presenter; file
/// schemas start from the id and the default presenter. Presenter
/// overrides from the config are applied last.
pub fn build_variant(config: &VariantConfig) -> Result<Variant> {
    let (schema, base_title, base_presenter) = match config.schema_source()? {
        SchemaSource::Builtin(builtin) => (
            builtin.schema()?,
            builtin.title().to_string(),
            builtin.presenter(),
        ),
        SchemaSource::File(path) => (
            FeatureSchema::from_file(&path)?,
            config.id.clone(),
            Presenter::default(),
        ),
    };

    let presenter = match &config.presenter {
        Some(overrides) => overrides.apply(base_presenter),
        None => base_presenter,
    };
    let title = config.title.clone().unwrap_or(base_title);

    let predictor = Predictor::load(&config.artifact, &schema)?;
    let variant = Variant::new(config.id.as_str(), schema, Arc::new(predictor), presenter)?
        .with_title(title);

    info!(
        event = "variant_registered",
        variant = %variant.id(),
        title = %variant.title(),
        schema = %variant.schema().tag(),
        features = variant.schema().len() as u64,
        "Variant registered"
    );
    Ok(variant)
}

/// Builds every configured variant. The first failure aborts startup.
pub fn build_registry(config: &AppConfig) -> Result<VariantRegistry> {
    config.validate()?;
    let mut registry = VariantRegistry::new();
    for variant_config in &config.variants {
        let variant = build_variant(variant_config).map_err(|e| Error::Variant {
            id: variant_config.id.clone(),
            source: Box::new(e),
        })?;
        registry.insert(variant)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formpredict_config::PresenterConfig;
    use formpredict_core::{Builtin, FormPredictError};
    use formpredict_test::{fixture_artifact_dir, insurance_answers, obesity_answers};

    #[test]
    fn test_builtin_variants() {
        let dir = fixture_artifact_dir();
        let config = AppConfig::new()
            .with_variant(VariantConfig::builtin(
                Builtin::Obesity,
                dir.path().join("obesity.json"),
            ))
            .with_variant(VariantConfig::builtin(
                Builtin::Insurance,
                dir.path().join("insurance.json"),
            ));

        let registry = build_registry(&config).unwrap();
        assert_eq!(registry.ids(), vec!["insurance", "obesity"]);

        let obesity = registry.get("obesity").unwrap();
        assert_eq!(obesity.title(), "Obesity Level Check");
        assert_eq!(
            obesity.run(&obesity_answers()).unwrap().text,
            "Predicted Obesity Level: Normal_Weight"
        );

        let insurance = registry.get("insurance").unwrap();
        assert_eq!(
            insurance.run(&insurance_answers()).unwrap().text,
            "Estimated Insurance Cost: Rs25,194.85"
        );
    }

    #[test]
    fn test_schema_file_and_overrides() {
        let dir = fixture_artifact_dir();
        let schema_path = dir.path().join("insurance.yaml");
        let yaml = r#"
name: insurance
version: 2
fields:
  - name: age
    type: numeric
  - name: gender
    type: categorical
    options:
      - { label: Female, code: 0 }
      - { label: Male, code: 1 }
  - name: bmi
    type: numeric
  - name: children
    type: numeric
  - name: smoker
    type: categorical
    options:
      - { label: "No", code: 0 }
      - { label: "Yes", code: 1 }
  - name: region
    type: categorical
    options:
      - { label: Northeast, code: 0 }
      - { label: Northwest, code: 1 }
      - { label: Southeast, code: 2 }
      - { label: Southwest, code: 3 }
"#;
        std::fs::write(&schema_path, yaml).unwrap();

        let mut variant_config =
            VariantConfig::from_schema_file("cost", schema_path, dir.path().join("insurance.json"));
        variant_config.presenter = Some(PresenterConfig {
            headline: Some("Cost: ${}".to_string()),
            decimals: Some(0),
            ..PresenterConfig::default()
        });

        let variant = build_variant(&variant_config).unwrap();
        assert_eq!(variant.title(), "cost");
        assert_eq!(variant.schema().tag(), "insurance@v2");
        assert_eq!(
            variant.run(&insurance_answers()).unwrap().text,
            "Cost: $25195"
        );
    }

    #[test]
    fn test_missing_artifact_names_variant() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new().with_variant(VariantConfig::builtin(
            Builtin::Obesity,
            dir.path().join("missing.json"),
        ));
        let err = build_registry(&config).unwrap_err();
        match &err {
            Error::Variant { id, source } => {
                assert_eq!(id, "obesity");
                assert!(matches!(
                    **source,
                    Error::Core(FormPredictError::ArtifactNotFound { .. })
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("variant 'obesity': model artifact not found"));
    }

    #[test]
    fn test_wrong_artifact_for_schema() {
        let dir = fixture_artifact_dir();
        let config = AppConfig::new().with_variant(VariantConfig::builtin(
            Builtin::Obesity,
            dir.path().join("insurance.json"),
        ));
        let err = build_registry(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::Variant { ref source, .. }
                if matches!(**source, Error::Core(FormPredictError::SchemaMismatch(_)))
        ));
    }
}
