use std::path::PathBuf;

use formpredict::prelude::*;
use clap::Parser;
use formpredict::cli::Cli;
use formpredict::{cli, Error};
use formpredict_test::{insurance_answers, obesity_answers};

fn demo_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/formpredict.toml")
}

fn demo_registry() -> VariantRegistry {
    let config = AppConfig::load(demo_config_path()).unwrap();
    build_registry(&config).unwrap()
}

#[test]
fn demo_config_loads_every_variant() {
    let config = AppConfig::load(demo_config_path()).unwrap();
    assert_eq!(config.server.port, 8080);
    assert!(config.variants[0].artifact.is_absolute());

    let registry = build_registry(&config).unwrap();
    assert_eq!(registry.ids(), vec!["insurance", "insurance-usd", "obesity"]);
    assert_eq!(
        registry.get("insurance-usd").unwrap().title(),
        "Insurance Cost (USD)"
    );
}

#[test]
fn demo_obesity_tree() {
    let registry = demo_registry();
    let obesity = registry.get("obesity").unwrap();

    let cases = [
        ("50", "1.70", "Insufficient_Weight"),
        ("70", "1.75", "Normal_Weight"),
        ("70", "1.55", "Overweight_Level_I"),
        ("95", "1.75", "Obesity_Type_I"),
        ("95", "1.90", "Overweight_Level_I"),
        ("130", "1.80", "Obesity_Type_II"),
    ];
    for (weight, height, expected) in cases {
        let answers = obesity_answers()
            .with("Weight", weight)
            .with("Height", height);
        let rendered = obesity.run(&answers).unwrap();
        assert_eq!(rendered.prediction, Prediction::Class(expected.to_string()));
        assert_eq!(rendered.text, format!("Predicted Obesity Level: {expected}"));
    }
}

#[test]
fn demo_insurance_variants_share_artifact() {
    let registry = demo_registry();

    let rupees = registry.get("insurance").unwrap().run(&insurance_answers()).unwrap();
    assert_eq!(rupees.text, "Estimated Insurance Cost: Rs25,194.85");
    assert_eq!(rupees.color, None);

    let dollars = registry
        .get("insurance-usd")
        .unwrap()
        .run(&insurance_answers())
        .unwrap();
    assert_eq!(dollars.text, "Estimated cost: $25,194.85");
    assert_eq!(dollars.color.as_deref(), Some("#8e44ad"));
}

#[test]
fn demo_rejects_bad_answers() {
    let registry = demo_registry();
    let answers = insurance_answers().with("region", "Midwest");
    assert_eq!(
        registry.get("insurance").unwrap().respond(&answers).unwrap_err(),
        "Error: Please check your inputs. (unknown category 'Midwest' for field 'region')"
    );
}

#[test]
fn explicit_config_must_exist() {
    let missing = demo_config_path().with_file_name("absent.toml");
    let err = cli::load_config(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn one_shot_commands_install_logging() {
    let config = demo_config_path();
    let cli = Cli::try_parse_from([
        "formpredict",
        "predict",
        "--variant",
        "insurance",
        "--config",
        config.to_str().unwrap(),
        "age=19",
        "gender=Female",
        "bmi=27.9",
        "children=0",
        "smoker=Yes",
        "region=Southwest",
    ])
    .unwrap();
    cli::run(cli).await.unwrap();
    assert!(formpredict::console::is_initialized());

    let cli = Cli::try_parse_from([
        "formpredict",
        "predict",
        "--variant",
        "obesity",
        "--config",
        config.to_str().unwrap(),
        "Gender=Other",
    ])
    .unwrap();
    match cli::run(cli).await.unwrap_err() {
        Error::Usage(text) => {
            assert!(text.ends_with("Please check if all fields are filled correctly."), "{text}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
