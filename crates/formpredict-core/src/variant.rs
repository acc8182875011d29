//! Variants: one schema, one model, one presenter.
//!
//! A [`Variant`] runs the whole request path (encode → predict → present)
//! for one front-end. A [`VariantRegistry`] holds every configured variant
//! by id and is shared read-only across requests.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::answers::AnswerSet;
use crate::encoder::{FeatureEncoder, FeatureVector};
use crate::error::{FormPredictError, Result};
use crate::predictor::{check_columns, Predict};
use crate::presenter::{Presenter, Rendered};
use crate::schema::FeatureSchema;

/// A fully wired front-end.
pub struct Variant {
    id: String,
    title: String,
    encoder: FeatureEncoder,
    predictor: Arc<dyn Predict>,
    presenter: Presenter,
}

impl std::fmt::Debug for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Variant")
            .field("id", &self.id)
            .field("schema", &self.encoder.schema().tag())
            .field("n_features", &self.predictor.n_features())
            .finish()
    }
}

impl Variant {
    /// Wires a variant together.
    ///
    /// # Errors
    ///
    /// Returns [`FormPredictError::SchemaMismatch`] if the predictor's input
    /// width differs from the schema length, or if its declared column
    /// names are not the schema's fields in order.
    pub fn new(
        id: impl Into<String>,
        schema: FeatureSchema,
        predictor: Arc<dyn Predict>,
        presenter: Presenter,
    ) -> Result<Self> {
        let id = id.into();
        check_columns(
            &format!("variant '{}':", id),
            predictor.n_features(),
            predictor.feature_names(),
            &schema,
        )?;
        Ok(Self {
            title: id.clone(),
            id,
            encoder: FeatureEncoder::new(Arc::new(schema)),
            predictor,
            presenter,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn schema(&self) -> &FeatureSchema {
        self.encoder.schema()
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Encodes answers without predicting.
    pub fn encode(&self, answers: &AnswerSet) -> Result<FeatureVector> {
        self.encoder.encode(answers)
    }

    /// Runs one request end to end. Any failure aborts the request.
    pub fn run(&self, answers: &AnswerSet) -> Result<Rendered> {
        let features = self.encoder.encode(answers)?;
        let prediction = self.predictor.predict(&features)?;
        debug!(
            event = "prediction",
            variant = %self.id,
            features = features.len() as u64,
            result = %prediction,
            "Prediction served"
        );
        Ok(self.presenter.present(&prediction))
    }

    /// Runs one request, turning any failure into the user-facing error text.
    pub fn respond(&self, answers: &AnswerSet) -> std::result::Result<Rendered, String> {
        self.run(answers).map_err(|e| {
            warn!(
                event = "rejected",
                variant = %self.id,
                error = %e,
                "Request rejected"
            );
            self.presenter.error_text(&e)
        })
    }
}

/// Variants by id.
#[derive(Debug, Default)]
pub struct VariantRegistry {
    variants: BTreeMap<String, Arc<Variant>>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a variant.
    ///
    /// # Errors
    ///
    /// Returns [`FormPredictError::DuplicateVariant`] if the id is taken.
    pub fn insert(&mut self, variant: Variant) -> Result<()> {
        if self.variants.contains_key(variant.id()) {
            return Err(FormPredictError::DuplicateVariant(variant.id().to_string()));
        }
        self.variants
            .insert(variant.id().to_string(), Arc::new(variant));
        Ok(())
    }

    pub fn with(mut self, variant: Variant) -> Result<Self> {
        self.insert(variant)?;
        Ok(self)
    }

    pub fn get(&self, id: &str) -> Result<&Arc<Variant>> {
        self.variants
            .get(id)
            .ok_or_else(|| FormPredictError::UnknownVariant(id.to_string()))
    }

    /// Variants in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Variant>> {
        self.variants.values()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.variants.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
