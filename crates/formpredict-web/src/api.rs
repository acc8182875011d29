//! Route handlers.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Path, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use formpredict_core::{
    AnswerSet, FeatureSchema, FormPredictError, Prediction, Rendered, Variant,
};
use serde::Serialize;
use tracing::warn;

use crate::html;
use crate::AppState;

/// Successful JSON prediction.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub text: String,
    pub color: Option<String>,
    pub value: serde_json::Value,
}

impl From<Rendered> for PredictResponse {
    fn from(rendered: Rendered) -> Self {
        let value = match rendered.prediction {
            Prediction::Value(v) => serde_json::Value::from(v),
            Prediction::Class(label) => serde_json::Value::from(label),
        };
        Self {
            text: rendered.text,
            color: rendered.color,
            value,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/{variant}", get(show_form))
        .route("/{variant}/predict", post(predict_form))
        .route("/api/{variant}/predict", post(predict_json))
        .route("/api/{variant}/schema", get(get_schema))
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(html::index_page(&state.registry))
}

async fn show_form(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.registry.get(&id) {
        Ok(variant) => Html(html::form_page(variant, None, None)).into_response(),
        Err(e) => not_found_page(&e),
    }
}

async fn predict_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let variant = match state.registry.get(&id) {
        Ok(v) => v,
        Err(e) => return not_found_page(&e),
    };
    let (answers, outcome) = match form {
        Ok(Form(form)) => {
            let answers = AnswerSet::from(form);
            let outcome = variant.respond(&answers);
            (answers, outcome)
        }
        Err(rejection) => (
            AnswerSet::new(),
            Err(unreadable_body(variant, &rejection.body_text())),
        ),
    };
    Html(html::form_page(variant, Some(&answers), Some(&outcome))).into_response()
}

async fn predict_json(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<AnswerSet>, JsonRejection>,
) -> Response {
    let variant = match state.registry.get(&id) {
        Ok(v) => v,
        Err(e) => return not_found_json(&e),
    };
    let outcome = match body {
        Ok(Json(answers)) => variant.respond(&answers),
        Err(rejection) => Err(unreadable_body(variant, &rejection.body_text())),
    };
    match outcome {
        Ok(rendered) => Json(PredictResponse::from(rendered)).into_response(),
        Err(error) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse { error }),
        )
            .into_response(),
    }
}

// A request body that could not be decoded is reported like any other
// input error.
fn unreadable_body(variant: &Variant, reason: &str) -> String {
    warn!(
        event = "rejected",
        variant = %variant.id(),
        error = %reason,
        "Request body rejected"
    );
    variant.presenter().error_text(&reason)
}

async fn get_schema(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FeatureSchema>, Response> {
    state
        .registry
        .get(&id)
        .map(|variant| Json(variant.schema().clone()))
        .map_err(|e| not_found_json(&e))
}

fn not_found_page(error: &FormPredictError) -> Response {
    let body = format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><body><h1>Not found</h1><p>{}</p>\
         <p><a href=\"/\">All forms</a></p></body></html>\n",
        html::escape(&error.to_string())
    );
    (StatusCode::NOT_FOUND, Html(body)).into_response()
}

fn not_found_json(error: &FormPredictError) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
