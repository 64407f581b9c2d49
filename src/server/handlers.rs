use super::types::{ErrorResponse, HealthResponse, ProbabilityBatch};
use crate::{Error, Result, config::ServerMode, model::Classifier};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Classifier>,
    pub mode: ServerMode,
}

impl AppState {
    pub fn new(model: Arc<dyn Classifier>, mode: ServerMode) -> Self {
        Self { model, mode }
    }

    /// Renders `err` for the client. Payload errors are always described;
    /// internal errors only carry details in development mode.
    pub fn error_response(&self, err: Error) -> (StatusCode, Json<ErrorResponse>) {
        if err.is_client_error() {
            warn!("Rejected prediction request: {}", err);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                    detail: None,
                }),
            );
        }

        error!("Prediction failed: {}", err);
        let detail = match self.mode {
            ServerMode::Development => Some(err.to_string()),
            ServerMode::Production => None,
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error".to_string(),
                detail,
            }),
        )
    }
}

pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<ProbabilityBatch>, (StatusCode, Json<ErrorResponse>)> {
    let features =
        parse_features(&body, state.model.n_features()).map_err(|e| state.error_response(e))?;
    debug!("Received prediction request with {} features", features.len());

    let batch = vec![features];
    match state.model.predict_proba(&batch) {
        Ok(proba) => Ok(Json(proba)),
        Err(e) => Err(state.error_response(e)),
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.model.kind().to_string(),
        n_features: state.model.n_features(),
        n_classes: state.model.n_classes(),
    })
}

/// Decodes a request body into a feature vector of exactly `expected` numbers.
pub fn parse_features(body: &[u8], expected: usize) -> Result<Vec<f64>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::invalid_input("request body is empty"));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::invalid_input(format!("request body is not valid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::invalid_input(format!(
                "expected a JSON array of numbers, got {}",
                json_type_name(&other)
            )));
        }
    };

    let features = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_f64().ok_or_else(|| {
                Error::invalid_input(format!(
                    "element {} is {}, expected a number",
                    i,
                    json_type_name(item)
                ))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    if features.len() != expected {
        return Err(Error::FeatureMismatch {
            expected,
            actual: features.len(),
        });
    }

    Ok(features)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
