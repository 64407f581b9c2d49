use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use iris_serve::{
    config::ServerMode,
    model::{self, Classifier},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tempfile::TempDir;

/// Multinomial logistic regression fitted on the iris dataset
pub const IRIS_LOGISTIC_JSON: &str = r#"{
    "kind": "logistic_regression",
    "classes": ["setosa", "versicolor", "virginica"],
    "coefficients": [
        [-0.4233, 0.9674, -2.5171, -1.0794],
        [0.5345, -0.3216, -0.2064, -0.9442],
        [-0.1112, -0.6458, 2.7235, 2.0236]
    ],
    "intercepts": [9.8490, 2.2379, -12.0869]
}"#;

/// Gaussian naive Bayes fitted on the iris dataset
pub const IRIS_NB_JSON: &str = r#"{
    "kind": "gaussian_nb",
    "classes": ["setosa", "versicolor", "virginica"],
    "class_prior": [0.3333333333, 0.3333333333, 0.3333333334],
    "theta": [
        [5.006, 3.428, 1.462, 0.246],
        [5.936, 2.770, 4.260, 1.326],
        [6.588, 2.974, 5.552, 2.026]
    ],
    "var": [
        [0.1218, 0.1408, 0.0296, 0.0109],
        [0.2611, 0.0965, 0.2164, 0.0383],
        [0.3963, 0.1019, 0.2985, 0.0739]
    ]
}"#;

pub const SETOSA_SAMPLE: [f64; 4] = [5.1, 3.5, 1.4, 0.2];
pub const VIRGINICA_SAMPLE: [f64; 4] = [6.7, 3.0, 5.2, 2.3];

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a model document under `dir` and return its path
pub async fn write_model_file(dir: &TempDir, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join("iris-model.model");
    tokio::fs::write(&path, contents).await.unwrap();
    path
}

/// Build the application router around any classifier
pub fn create_app_with(classifier: Arc<dyn Classifier>, mode: ServerMode) -> Router {
    server::router(AppState::new(classifier, mode))
}

/// Load a model from disk and build the application router around it
pub async fn create_app_from_file(path: &Path, mode: ServerMode) -> Router {
    let model = model::load(path).await.unwrap();
    create_app_with(Arc::new(model), mode)
}

/// Router backed by the iris logistic regression fixture
pub async fn create_iris_app(mode: ServerMode) -> (Router, TempDir) {
    let temp_dir = create_temp_dir();
    let path = write_model_file(&temp_dir, IRIS_LOGISTIC_JSON).await;
    let app = create_app_from_file(&path, mode).await;
    (app, temp_dir)
}

pub fn predict_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the single probability row from a `/predict` response body
pub fn single_row(body: &Value) -> Vec<f64> {
    let rows = body.as_array().expect("response is not an array");
    assert_eq!(rows.len(), 1, "expected exactly one row, got {}", rows.len());
    rows[0]
        .as_array()
        .expect("row is not an array")
        .iter()
        .map(|p| p.as_f64().expect("probability is not a number"))
        .collect()
}

pub fn assert_is_distribution(proba: &[f64]) {
    assert!(proba.iter().all(|p| *p >= 0.0), "negative entry in {:?}", proba);
    let sum: f64 = proba.iter().sum();
    assert!((sum - 1.0).abs() < 1e-6, "probabilities sum to {}", sum);
}

pub fn argmax(proba: &[f64]) -> usize {
    proba
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap()
}
