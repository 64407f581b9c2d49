use serde::{Deserialize, Serialize};

/// One row of class probabilities per input row.
pub type ProbabilityBatch = Vec<Vec<f64>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub n_features: usize,
    pub n_classes: usize,
}
