use iris_serve::{Error, Result, model::Classifier};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock classifier with a fixed shape and a canned outcome
#[derive(Debug)]
pub struct MockClassifier {
    pub n_features: usize,
    pub proba: Vec<f64>,
    pub error: Option<String>,
    pub calls: AtomicUsize,
}

impl MockClassifier {
    pub fn new(n_features: usize, proba: Vec<f64>) -> Self {
        Self {
            n_features,
            proba,
            error: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Classifier for MockClassifier {
    fn kind(&self) -> &'static str {
        "mock"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn n_classes(&self) -> usize {
        self.proba.len()
    }

    fn predict_proba_row(&self, _row: &[f64]) -> Result<Vec<f64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.proba.clone())
    }
}
