//! Classifier models and the on-disk model loader.

mod classifier;
mod loader;
mod logistic;
mod naive_bayes;

pub use classifier::Classifier;
pub use loader::load;
pub use logistic::LogisticRegression;
pub use naive_bayes::GaussianNb;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A serialized model file, tagged by model family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    LogisticRegression(LogisticRegression),
    GaussianNb(GaussianNb),
}

impl Model {
    /// Parses and validates a model document.
    pub fn from_json(contents: &str) -> Result<Self> {
        Self::from_slice(contents.as_bytes())
    }

    /// Parses and validates a model document from raw file bytes.
    pub fn from_slice(contents: &[u8]) -> Result<Self> {
        let model: Model = serde_json::from_slice(contents)
            .map_err(|e| Error::model_format(format!("cannot decode model: {}", e)))?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::LogisticRegression(m) => m.validate(),
            Self::GaussianNb(m) => m.validate(),
        }
    }

    pub fn classes(&self) -> Option<&[String]> {
        match self {
            Self::LogisticRegression(m) => m.classes.as_deref(),
            Self::GaussianNb(m) => m.classes.as_deref(),
        }
    }

    fn inner(&self) -> &dyn Classifier {
        match self {
            Self::LogisticRegression(m) => m,
            Self::GaussianNb(m) => m,
        }
    }
}

impl Classifier for Model {
    fn kind(&self) -> &'static str {
        self.inner().kind()
    }

    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn n_classes(&self) -> usize {
        self.inner().n_classes()
    }

    fn predict_proba_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.inner().predict_proba_row(row)
    }
}
