use crate::{Error, Result};

/// A pre-trained probabilistic classifier.
///
/// Implementations are immutable once constructed and are shared across
/// request handlers without locking.
pub trait Classifier: Send + Sync {
    /// Short identifier of the model family, e.g. `logistic_regression`.
    fn kind(&self) -> &'static str;

    fn n_features(&self) -> usize;

    fn n_classes(&self) -> usize;

    /// Class probabilities for a single row whose length is already known to
    /// equal [`Classifier::n_features`].
    fn predict_proba_row(&self, row: &[f64]) -> Result<Vec<f64>>;

    /// Class probabilities for every row of `batch`, one output row per input
    /// row, in the model's class order.
    fn predict_proba(&self, batch: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        batch
            .iter()
            .map(|row| {
                if row.len() != self.n_features() {
                    return Err(Error::FeatureMismatch {
                        expected: self.n_features(),
                        actual: row.len(),
                    });
                }
                let proba = self.predict_proba_row(row)?;
                if proba.iter().any(|p| !p.is_finite()) {
                    return Err(Error::inference(format!(
                        "{} produced non-finite probabilities",
                        self.kind()
                    )));
                }
                Ok(proba)
            })
            .collect()
    }
}

/// Numerically stable softmax over `scores`.
pub(crate) fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
