use super::classifier::{Classifier, softmax};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Linear model with a softmax (multinomial) or sigmoid (binary) link.
///
/// A single coefficient row describes a binary model: the row scores the
/// second class and the first class receives the complement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<()> {
        let first = self
            .coefficients
            .first()
            .ok_or_else(|| Error::model_format("logistic_regression has no coefficient rows"))?;
        if first.is_empty() {
            return Err(Error::model_format(
                "logistic_regression coefficient rows are empty",
            ));
        }

        for (i, row) in self.coefficients.iter().enumerate() {
            if row.len() != first.len() {
                return Err(Error::model_format(format!(
                    "coefficient row {} has {} values, expected {}",
                    i,
                    row.len(),
                    first.len()
                )));
            }
            if row.iter().any(|c| !c.is_finite()) {
                return Err(Error::model_format(format!(
                    "coefficient row {} contains a non-finite value",
                    i
                )));
            }
        }

        if self.intercepts.len() != self.coefficients.len() {
            return Err(Error::model_format(format!(
                "{} intercepts for {} coefficient rows",
                self.intercepts.len(),
                self.coefficients.len()
            )));
        }
        if self.intercepts.iter().any(|b| !b.is_finite()) {
            return Err(Error::model_format("intercepts contain a non-finite value"));
        }

        if let Some(classes) = &self.classes {
            if classes.len() != self.n_classes() {
                return Err(Error::model_format(format!(
                    "{} class labels for {} classes",
                    classes.len(),
                    self.n_classes()
                )));
            }
        }

        Ok(())
    }

    fn is_binary(&self) -> bool {
        self.coefficients.len() == 1
    }

    fn decision(&self, class: usize, row: &[f64]) -> f64 {
        let dot: f64 = self.coefficients[class]
            .iter()
            .zip(row)
            .map(|(w, x)| w * x)
            .sum();
        dot + self.intercepts[class]
    }
}

impl Classifier for LogisticRegression {
    fn kind(&self) -> &'static str {
        "logistic_regression"
    }

    fn n_features(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    fn n_classes(&self) -> usize {
        if self.is_binary() {
            2
        } else {
            self.coefficients.len()
        }
    }

    fn predict_proba_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        if self.is_binary() {
            let positive = 1.0 / (1.0 + (-self.decision(0, row)).exp());
            return Ok(vec![1.0 - positive, positive]);
        }

        let scores: Vec<f64> = (0..self.coefficients.len())
            .map(|class| self.decision(class, row))
            .collect();
        Ok(softmax(&scores))
    }
}
