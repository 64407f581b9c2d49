use super::classifier::{Classifier, softmax};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Gaussian naive Bayes: per-class priors, feature means and variances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianNb {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classes: Option<Vec<String>>,
    pub class_prior: Vec<f64>,
    pub theta: Vec<Vec<f64>>,
    pub var: Vec<Vec<f64>>,
}

impl GaussianNb {
    pub fn validate(&self) -> Result<()> {
        let n_classes = self.class_prior.len();
        if n_classes < 2 {
            return Err(Error::model_format(format!(
                "gaussian_nb needs at least 2 classes, got {}",
                n_classes
            )));
        }
        if self.theta.len() != n_classes || self.var.len() != n_classes {
            return Err(Error::model_format(format!(
                "gaussian_nb has {} priors, {} mean rows and {} variance rows",
                n_classes,
                self.theta.len(),
                self.var.len()
            )));
        }
        if self.class_prior.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return Err(Error::model_format(
                "class priors must be finite and positive",
            ));
        }

        let n_features = self.n_features();
        if n_features == 0 {
            return Err(Error::model_format("gaussian_nb mean rows are empty"));
        }
        for (class, (means, vars)) in self.theta.iter().zip(&self.var).enumerate() {
            if means.len() != n_features || vars.len() != n_features {
                return Err(Error::model_format(format!(
                    "class {} has {} means and {} variances, expected {}",
                    class,
                    means.len(),
                    vars.len(),
                    n_features
                )));
            }
            if means.iter().any(|m| !m.is_finite()) {
                return Err(Error::model_format(format!(
                    "class {} has a non-finite mean",
                    class
                )));
            }
            if vars.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(Error::model_format(format!(
                    "class {} has a non-positive variance",
                    class
                )));
            }
        }

        if let Some(classes) = &self.classes {
            if classes.len() != n_classes {
                return Err(Error::model_format(format!(
                    "{} class labels for {} classes",
                    classes.len(),
                    n_classes
                )));
            }
        }

        Ok(())
    }

    fn joint_log_likelihood(&self, class: usize, row: &[f64]) -> f64 {
        let log_density: f64 = self.theta[class]
            .iter()
            .zip(&self.var[class])
            .zip(row)
            .map(|((mean, var), x)| {
                -0.5 * (2.0 * PI * var).ln() - 0.5 * (x - mean).powi(2) / var
            })
            .sum();
        self.class_prior[class].ln() + log_density
    }
}

impl Classifier for GaussianNb {
    fn kind(&self) -> &'static str {
        "gaussian_nb"
    }

    fn n_features(&self) -> usize {
        self.theta.first().map_or(0, Vec::len)
    }

    fn n_classes(&self) -> usize {
        self.class_prior.len()
    }

    fn predict_proba_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        let jll: Vec<f64> = (0..self.n_classes())
            .map(|class| self.joint_log_likelihood(class, row))
            .collect();
        // Normalizing in log space keeps far-away rows from underflowing to 0/0.
        Ok(softmax(&jll))
    }
}
