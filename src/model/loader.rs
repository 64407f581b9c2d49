use super::{Classifier, Model};
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, info};

/// Reads and validates the model file at `path`.
///
/// Fails with [`Error::ModelNotFound`] when the file is absent and with
/// [`Error::ModelFormat`] when it cannot be decoded. The file is only read.
pub async fn load(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    debug!("Loading model from: {}", path.display());

    if !tokio::fs::try_exists(path).await? {
        return Err(Error::ModelNotFound {
            path: path.display().to_string(),
        });
    }

    // Read raw bytes so a non-UTF-8 file is a format error, not an IO error
    let contents = tokio::fs::read(path).await?;
    let model = Model::from_slice(&contents)?;

    info!(
        "Loaded {} model from {} ({} features, {} classes: {})",
        model.kind(),
        path.display(),
        model.n_features(),
        model.n_classes(),
        model
            .classes()
            .map_or_else(|| "unlabeled".to_string(), |labels| labels.join(", "))
    );

    Ok(model)
}
