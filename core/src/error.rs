use crate::sensor::SensorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("sensor {id} is not stored in the repository")]
    UnknownSensor { id: SensorId },
    #[error("repository storage failure: {0}")]
    Storage(String),
}

/// Failures surfaced by [`SecurityService`](crate::SecurityService) operations.
///
/// Errors are fail-fast: writes that happened before the failure are not
/// rolled back.
#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("sensor {id} is not known to the panel")]
    SensorNotFound { id: SensorId },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("status listener failed: {source}")]
    Listener {
        #[source]
        source: anyhow::Error,
    },
}

impl SecurityError {
    pub(crate) fn listener(source: anyhow::Error) -> Self {
        Self::Listener { source }
    }
}
