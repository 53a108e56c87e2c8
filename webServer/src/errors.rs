use thiserror::Error;

/// Failure taxonomy shared by the data layer, the aggregator and the handlers.
/// Handlers are the only place these get turned into HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Upstream request failed: {0}")]
    UpstreamFailure(String),
    #[error("Issue talking to the database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamFailure(err.to_string())
    }
}

impl AppError {
    /// Database and internal failures are both server-side faults.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Internal(_))
    }
}
